//! Fission neutron multiplicity (nubar): prompt, total, and delayed.

use crate::interpolation::InterpolationTable;
use crate::model::secondary_distribution::SecondaryDistribution;

#[derive(Debug, Clone)]
pub enum NubarForm {
    Polynomial { coefficients: Vec<f64> },
    Tabular(InterpolationTable),
}

impl NubarForm {
    pub fn evaluate(&self, energy: f64) -> Option<f64> {
        match self {
            NubarForm::Polynomial { coefficients } => {
                // Horner's method: nu(E) = c0 + c1*E + c2*E^2 + ...
                Some(coefficients.iter().rev().fold(0.0, |acc, c| acc * energy + c))
            }
            NubarForm::Tabular(table) => table.interpolate(energy).ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrecursorFamily {
    pub decay_constant: f64,
    pub probability: InterpolationTable,
    /// The family's emitted-neutron energy distribution, decoded via the
    /// same law registry as MT-indexed secondary distributions (the
    /// `JXS[26]`/`JXS[27]` DNEDL/DNED analog of LDLW/DLW).
    pub emission: Option<SecondaryDistribution>,
}

#[derive(Debug, Clone, Default)]
pub struct Nubar {
    pub prompt: Option<NubarForm>,
    pub total: Option<NubarForm>,
    pub delayed: Option<NubarForm>,
    pub precursor_families: Vec<PrecursorFamily>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_evaluates() {
        let form = NubarForm::Polynomial {
            coefficients: vec![2.5, 0.1],
        };
        assert!((form.evaluate(10.0).unwrap() - 3.5).abs() < 1e-9);
    }
}
