//! Per-incident-energy secondary-angle distributions (LAND/AND blocks,
//! and the per-outgoing-energy angular data embedded in law 61).

use crate::interpolation::InterpolationScheme;

#[derive(Debug, Clone)]
pub enum AngularDistributionAtEnergy {
    Isotropic,
    /// 32 equiprobable cosine bin boundaries.
    Equiprobable32 { cosines: Vec<f64> },
    Tabular {
        interpolation: InterpolationScheme,
        cosine: Vec<f64>,
        pdf: Vec<f64>,
        cdf: Vec<f64>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AngularDistribution {
    pub incident_energy: Vec<f64>,
    pub distributions: Vec<AngularDistributionAtEnergy>,
}

impl AngularDistribution {
    pub fn isotropic_everywhere() -> Self {
        AngularDistribution {
            incident_energy: Vec::new(),
            distributions: Vec::new(),
        }
    }
}
