//! AND: energy-dependent angular distributions pointed to by LAND.
//!
//! Each non-sentinel LAND locator leads to a record of `NE` incident
//! energies paired with per-energy sub-locators: `0` is isotropic,
//! `> 0` points to a 32-point equiprobable-cosine table, `< 0` points
//! to a tabulated `(cosine, pdf, cdf)` triple. All locators are 1-based
//! offsets relative to `JXS[9]`.

use crate::interpolation::InterpolationScheme;
use crate::model::angular_distribution::{AngularDistribution, AngularDistributionAtEnergy};
use crate::xss::Xss;

/// Reads the angular distribution for a single LAND locator. Returns
/// `None` for the `-1` sentinel (no distribution; handled elsewhere).
pub fn read_and(xss: &Xss, jxs9: i64, locator: i64) -> Option<AngularDistribution> {
    if locator == -1 {
        return None;
    }
    if locator == 0 {
        return Some(AngularDistribution::isotropic_everywhere());
    }

    let base = jxs9 as usize;
    let record_start = base + locator as usize - 1;
    let ne = xss.usize_at(record_start);
    let ein_start = record_start + 1;
    let loc_start = ein_start + ne;
    let incident_energy = xss.slice(ein_start, ne).to_vec();
    let sub_locators: Vec<i64> = (0..ne).map(|i| xss.int_at(loc_start + i)).collect();

    let distributions = sub_locators
        .into_iter()
        .map(|sub| read_distribution_at_energy(xss, base, sub))
        .collect();

    Some(AngularDistribution {
        incident_energy,
        distributions,
    })
}

fn read_distribution_at_energy(xss: &Xss, base: usize, sub_locator: i64) -> AngularDistributionAtEnergy {
    if sub_locator == 0 {
        return AngularDistributionAtEnergy::Isotropic;
    }
    if sub_locator > 0 {
        let start = base + sub_locator as usize - 1;
        return AngularDistributionAtEnergy::Equiprobable32 {
            cosines: xss.slice(start, 33).to_vec(),
        };
    }

    let start = base + (-sub_locator) as usize - 1;
    let interpolation = InterpolationScheme::try_from(xss.int_at(start)).unwrap_or(InterpolationScheme::LinLin);
    let np = xss.usize_at(start + 1);
    let cosine_start = start + 2;
    let pdf_start = cosine_start + np;
    let cdf_start = pdf_start + np;
    AngularDistributionAtEnergy::Tabular {
        interpolation,
        cosine: xss.slice(cosine_start, np).to_vec(),
        pdf: xss.slice(pdf_start, np).to_vec(),
        cdf: xss.slice(cdf_start, np).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xss(values: &[f64]) -> Xss {
        Xss::parse(
            &values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" "),
            values.len(),
        )
        .unwrap()
    }

    #[test]
    fn sentinel_locator_is_none() {
        let data = xss(&[1.0]);
        assert!(read_and(&data, 1, -1).is_none());
    }

    #[test]
    fn zero_locator_is_isotropic_everywhere() {
        let data = xss(&[1.0]);
        let dist = read_and(&data, 1, 0).unwrap();
        assert!(dist.incident_energy.is_empty());
    }

    #[test]
    fn tabular_sub_distribution_reads_three_arrays() {
        // jxs9 = 1. record at locator=1 (base+0): NE=1, Ein=[1.0], loc=[-4]
        // tabular distribution at base + 4 - 1 = base+3 (0-indexed 3): interp=2, NP=2, cos=[-1,1], pdf=[0.5,0.5], cdf=[0,1]
        let data = xss(&[1.0, 1.0, -4.0, 2.0, 2.0, -1.0, 1.0, 0.5, 0.5, 0.0, 1.0]);
        let dist = read_and(&data, 1, 1).unwrap();
        assert_eq!(dist.incident_energy, vec![1.0]);
        match &dist.distributions[0] {
            AngularDistributionAtEnergy::Tabular { cosine, pdf, cdf, .. } => {
                assert_eq!(cosine, &vec![-1.0, 1.0]);
                assert_eq!(pdf, &vec![0.5, 0.5]);
                assert_eq!(cdf, &vec![0.0, 1.0]);
            }
            _ => panic!("expected tabular distribution"),
        }
    }

    #[test]
    fn equiprobable_sub_distribution_reads_33_cosines() {
        let mut values = vec![1.0, 1.0, 4.0];
        values.extend((0..33).map(|i| i as f64 / 32.0 * 2.0 - 1.0));
        let data = xss(&values);
        let dist = read_and(&data, 1, 1).unwrap();
        match &dist.distributions[0] {
            AngularDistributionAtEnergy::Equiprobable32 { cosines } => assert_eq!(cosines.len(), 33),
            _ => panic!("expected equiprobable distribution"),
        }
    }
}
