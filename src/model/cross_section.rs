//! A cross section: an energy grid paired with a value grid, keyed by
//! ENDF reaction number (MT). Lookup is always lin-lin, per the
//! decoder's fixed contract (the source's default is log-log; this
//! crate specifies lin-lin uniformly).

use crate::error::AceError;

#[derive(Debug, Clone)]
pub struct CrossSection {
    pub mt: i64,
    pub name: Option<String>,
    pub energy: Vec<f64>,
    pub value: Vec<f64>,
}

impl CrossSection {
    pub fn new(mt: i64, energy: Vec<f64>, value: Vec<f64>, name: Option<String>) -> Result<Self, AceError> {
        if energy.len() != value.len() {
            return Err(AceError::LengthMismatch {
                what: "CrossSection energy/value",
                expected: energy.len(),
                got: value.len(),
            });
        }
        Ok(CrossSection { mt, name, energy, value })
    }

    /// Linear interpolation; 0 outside `[min, max]`; exact grid value on
    /// a hit.
    pub fn sample(&self, e: f64) -> f64 {
        if self.energy.is_empty() {
            return 0.0;
        }
        let first = self.energy[0];
        let last = *self.energy.last().unwrap();
        if e < first || e >= last {
            if e == last {
                return *self.value.last().unwrap();
            }
            return 0.0;
        }
        match self.energy.binary_search_by(|probe| probe.partial_cmp(&e).unwrap()) {
            Ok(i) => self.value[i],
            Err(i) => {
                let (e0, e1) = (self.energy[i - 1], self.energy[i]);
                let (v0, v1) = (self.value[i - 1], self.value[i]);
                (v1 - v0) / (e1 - e0) * (e - e0) + v0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_grid_hit() {
        let xs = CrossSection::new(1, vec![1.0, 2.0, 3.0], vec![0.1, 0.2, 0.3], None).unwrap();
        assert_eq!(xs.sample(2.0), 0.2);
    }

    #[test]
    fn linear_between_points() {
        let xs = CrossSection::new(1, vec![1.0, 2.0], vec![10.0, 20.0], None).unwrap();
        assert!((xs.sample(1.5) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn zero_outside_bounds() {
        let xs = CrossSection::new(1, vec![1.0, 2.0], vec![10.0, 20.0], None).unwrap();
        assert_eq!(xs.sample(0.5), 0.0);
        assert_eq!(xs.sample(2.5), 0.0);
    }

    #[test]
    fn length_mismatch_rejected() {
        assert!(CrossSection::new(1, vec![1.0, 2.0], vec![10.0], None).is_err());
    }
}
