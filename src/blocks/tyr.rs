//! TYR: per-reaction secondary-neutron multiplicity and reference frame.

use crate::model::table::ReactionType;
use crate::xss::Xss;

/// Reads the `ntr` signed TYR values at `jxs5` and decodes each into a
/// `ReactionType`. The raw value is also returned so callers can detect
/// `|TYR| > 100` (energy-dependent yield, decoded later from DLW).
pub fn read_tyr(xss: &Xss, jxs5: i64, mt_list: &[i64]) -> Vec<(i64, ReactionType)> {
    let start = jxs5 as usize;
    (0..mt_list.len())
        .map(|i| {
            let raw = xss.int_at(start + i);
            (raw, ReactionType::from(raw))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::{Multiplicity, ReferenceFrame};

    #[test]
    fn decodes_energy_dependent_center_of_mass() {
        let data = Xss::parse("-19.0 1.0", 2).unwrap();
        let tyr = read_tyr(&data, 1, &[18, 16]);
        assert_eq!(tyr[0].0, -19);
        assert_eq!(tyr[0].1.frame, ReferenceFrame::CenterOfMass);
        assert!(matches!(tyr[0].1.multiplicity, Multiplicity::Fixed(19)));
        assert_eq!(tyr[1].1.frame, ReferenceFrame::Laboratory);
        assert!(matches!(tyr[1].1.multiplicity, Multiplicity::Fixed(1)));
    }

    #[test]
    fn decodes_energy_dependent_yield() {
        let data = Xss::parse("-101.0", 1).unwrap();
        let tyr = read_tyr(&data, 1, &[16]);
        assert!(matches!(tyr[0].1.multiplicity, Multiplicity::EnergyDependent));
    }
}
