//! SIG: per-reaction cross-section records, each a sparse window over
//! the full energy grid starting at some threshold index `IE`.

use std::collections::HashMap;

use crate::error::AceError;
use crate::model::cross_section::CrossSection;
use crate::xss::Xss;

/// For each `(mt, loca)` pair, reads the record at `JXS[7] + loca - 1`:
/// `IE` (1-based index into `energies` where this reaction turns on),
/// `NE` (point count), then `NE` cross-section values. The energy grid
/// for the record is the matching window of the full ESZ energy array.
pub fn read_sig(
    xss: &Xss,
    jxs7: i64,
    mt_list: &[i64],
    locators: &[usize],
    energies: &[f64],
) -> Result<HashMap<i64, CrossSection>, AceError> {
    let mut out = HashMap::with_capacity(mt_list.len());
    for (&mt, &loca) in mt_list.iter().zip(locators.iter()) {
        let record_start = jxs7 as usize + loca - 1;
        let ie = xss.usize_at(record_start);
        let ne = xss.usize_at(record_start + 1);
        let xs = xss.slice(record_start + 2, ne).to_vec();
        let energy = energies[ie - 1..ie - 1 + ne].to_vec();
        out.insert(mt, CrossSection::new(mt, energy, xs, None)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_windowed_record() {
        // JXS[7] = 10; at offset 1 (loca=1): IE=2, NE=2, xs=[17.0, 38.0]
        let data = Xss::parse("2.0 2.0 17.0 38.0", 4).unwrap();
        let energies = vec![1.0, 2.0, 3.0, 4.0];
        let out = read_sig(&data, 10, &[18], &[1], &energies).unwrap();
        let cs = out.get(&18).unwrap();
        assert_eq!(cs.energy, vec![2.0, 3.0]);
        assert_eq!(cs.value, vec![17.0, 38.0]);
    }
}
