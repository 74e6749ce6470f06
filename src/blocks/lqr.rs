//! LQR: reaction Q-values, one per entry in the MT list.

use crate::xss::Xss;

/// Reads the `ntr` Q-values at `jxs4`, keyed by the corresponding MT
/// from `mt_list`.
pub fn read_lqr(xss: &Xss, jxs4: i64, mt_list: &[i64]) -> Vec<f64> {
    let start = jxs4 as usize;
    (0..mt_list.len()).map(|i| xss.at(start + i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_q_values() {
        let data = Xss::parse("5.0 -1.2 0.0", 3).unwrap();
        let q = read_lqr(&data, 1, &[16, 18, 102]);
        assert_eq!(q, vec![5.0, -1.2, 0.0]);
    }
}
