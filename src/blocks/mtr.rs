//! MTR: the list of ENDF reaction numbers (MT) present beyond elastic.

use crate::xss::Xss;

/// Reads the `ntr` integer MT numbers at `jxs3`.
pub fn read_mtr(xss: &Xss, jxs3: i64, ntr: usize) -> Vec<i64> {
    let start = jxs3 as usize;
    (0..ntr).map(|i| xss.int_at(start + i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mt_list() {
        let data = Xss::parse("16.0 18.0 102.0", 3).unwrap();
        assert_eq!(read_mtr(&data, 1, 3), vec![16, 18, 102]);
    }
}
