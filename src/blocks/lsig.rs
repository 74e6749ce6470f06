//! LSIG: locators into SIG for each reaction's cross-section record,
//! relative to `JXS[7]`.

use crate::xss::Xss;

pub fn read_lsig(xss: &Xss, jxs6: i64, mt_list: &[i64]) -> Vec<usize> {
    let start = jxs6 as usize;
    (0..mt_list.len()).map(|i| xss.usize_at(start + i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_locators() {
        let data = Xss::parse("1.0 9.0", 2).unwrap();
        assert_eq!(read_lsig(&data, 1, &[16, 18]), vec![1, 9]);
    }
}
