//! LAND: per-reaction locators into AND for angular distributions.
//! Entry `0` is always elastic scattering; entries `1..` line up with
//! the reactions that release neutrons (the callers filter `mt_list`
//! by `|TYR| != 0` before zipping against `land[1..]`).

use crate::xss::Xss;

/// Reads the `n+1` signed locators at `jxs8`, where `n` is the number of
/// neutron-producing reactions (`NXS[5]`). Locator `0` means isotropic
/// everywhere; `-1` means no distribution given (deferred to the law
/// decoder); otherwise it's a 1-based offset into AND relative to `JXS[9]`.
pub fn read_land(xss: &Xss, jxs8: i64, n: usize) -> Vec<i64> {
    let start = jxs8 as usize;
    (0..=n).map(|i| xss.int_at(start + i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_locators_including_elastic() {
        let data = Xss::parse("1.0 0.0 -1.0", 3).unwrap();
        assert_eq!(read_land(&data, 1, 2), vec![1, 0, -1]);
    }
}
