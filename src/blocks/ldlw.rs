//! LDLW/DLW: per-reaction secondary-energy-distribution records. LDLW
//! gives locators relative to `JXS[11]`; DLW at each locator carries a
//! chain pointer, a law id, the probability-vs-energy table, and the
//! law's own payload.

use crate::error::{log_diagnostic, AceError, Diagnostic};
use crate::interpolation::InterpolationTable;
use crate::laws::{self, LawPayload};
use crate::model::secondary_distribution::{SecondaryDistribution, Yield};
use crate::xss::Xss;

/// Reads the `n` locators at `jxs10`, relative to `jxs11`.
pub fn read_ldlw(xss: &Xss, jxs10: i64, n: usize) -> Vec<i64> {
    let start = jxs10 as usize;
    (0..n).map(|i| xss.int_at(start + i)).collect()
}

/// Decodes the DLW record for one reaction at `JXS[11] + loca - 1`.
/// Only the first law in a chain (`LNW == 0`) is decoded; a nonzero
/// chain pointer is reported as a diagnostic and the chain is not
/// followed further, per this crate's scope.
pub fn read_dlw(
    xss: &Xss,
    jxs11: i64,
    loca: i64,
    mt: i64,
    yield_raw: i64,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<SecondaryDistribution, AceError> {
    let p = (jxs11 + loca - 1) as usize;
    let lnw = xss.int_at(p);
    let law = xss.int_at(p + 1);
    let idat = xss.int_at(p + 2);
    let (probability, next) = InterpolationTable::read(xss, p + 3)?;

    if lnw != 0 {
        log_diagnostic(
            diagnostics,
            Diagnostic::UnsupportedChainedLaw {
                mt,
                next_law_offset: lnw,
            },
        );
    }

    let ldat = (jxs11 + idat - 1) as usize;
    let payload = laws::decode_law(law, xss, ldat, jxs11)?;
    match &payload {
        LawPayload::Unknown(id) => log_diagnostic(diagnostics, Diagnostic::UnknownLaw(*id)),
        LawPayload::Unsupported(id) => log_diagnostic(diagnostics, Diagnostic::UnsupportedLaw(*id)),
        _ => {}
    }

    let yield_ = if yield_raw.abs() > 100 {
        // Energy-dependent yield table immediately follows the law's
        // own data at `next`, when `TYR` indicated energy dependence.
        let (table, _) = InterpolationTable::read(xss, next)?;
        Yield::EnergyDependent(table)
    } else {
        Yield::Constant(yield_raw.abs())
    };

    Ok(SecondaryDistribution {
        law,
        probability,
        yield_,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_locators() {
        let data = Xss::parse("1.0 20.0", 2).unwrap();
        assert_eq!(read_ldlw(&data, 1, 2), vec![1, 20]);
    }

    #[test]
    fn decodes_law3_record() {
        // jxs11 = 1, loca = 1: LNW=0, LAW=3, IDAT=1,
        // probability table NR=0,NE=2,E=[1,2],P=[1,1] (8 floats, ends at p+3+8-1... )
        // then law3 payload at ldat = jxs11 + idat - 1 = 1: two scalars
        let data = Xss::parse("0.0 3.0 1.0 0.0 2.0 1.0 2.0 1.0 1.0 5.0 6.0", 11).unwrap();
        let mut diags = Vec::new();
        let sd = read_dlw(&data, 1, 1, 0, 1, &mut diags).unwrap();
        assert_eq!(sd.law, 3);
        assert!(diags.is_empty());
        match sd.payload {
            LawPayload::Law3(p) => {
                assert_eq!(p.l0, 5.0);
                assert_eq!(p.l1, 6.0);
            }
            _ => panic!("expected law 3"),
        }
    }

    #[test]
    fn chained_law_is_diagnosed() {
        let data = Xss::parse("1.0 3.0 1.0 0.0 2.0 1.0 2.0 1.0 1.0 5.0 6.0", 11).unwrap();
        let mut diags = Vec::new();
        let _ = read_dlw(&data, 1, 1, 0, 1, &mut diags).unwrap();
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0], Diagnostic::UnsupportedChainedLaw { .. }));
    }
}
