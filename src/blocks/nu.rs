//! NU: prompt and/or total fission neutron yield, plus (when the
//! material is fissile and carries delayed data) the delayed-nubar
//! tabulation, precursor families, and their DNEDL/DNED secondary
//! energy distributions.

use crate::blocks::ldlw::read_dlw;
use crate::error::{AceError, Diagnostic};
use crate::interpolation::InterpolationTable;
use crate::model::nubar::{Nubar, NubarForm, PrecursorFamily};
use crate::xss::Xss;

/// Reads one polynomial-or-tabulated nubar record starting at `p`.
/// Returns the form and the cursor one past it.
fn read_nu_form(xss: &Xss, p: usize) -> Result<(NubarForm, usize), AceError> {
    match xss.int_at(p) {
        1 => {
            let nc = xss.usize_at(p + 1);
            let coefficients = xss.slice(p + 2, nc).to_vec();
            Ok((NubarForm::Polynomial { coefficients }, p + 2 + nc))
        }
        2 => {
            let (table, next) = InterpolationTable::read(xss, p + 1)?;
            Ok((NubarForm::Tabular(table), next))
        }
        other => Err(AceError::InvalidHeader(format!("unknown LNU formulation {other}"))),
    }
}

/// Reads the NU block at `jxs2`: a single record, or (when `XSS[jxs2] <
/// 0`) a prompt record immediately followed by a total record.
pub fn read_nu(xss: &Xss, jxs2: i64) -> Result<(Option<NubarForm>, Option<NubarForm>), AceError> {
    let k = jxs2 as usize;
    let flag = xss.int_at(k);
    if flag < 0 {
        let (prompt, next) = read_nu_form(xss, k + 1)?;
        let (total, _) = read_nu_form(xss, next)?;
        Ok((Some(prompt), Some(total)))
    } else {
        let (form, _) = read_nu_form(xss, k)?;
        Ok((Some(form.clone()), Some(form)))
    }
}

/// Reads delayed nubar at `jxs24` (a leading `LNU` flag, always `2`,
/// followed by the tabulated shape), the `npcr` precursor families at
/// `jxs25`, and their DNEDL/DNED emission distributions at
/// `jxs26`/`jxs27`.
#[allow(clippy::too_many_arguments)]
pub fn read_delayed_nubar(
    xss: &Xss,
    jxs24: i64,
    jxs25: i64,
    jxs26: i64,
    jxs27: i64,
    npcr: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Nubar, AceError> {
    let (delayed, _) = InterpolationTable::read(xss, jxs24 as usize + 1)?;

    let mut cursor = jxs25 as usize;
    let mut families = Vec::with_capacity(npcr);
    for _ in 0..npcr {
        let decay_constant = xss.at(cursor);
        let (probability, next) = InterpolationTable::read(xss, cursor + 1)?;
        families.push(PrecursorFamily {
            decay_constant,
            probability,
            emission: None,
        });
        cursor = next;
    }

    let locators: Vec<i64> = (0..npcr).map(|i| xss.int_at(jxs26 as usize + i)).collect();
    for (i, &loca) in locators.iter().enumerate() {
        let sd = read_dlw(xss, jxs27, loca, i as i64 + 1, 1, diagnostics)?;
        families[i].emission = Some(sd);
    }

    Ok(Nubar {
        prompt: None,
        total: None,
        delayed: Some(NubarForm::Tabular(delayed)),
        precursor_families: families,
    })
}
