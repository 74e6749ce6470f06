//! The top-level decode entry point: opens a file, seeks to the table's
//! start line, and hands the rest to the synchronous block dispatcher.

use std::io::{BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::blocks::and::read_and;
use crate::blocks::esz::read_esz;
use crate::blocks::land::read_land;
use crate::blocks::ldlw::{read_dlw, read_ldlw};
use crate::blocks::lqr::read_lqr;
use crate::blocks::lsig::read_lsig;
use crate::blocks::mtr::read_mtr;
use crate::blocks::nu::{read_delayed_nubar, read_nu};
use crate::blocks::sig::read_sig;
use crate::blocks::tyr::read_tyr;
use crate::error::{log_diagnostic, AceError, Diagnostic};
use crate::header::Header;
use crate::model::nubar::Nubar;
use crate::model::table::{
    AceTable, CePayload, ChargedParticlePayload, Payload, PhotonPayload, ELASTIC_ANGULAR_KEY,
};
use crate::sab::read_sab;
use crate::xss::Xss;

#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Whether to keep the raw XSS buffer on the returned table after
    /// all blocks are decoded. Defaults to `false`: once every block
    /// decoder has copied what it needs into structured form, the
    /// multi-megabyte flat array serves no further purpose.
    pub retain_xss: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { retain_xss: false }
    }
}

/// Opens `path` asynchronously, seeks to `start_line` (1-based, as
/// given by an xsdir `address` field), and decodes the table found
/// there. Everything past the file open is synchronous and
/// non-suspending, per this crate's concurrency model.
pub async fn decode_table(
    path: impl AsRef<Path>,
    start_line: u64,
    opts: DecodeOptions,
) -> Result<AceTable, AceError> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).await?;

    let mut cursor = Cursor::new(contents);
    if start_line > 1 {
        skip_lines(&mut cursor, start_line - 1)?;
    }
    let mut reader = BufReader::new(cursor);
    decode_from_reader(&mut reader, opts)
}

fn skip_lines(cursor: &mut Cursor<String>, n: u64) -> Result<(), AceError> {
    cursor.seek(SeekFrom::Start(0))?;
    let mut reader = BufReader::new(&mut *cursor);
    let mut line = String::new();
    for _ in 0..n {
        line.clear();
        reader.read_line(&mut line)?;
    }
    Ok(())
}

/// Synchronous decode core: header, then XSS, then flavor-dispatched
/// block decoding.
pub fn decode_from_reader<R: BufRead>(reader: &mut R, opts: DecodeOptions) -> Result<AceTable, AceError> {
    let header = Header::from_reader(reader)?;
    let expected = header.nxs(1) as usize;

    let mut remaining = String::new();
    std::io::Read::read_to_string(reader, &mut remaining)?;
    let xss = Xss::parse(&remaining, expected)?;

    let mut diagnostics = Vec::new();
    let payload = match table_flavor(&header.suffix) {
        TableFlavor::ContinuousEnergy => Payload::ContinuousEnergy(decode_ce(&xss, &header, &mut diagnostics)?),
        TableFlavor::Sab => Payload::Sab(read_sab(&xss, &header)),
        TableFlavor::Photon => Payload::Photon(PhotonPayload { present: true }),
        TableFlavor::ChargedParticle => Payload::ChargedParticle(ChargedParticlePayload { present: true }),
    };

    let table = AceTable {
        header,
        payload,
        diagnostics,
    };

    if opts.retain_xss {
        // Retained for callers that want raw-array access; nothing in
        // this crate's own types holds onto `xss` otherwise.
        let _ = xss.as_slice();
    }

    Ok(table)
}

enum TableFlavor {
    ContinuousEnergy,
    Sab,
    Photon,
    ChargedParticle,
}

/// ACE library suffixes end in a letter naming the table's flavor:
/// `c` continuous-energy neutron, `t` thermal S(alpha,beta), `p`/`u`
/// photon/photoatomic, anything else charged-particle. Absent a
/// trailing letter, continuous-energy is assumed.
fn table_flavor(suffix: &str) -> TableFlavor {
    match suffix.chars().last() {
        Some('t') => TableFlavor::Sab,
        Some('p') | Some('u') => TableFlavor::Photon,
        Some('c') | None => TableFlavor::ContinuousEnergy,
        Some(_) => TableFlavor::ChargedParticle,
    }
}

fn decode_ce(xss: &Xss, header: &Header, diagnostics: &mut Vec<Diagnostic>) -> Result<CePayload, AceError> {
    let nes = header.nxs(3) as usize;
    let esz = read_esz(xss, header.jxs(1), nes);

    let mut payload = CePayload {
        energies: esz.energy,
        ..Default::default()
    };
    payload
        .xs
        .insert(1, crate::model::cross_section::CrossSection::new(1, payload.energies.clone(), esz.total, None)?);
    payload.xs.insert(
        2,
        crate::model::cross_section::CrossSection::new(2, payload.energies.clone(), esz.elastic, None)?,
    );
    payload.xs.insert(
        102,
        crate::model::cross_section::CrossSection::new(102, payload.energies.clone(), esz.absorption, None)?,
    );
    payload.xs.insert(
        301,
        crate::model::cross_section::CrossSection::new(301, payload.energies.clone(), esz.heating, None)?,
    );

    if header.jxs(2) != 0 {
        let (prompt, total) = read_nu(xss, header.jxs(2))?;
        let mut nubar = Nubar {
            prompt,
            total,
            delayed: None,
            precursor_families: Vec::new(),
        };
        if header.jxs(24) > 0 {
            let delayed = read_delayed_nubar(
                xss,
                header.jxs(24),
                header.jxs(25),
                header.jxs(26),
                header.jxs(27),
                header.nxs(8) as usize,
                diagnostics,
            )?;
            nubar.delayed = delayed.delayed;
            nubar.precursor_families = delayed.precursor_families;
        }
        payload.nubar = Some(nubar);
    }

    let ntr = header.nxs(4) as usize;
    if ntr != 0 {
        let mt_list = read_mtr(xss, header.jxs(3), ntr);
        let q_values = read_lqr(xss, header.jxs(4), &mt_list);
        let tyr = read_tyr(xss, header.jxs(5), &mt_list);
        let locators = read_lsig(xss, header.jxs(6), &mt_list);
        let sig = read_sig(xss, header.jxs(7), &mt_list, &locators, &payload.energies)?;
        for (mt, cs) in sig {
            payload.xs.insert(mt, cs);
        }
        payload.reaction_type = tyr.iter().map(|(_, rt)| *rt).collect();
        payload.mt_list = mt_list.clone();
        payload.q_values = q_values;

        // LAND/LDLW are sized by NXS[5] (neutron-producing reactions only),
        // a proper subset of the NXS[4] reactions MTR/LQR/TYR/LSIG/SIG cover.
        let neutron_producing: Vec<(i64, i64)> = mt_list
            .iter()
            .zip(tyr.iter())
            .filter(|(_, (raw, _))| *raw != 0)
            .map(|(&mt, (raw, _))| (mt, *raw))
            .collect();
        let nr = header.nxs(5) as usize;

        let land = read_land(xss, header.jxs(8), nr);
        if let Some(dist) = read_and(xss, header.jxs(9), land[0]) {
            payload.angular_dist.insert(ELASTIC_ANGULAR_KEY, dist);
        }
        for (i, &(mt, _)) in neutron_producing.iter().enumerate().take(nr) {
            if let Some(dist) = read_and(xss, header.jxs(9), land[i + 1]) {
                payload.angular_dist.insert(mt, dist);
            }
        }

        let secondary_locators = read_ldlw(xss, header.jxs(10), nr);
        for (i, &(mt, raw_tyr)) in neutron_producing.iter().enumerate().take(nr) {
            if mt > 100 {
                log_diagnostic(diagnostics, Diagnostic::UnsupportedMtAbove100(mt));
                continue;
            }
            let sd = read_dlw(
                xss,
                header.jxs(11),
                secondary_locators[i],
                mt,
                raw_tyr,
                diagnostics,
            )?;
            payload.secondary_dist.insert(mt, sd);
        }
    }

    payload.photon_production_present = header.jxs(12) != 0;

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavor_from_suffix() {
        assert!(matches!(table_flavor("50c"), TableFlavor::ContinuousEnergy));
        assert!(matches!(table_flavor("10t"), TableFlavor::Sab));
        assert!(matches!(table_flavor("12p"), TableFlavor::Photon));
    }
}
