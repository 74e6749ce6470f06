//! The thirteen outgoing-energy-distribution laws. Each decoder reads a
//! sub-slice of XSS starting at `LDAT` (itself located via the DLW
//! block, see `crate::blocks::dlw`); most share one of two preludes
//! (`TabularDistributionPrelude` for laws 4/44/61/67, the generic
//! `InterpolationTable` shape for laws 5/7/9/11).

use crate::error::AceError;
use crate::interpolation::{InterpolationRegions, InterpolationScheme, InterpolationTable, TabularDistributionPrelude};
use crate::model::angular_distribution::AngularDistributionAtEnergy;
use crate::xss::Xss;

#[derive(Debug, Clone)]
pub struct Law1Entry {
    pub incident_energy: f64,
    pub outgoing_bin_edges: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Law3Payload {
    pub l0: f64,
    pub l1: f64,
}

#[derive(Debug, Clone)]
pub struct ContinuousTabularEntry {
    pub incident_energy: f64,
    /// Number of leading discrete lines, if `INTT` was encoded as `ND*10 + int`.
    pub discrete_lines: Option<usize>,
    pub interpolation: InterpolationScheme,
    pub eout: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct KalbachEntry {
    pub base: ContinuousTabularEntry,
    pub precompound_fraction: Vec<f64>,
    pub angular_slope: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Law61AngularEntry {
    pub angle: AngularDistributionAtEnergy,
}

#[derive(Debug, Clone)]
pub struct Law61Entry {
    pub base: ContinuousTabularEntry,
    pub angles: Vec<Law61AngularEntry>,
}

#[derive(Debug, Clone)]
pub struct SpectrumPayload {
    pub regions: InterpolationRegions,
    pub incident_energy: Vec<f64>,
    pub t: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Law5Payload {
    pub spectrum: SpectrumPayload,
    pub bin_boundaries: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Law7Or9Payload {
    pub spectrum: SpectrumPayload,
    pub restriction_energy: f64,
}

#[derive(Debug, Clone)]
pub struct Law11Payload {
    pub a: SpectrumPayload,
    pub b: SpectrumPayload,
    pub restriction_energy: f64,
}

#[derive(Debug, Clone)]
pub struct Law66Payload {
    pub npsx: f64,
    pub total_mass_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct Law67CosineEntry {
    pub interpolation: InterpolationScheme,
    pub eout: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Law67Entry {
    pub incident_energy: f64,
    pub cosine_interpolation: InterpolationScheme,
    pub cosines: Vec<f64>,
    pub per_cosine: Vec<Law67CosineEntry>,
}

#[derive(Debug, Clone)]
pub enum LawPayload {
    Law1(Vec<Law1Entry>),
    Law3(Law3Payload),
    Law4(Vec<ContinuousTabularEntry>),
    Law5(Law5Payload),
    Law7(Law7Or9Payload),
    Law9(Law7Or9Payload),
    Law11(Law11Payload),
    Law44(Vec<KalbachEntry>),
    Law61(Vec<Law61Entry>),
    Law66(Law66Payload),
    Law67(Vec<Law67Entry>),
    /// Laws 2, 22, 24: envelope decodes fully, payload is an extension point.
    Unsupported(i64),
    /// A law id absent from this registry entirely.
    Unknown(i64),
}

impl LawPayload {
    pub fn law_id(&self) -> i64 {
        match self {
            LawPayload::Law1(_) => 1,
            LawPayload::Law3(_) => 3,
            LawPayload::Law4(_) => 4,
            LawPayload::Law5(_) => 5,
            LawPayload::Law7(_) => 7,
            LawPayload::Law9(_) => 9,
            LawPayload::Law11(_) => 11,
            LawPayload::Law44(_) => 44,
            LawPayload::Law61(_) => 61,
            LawPayload::Law66(_) => 66,
            LawPayload::Law67(_) => 67,
            LawPayload::Unsupported(id) | LawPayload::Unknown(id) => *id,
        }
    }
}

/// Splits a raw `INTT` code into discrete-line count and interpolation
/// scheme, per laws 4/44/61/67: `INTT > 10` means `ND = INTT / 10`
/// discrete lines precede the continuous part, whose scheme is
/// `INTT mod 10`.
fn split_intt(raw: i64) -> Result<(Option<usize>, InterpolationScheme), AceError> {
    if raw > 10 {
        let nd = raw / 10;
        let small = raw % 10;
        Ok((Some(nd as usize), InterpolationScheme::try_from(small)?))
    } else {
        Ok((None, InterpolationScheme::try_from(raw)?))
    }
}

fn read_continuous_tabular_entries(
    xss: &Xss,
    prelude: &TabularDistributionPrelude,
    with_kalbach: bool,
) -> Result<Vec<(ContinuousTabularEntry, Option<(Vec<f64>, Vec<f64>)>)>, AceError> {
    let mut k = prelude.next;
    let mut out = Vec::with_capacity(prelude.ne);
    for &ein in &prelude.incident_energies {
        let (nd, interpolation) = split_intt(xss.int_at(k))?;
        let np = xss.usize_at(k + 1);
        let data_start = k + 2;
        let eout = xss.slice(data_start, np).to_vec();
        let pdf = xss.slice(data_start + np, np).to_vec();
        let cdf = xss.slice(data_start + 2 * np, np).to_vec();
        let base = ContinuousTabularEntry {
            incident_energy: ein,
            discrete_lines: nd,
            interpolation,
            eout,
            pdf,
            cdf,
        };
        if with_kalbach {
            let r = xss.slice(data_start + 3 * np, np).to_vec();
            let a = xss.slice(data_start + 4 * np, np).to_vec();
            k += 2 + 5 * np;
            out.push((base, Some((r, a))));
        } else {
            k += 2 + 3 * np;
            out.push((base, None));
        }
    }
    Ok(out)
}

fn read_tabular_angle(xss: &Xss, jxs11: i64, locator: i64) -> AngularDistributionAtEnergy {
    if locator == 0 {
        return AngularDistributionAtEnergy::Isotropic;
    }
    let l = (jxs11 + locator - 1) as usize;
    let jj = xss.int_at(l);
    let np = xss.usize_at(l + 1);
    let cosine = xss.slice(l + 2, np).to_vec();
    let pdf = xss.slice(l + 2 + np, np).to_vec();
    let cdf = xss.slice(l + 2 + 2 * np, np).to_vec();
    let interpolation = InterpolationScheme::try_from(jj).unwrap_or(InterpolationScheme::Histogram);
    AngularDistributionAtEnergy::Tabular {
        interpolation,
        cosine,
        pdf,
        cdf,
    }
}

fn read_spectrum(xss: &Xss, ldat: usize) -> Result<(SpectrumPayload, usize), AceError> {
    let (table, next) = InterpolationTable::read(xss, ldat)?;
    Ok((
        SpectrumPayload {
            regions: table.regions,
            incident_energy: table.x,
            t: table.y,
        },
        next,
    ))
}

/// Decodes the law payload at `ldat` (relative to `jxs11`, itself used
/// only by laws whose angular sub-records carry their own locators).
pub fn decode_law(law: i64, xss: &Xss, ldat: usize, jxs11: i64) -> Result<LawPayload, AceError> {
    match law {
        1 => {
            let (regions, after_regions) = InterpolationRegions::read(xss, ldat)?;
            let ne = xss.usize_at(after_regions);
            let ein_start = after_regions + 1;
            let incident_energies = xss.slice(ein_start, ne).to_vec();
            let _ = &regions;
            let net_addr = ein_start + ne;
            let net = xss.usize_at(net_addr);
            let eout_start = net_addr + 1;
            let entries = incident_energies
                .iter()
                .enumerate()
                .map(|(i, &e)| Law1Entry {
                    incident_energy: e,
                    outgoing_bin_edges: xss.slice(eout_start + i * net, net).to_vec(),
                })
                .collect();
            Ok(LawPayload::Law1(entries))
        }
        3 => Ok(LawPayload::Law3(Law3Payload {
            l0: xss.at(ldat),
            l1: xss.at(ldat + 1),
        })),
        4 => {
            let prelude = TabularDistributionPrelude::read(xss, ldat)?;
            let entries = read_continuous_tabular_entries(xss, &prelude, false)?
                .into_iter()
                .map(|(base, _)| base)
                .collect();
            Ok(LawPayload::Law4(entries))
        }
        44 => {
            let prelude = TabularDistributionPrelude::read(xss, ldat)?;
            let entries = read_continuous_tabular_entries(xss, &prelude, true)?
                .into_iter()
                .map(|(base, extra)| {
                    let (r, a) = extra.unwrap();
                    KalbachEntry {
                        base,
                        precompound_fraction: r,
                        angular_slope: a,
                    }
                })
                .collect();
            Ok(LawPayload::Law44(entries))
        }
        61 => {
            let prelude = TabularDistributionPrelude::read(xss, ldat)?;
            let mut k = prelude.next;
            let mut entries = Vec::with_capacity(prelude.ne);
            for &ein in &prelude.incident_energies {
                let (nd, interpolation) = split_intt(xss.int_at(k))?;
                let np = xss.usize_at(k + 1);
                let data_start = k + 2;
                let eout = xss.slice(data_start, np).to_vec();
                let pdf = xss.slice(data_start + np, np).to_vec();
                let cdf = xss.slice(data_start + 2 * np, np).to_vec();
                let lc_start = data_start + 3 * np;
                let angles = (0..np)
                    .map(|i| {
                        let loc = xss.int_at(lc_start + i);
                        Law61AngularEntry {
                            angle: read_tabular_angle(xss, jxs11, loc),
                        }
                    })
                    .collect();
                entries.push(Law61Entry {
                    base: ContinuousTabularEntry {
                        incident_energy: ein,
                        discrete_lines: nd,
                        interpolation,
                        eout,
                        pdf,
                        cdf,
                    },
                    angles,
                });
                k += 2 + 4 * np;
            }
            Ok(LawPayload::Law61(entries))
        }
        5 => {
            let (spectrum, next) = read_spectrum(xss, ldat)?;
            let net = xss.usize_at(next);
            let bin_boundaries = xss.slice(next + 1, net).to_vec();
            Ok(LawPayload::Law5(Law5Payload { spectrum, bin_boundaries }))
        }
        7 => {
            let (spectrum, next) = read_spectrum(xss, ldat)?;
            Ok(LawPayload::Law7(Law7Or9Payload {
                spectrum,
                restriction_energy: xss.at(next),
            }))
        }
        9 => {
            let (spectrum, next) = read_spectrum(xss, ldat)?;
            Ok(LawPayload::Law9(Law7Or9Payload {
                spectrum,
                restriction_energy: xss.at(next),
            }))
        }
        11 => {
            let (a, next1) = read_spectrum(xss, ldat)?;
            let (b, next2) = read_spectrum(xss, next1)?;
            Ok(LawPayload::Law11(Law11Payload {
                a,
                b,
                restriction_energy: xss.at(next2),
            }))
        }
        66 => Ok(LawPayload::Law66(Law66Payload {
            npsx: xss.at(ldat),
            total_mass_ratio: xss.at(ldat + 1),
        })),
        67 => {
            let prelude = TabularDistributionPrelude::read(xss, ldat)?;
            let mut k = prelude.next;
            let mut entries = Vec::with_capacity(prelude.ne);
            for &ein in &prelude.incident_energies {
                let cosine_interpolation = InterpolationScheme::try_from(xss.int_at(k))?;
                let nmu = xss.usize_at(k + 1);
                let cosines = xss.slice(k + 2, nmu).to_vec();
                let lmu_start = k + 2 + nmu;
                let locators: Vec<usize> = (0..nmu).map(|i| xss.usize_at(lmu_start + i)).collect();
                let mut j = lmu_start + nmu;
                let mut per_cosine = Vec::with_capacity(nmu);
                for _ in 0..nmu {
                    let interpolation = InterpolationScheme::try_from(xss.int_at(j))?;
                    let npep = xss.usize_at(j + 1);
                    let data_start = j + 2;
                    let eout = xss.slice(data_start, npep).to_vec();
                    let pdf = xss.slice(data_start + npep, npep).to_vec();
                    let cdf = xss.slice(data_start + 2 * npep, npep).to_vec();
                    per_cosine.push(Law67CosineEntry {
                        interpolation,
                        eout,
                        pdf,
                        cdf,
                    });
                    j += 2 + 3 * npep;
                }
                let _ = &locators;
                entries.push(Law67Entry {
                    incident_energy: ein,
                    cosine_interpolation,
                    cosines,
                    per_cosine,
                });
                k = j;
            }
            Ok(LawPayload::Law67(entries))
        }
        2 | 22 | 24 => Ok(LawPayload::Unsupported(law)),
        other => Ok(LawPayload::Unknown(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xss(values: &[f64]) -> Xss {
        Xss::parse(
            &values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" "),
            values.len(),
        )
        .unwrap()
    }

    #[test]
    fn law3_reads_two_scalars() {
        let data = xss(&[7.0, 11.0]);
        match decode_law(3, &data, 1, 0).unwrap() {
            LawPayload::Law3(p) => {
                assert_eq!(p.l0, 7.0);
                assert_eq!(p.l1, 11.0);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn law66_reads_two_scalars() {
        let data = xss(&[3.0, 2.5]);
        match decode_law(66, &data, 1, 0).unwrap() {
            LawPayload::Law66(p) => {
                assert_eq!(p.npsx, 3.0);
                assert_eq!(p.total_mass_ratio, 2.5);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn law4_round_trips_single_energy() {
        // NR=0, NE=1, Ein=[1.0], loc=[0], then INTT=2, NP=2, Eout, pdf, cdf
        let data = xss(&[
            0.0, 1.0, 1.0, 0.0, // prelude: NR, NE, Ein, loc
            2.0, 2.0, // INTT, NP
            1.0, 2.0, // Eout
            0.5, 0.5, // pdf
            0.5, 1.0, // cdf
        ]);
        match decode_law(4, &data, 1, 0).unwrap() {
            LawPayload::Law4(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].eout, vec![1.0, 2.0]);
                assert_eq!(entries[0].cdf, vec![0.5, 1.0]);
                assert!(entries[0].discrete_lines.is_none());
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn law61_isotropic_bin_decodes_as_isotropic() {
        let data = xss(&[
            0.0, 1.0, 1.0, 0.0, // prelude
            2.0, 1.0, // INTT, NP=1
            5.0, // Eout
            1.0, // pdf
            1.0, // cdf
            0.0, // LC = 0 -> isotropic
        ]);
        match decode_law(61, &data, 1, 0).unwrap() {
            LawPayload::Law61(entries) => {
                assert!(matches!(entries[0].angles[0].angle, AngularDistributionAtEnergy::Isotropic));
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn intt_splits_discrete_lines() {
        let (nd, scheme) = split_intt(12).unwrap();
        assert_eq!(nd, Some(1));
        assert_eq!(scheme, InterpolationScheme::LinLin);
        let (nd2, _) = split_intt(2).unwrap();
        assert!(nd2.is_none());
    }

    #[test]
    fn unknown_law_is_reported_not_fatal() {
        let data = xss(&[0.0]);
        match decode_law(77, &data, 1, 0).unwrap() {
            LawPayload::Unknown(77) => {}
            _ => panic!("expected Unknown(77)"),
        }
    }

    #[test]
    fn unsupported_law_envelope_still_decodes() {
        let data = xss(&[0.0]);
        assert!(matches!(decode_law(22, &data, 1, 0).unwrap(), LawPayload::Unsupported(22)));
    }
}
