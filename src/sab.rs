//! S(alpha,beta) thermal-scattering decoder: the four ITIE/ITCE/ITCA/ITXE
//! blocks that together describe inelastic and elastic low-energy
//! scattering off bound atoms in a moderator material.

use crate::header::Header;
use crate::model::table::{ItxeContinuousRecord, ItxeData, SabPayload};
use crate::xss::Xss;

pub fn read_sab(xss: &Xss, header: &Header) -> SabPayload {
    let jxs1 = header.jxs(1);
    let ne_in = xss.usize_at(jxs1 as usize);
    let inelastic_energy = xss.slice(jxs1 as usize + 1, ne_in).to_vec();
    let inelastic_xs = xss.slice(jxs1 as usize + 1 + ne_in, ne_in).to_vec();

    let jxs4 = header.jxs(4);
    let mut raw_ne_el = 0usize;
    let (elastic_energy, elastic_xs) = if jxs4 != 0 {
        let ne_el = xss.usize_at(jxs4 as usize);
        raw_ne_el = ne_el;
        let e = xss.slice(jxs4 as usize + 1, ne_el).to_vec();
        let s = xss.slice(jxs4 as usize + 1 + ne_el, ne_el).to_vec();
        if header.nxs(5) == 4 {
            // Coherent (Bragg-edge) elastic data is stored as a cumulative
            // structure factor at each edge; un-normalizing it back to a
            // cross section means reconstructing the sawtooth step at each
            // edge, which doubles the grid: each interior edge energy gets
            // two entries, both using the *previous* edge's raw value.
            let mut energies = vec![e[0]];
            let mut xs = vec![s[0] / e[0] * 1e-2];
            for i in 1..e.len() {
                energies.push(e[i - 1]);
                energies.push(e[i]);
                xs.push(s[i - 1] / e[i - 1]);
                xs.push(s[i - 1] / e[i]);
            }
            (Some(energies), Some(xs))
        } else {
            (Some(e), Some(s))
        }
    } else {
        (None, None)
    };

    let elastic_equiprobable_cosines = if jxs4 != 0 && header.nxs(6) != -1 {
        let jxs6 = header.jxs(6) as usize;
        let ncos = header.nxs(6) as usize + 1;
        Some(
            (0..raw_ne_el)
                .map(|i| xss.slice(jxs6 + i * ncos, ncos).to_vec())
                .collect(),
        )
    } else {
        None
    };

    let itxe = read_itxe(xss, header, &inelastic_energy);

    SabPayload {
        inelastic_energy,
        inelastic_xs,
        elastic_energy,
        elastic_xs,
        elastic_equiprobable_cosines,
        itxe: Some(itxe),
    }
}

fn read_itxe(xss: &Xss, header: &Header, inelastic_energy: &[f64]) -> ItxeData {
    let ne_in = inelastic_energy.len();
    match header.nxs(7) {
        1 => {
            let jxs3 = header.jxs(3) as usize;
            let nout = header.nxs(4) as usize;
            let ncos = header.nxs(3) as usize + 1;
            let stride = ncos + 1;
            let mut outgoing_energy = Vec::with_capacity(ne_in);
            let mut cosines = Vec::with_capacity(ne_in);
            let mut cursor = jxs3;
            for _ in 0..ne_in {
                let mut eout_row = Vec::with_capacity(nout);
                let mut cos_row = Vec::with_capacity(nout);
                for _ in 0..nout {
                    eout_row.push(xss.at(cursor));
                    cos_row.push(xss.slice(cursor + 1, ncos).to_vec());
                    cursor += stride;
                }
                outgoing_energy.push(eout_row);
                cosines.push(cos_row);
            }
            ItxeData::EquiprobableDiscrete {
                outgoing_energy,
                cosines,
            }
        }
        _ => {
            let jxs3 = header.jxs(3) as usize;
            let ncos = header.nxs(3) as usize - 1;
            let locators: Vec<usize> = (0..ne_in).map(|i| xss.usize_at(jxs3 + i)).collect();
            let bin_counts: Vec<usize> = (0..ne_in).map(|i| xss.usize_at(jxs3 + ne_in + i)).collect();
            let records = locators
                .iter()
                .zip(bin_counts.iter())
                .map(|(&loc, &nbin)| {
                    let mut cursor = loc;
                    (0..nbin)
                        .map(|_| {
                            let eout = xss.at(cursor);
                            let pdf = xss.at(cursor + 1);
                            let cdf = xss.at(cursor + 2);
                            let cos = xss.slice(cursor + 3, ncos).to_vec();
                            cursor += 3 + ncos;
                            ItxeContinuousRecord { eout, pdf, cdf, cosines: cos }
                        })
                        .collect()
                })
                .collect();
            ItxeData::Continuous { records }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{Header, HeaderStyle};

    fn header_with(nxs: [i64; 17], jxs: [i64; 33]) -> Header {
        Header {
            style: HeaderStyle::New,
            zaid: "lwtr.10t".to_string(),
            za: None,
            z: None,
            a: None,
            metastable: false,
            suffix: "10t".to_string(),
            atomic_weight_ratio: 0.0,
            temperature: 0.0,
            processing_date: None,
            comment: String::new(),
            material_id: String::new(),
            nxs,
            jxs,
        }
    }

    #[test]
    fn reads_inelastic_only() {
        let mut nxs = [0i64; 17];
        nxs[7] = 1;
        nxs[4] = 1;
        nxs[3] = 0;
        let mut jxs = [0i64; 33];
        jxs[1] = 1;
        jxs[3] = 6;
        // ITIE: NE=2, Ein=[1,2], xs=[10,20]; ITXE (discrete, 1 outgoing group,
        // 1 cosine each): row1 eout=5,cos=[0.0]; row2 eout=6,cos=[0.5]
        let data = Xss::parse("2.0 1.0 2.0 10.0 20.0 5.0 0.0 6.0 0.5", 9).unwrap();
        let header = header_with(nxs, jxs);
        let sab = read_sab(&data, &header);
        assert_eq!(sab.inelastic_energy, vec![1.0, 2.0]);
        assert_eq!(sab.inelastic_xs, vec![10.0, 20.0]);
        assert!(sab.elastic_energy.is_none());
        match sab.itxe.unwrap() {
            ItxeData::EquiprobableDiscrete { outgoing_energy, cosines } => {
                assert_eq!(outgoing_energy, vec![vec![5.0], vec![6.0]]);
                assert_eq!(cosines, vec![vec![vec![0.0]], vec![vec![0.5]]]);
            }
            _ => panic!("expected discrete ITXE"),
        }
    }
}
