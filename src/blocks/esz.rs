//! ESZ: the incident-energy grid plus the four basic cross sections
//! that are always present (total, elastic, capture, heating).

use crate::xss::Xss;

pub struct Esz {
    pub energy: Vec<f64>,
    pub total: Vec<f64>,
    pub absorption: Vec<f64>,
    pub elastic: Vec<f64>,
    pub heating: Vec<f64>,
}

/// Reads the five contiguous length-`nes` arrays at `jxs1`.
pub fn read_esz(xss: &Xss, jxs1: i64, nes: usize) -> Esz {
    let start = jxs1 as usize;
    Esz {
        energy: xss.slice(start, nes).to_vec(),
        total: xss.slice(start + nes, nes).to_vec(),
        absorption: xss.slice(start + 2 * nes, nes).to_vec(),
        elastic: xss.slice(start + 3 * nes, nes).to_vec(),
        heating: xss.slice(start + 4 * nes, nes).to_vec(),
    }
}
