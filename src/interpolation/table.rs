//! The NR/NBT/INT interpolation-region prelude shared by nubar, the
//! S(alpha,beta) tables, and the spectrum-law decoders, plus the
//! tabular-distribution prelude shared by laws 4, 44, 61, 67.

use crate::error::AceError;
use crate::interpolation::scheme::InterpolationScheme;
use crate::xss::Xss;

/// `NR` interpolation regions: `NBT[i]` is the cumulative point index
/// ending region `i`; `INT[i]` is that region's scheme. `NR == 0` is the
/// ENDF convention for "one implicit lin-lin region spanning everything".
#[derive(Debug, Clone)]
pub struct InterpolationRegions {
    pub nbt: Vec<usize>,
    pub int: Vec<InterpolationScheme>,
}

impl InterpolationRegions {
    /// Reads `NR` at `start`, then `NBT[NR]`, `INT[NR]`. Returns the
    /// regions and the cursor one past the last `INT` entry.
    pub fn read(xss: &Xss, start: usize) -> Result<(Self, usize), AceError> {
        let nr = xss.usize_at(start);
        let nbt_start = start + 1;
        let int_start = nbt_start + nr;
        let nbt = (0..nr).map(|i| xss.usize_at(nbt_start + i)).collect();
        let int = (0..nr)
            .map(|i| InterpolationScheme::try_from(xss.int_at(int_start + i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((InterpolationRegions { nbt, int }, int_start + nr))
    }

    fn scheme_for_point_index(&self, idx: usize) -> InterpolationScheme {
        if self.nbt.is_empty() {
            return InterpolationScheme::LinLin;
        }
        for (bound, scheme) in self.nbt.iter().zip(self.int.iter()) {
            if idx <= *bound {
                return *scheme;
            }
        }
        *self.int.last().unwrap()
    }
}

/// An `(x, y)` table with per-region interpolation schemes, used for
/// nubar, delayed-nubar, precursor probabilities, and the spectrum laws'
/// tabulated parameters.
#[derive(Debug, Clone)]
pub struct InterpolationTable {
    pub regions: InterpolationRegions,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl InterpolationTable {
    /// Reads the full `NR, NBT[NR], INT[NR], NE, x[NE], y[NE]` shape
    /// starting at `start`. Returns the table and the cursor one past
    /// the last `y` entry.
    pub fn read(xss: &Xss, start: usize) -> Result<(Self, usize), AceError> {
        let (regions, after_regions) = InterpolationRegions::read(xss, start)?;
        let ne = xss.usize_at(after_regions);
        let x_start = after_regions + 1;
        let y_start = x_start + ne;
        let x = xss.slice(x_start, ne).to_vec();
        let y = xss.slice(y_start, ne).to_vec();
        Ok((InterpolationTable { regions, x, y }, y_start + ne))
    }

    /// How many XSS slots the `NR, NBT, INT, NE, x, y` shape at `start`
    /// occupies, without materializing the table. Used by callers (DNU,
    /// BDD) that only need to locate the next block.
    pub fn table_length(xss: &Xss, start: usize) -> usize {
        let nr = xss.usize_at(start);
        let ne_index = start + 1 + 2 * nr;
        let ne = xss.usize_at(ne_index);
        1 + 2 * nr + 1 + 2 * ne
    }

    pub fn interpolate(&self, x: f64) -> Result<f64, AceError> {
        if self.x.is_empty() {
            return Err(AceError::InvalidHeader("empty interpolation table".to_string()));
        }
        if x < self.x[0] || x > *self.x.last().unwrap() {
            return Err(AceError::InvalidHeader(format!(
                "{x} outside table domain [{}, {}]",
                self.x[0],
                self.x.last().unwrap()
            )));
        }
        let idx = match self
            .x
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap())
        {
            Ok(i) => return Ok(self.y[i]),
            Err(i) => i,
        };
        let scheme = self.regions.scheme_for_point_index(idx);
        Ok(scheme.interpolate(
            self.x[idx - 1],
            self.y[idx - 1],
            self.x[idx],
            self.y[idx],
            x,
        ))
    }
}

/// Shared by laws 4, 44, 61, 67: `NR, NBT[NR], INT[NR], NE, Ein[NE],
/// loc[NE]` where `loc` is a per-incident-energy offset (relative to
/// `JXS[11]`), not a tabulated value.
#[derive(Debug, Clone)]
pub struct TabularDistributionPrelude {
    pub regions: InterpolationRegions,
    pub ne: usize,
    pub incident_energies: Vec<f64>,
    pub locators: Vec<usize>,
    /// Cursor one past `loc[NE]`, i.e. where the per-energy records begin.
    pub next: usize,
}

impl TabularDistributionPrelude {
    pub fn read(xss: &Xss, ldat: usize) -> Result<Self, AceError> {
        let (regions, after_regions) = InterpolationRegions::read(xss, ldat)?;
        let ne = xss.usize_at(after_regions);
        let ein_start = after_regions + 1;
        let loc_start = ein_start + ne;
        let incident_energies = xss.slice(ein_start, ne).to_vec();
        let locators = (0..ne).map(|i| xss.usize_at(loc_start + i)).collect();
        Ok(TabularDistributionPrelude {
            regions,
            ne,
            incident_energies,
            locators,
            next: loc_start + ne,
        })
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
    fn single_region_table_interpolates_lin_lin() {
        // NR=0, NE=3, x=[1,2,3], y=[10,20,30]
        let data = xss(&[0.0, 3.0, 1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        let (table, next) = InterpolationTable::read(&data, 1).unwrap();
        assert_eq!(next, 9);
        assert!((table.interpolate(1.5).unwrap() - 15.0).abs() < 1e-9);
        assert_eq!(table.interpolate(2.0).unwrap(), 20.0);
    }

    #[test]
    fn out_of_domain_is_error() {
        let data = xss(&[0.0, 2.0, 1.0, 2.0, 10.0, 20.0]);
        let (table, _) = InterpolationTable::read(&data, 1).unwrap();
        assert!(table.interpolate(3.0).is_err());
    }

    #[test]
    fn tabular_prelude_reads_locators() {
        // NR=0, NE=2, Ein=[1,2], loc=[5,9]
        let data = xss(&[0.0, 2.0, 1.0, 2.0, 5.0, 9.0]);
        let prelude = TabularDistributionPrelude::read(&data, 1).unwrap();
        assert_eq!(prelude.ne, 2);
        assert_eq!(prelude.locators, vec![5, 9]);
        assert_eq!(prelude.next, 7);
    }
}
