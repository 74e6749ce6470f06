//! The DLW/DNED envelope: which law applies, how likely it is relative
//! to incident energy, and how many secondary particles it produces.

use crate::interpolation::InterpolationTable;
use crate::laws::LawPayload;

#[derive(Debug, Clone)]
pub enum Yield {
    /// `|TYR|` neutrons (or other secondary particles), independent of
    /// incident energy.
    Constant(i64),
    /// `TYR < 0` and `|TYR| > 100`: yield read from its own NBT/INT table.
    EnergyDependent(InterpolationTable),
}

#[derive(Debug, Clone)]
pub struct SecondaryDistribution {
    pub law: i64,
    /// Probability of this law applying, vs. incident energy.
    pub probability: InterpolationTable,
    pub yield_: Yield,
    pub payload: LawPayload,
}
