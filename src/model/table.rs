//! `AceTable`: the top-level decoded value, and the per-flavor payloads
//! it carries.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Diagnostic;
use crate::header::Header;
use crate::model::angular_distribution::AngularDistribution;
use crate::model::cross_section::CrossSection;
use crate::model::nubar::Nubar;
use crate::model::secondary_distribution::SecondaryDistribution;

/// Reaction-type sign/frame encoding for TYR (MCNP Table F.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    Laboratory,
    CenterOfMass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// A fixed number of secondary neutrons (possibly 0 for absorption).
    Fixed(i64),
    /// `|TYR| > 100`: yield varies with incident energy; see the
    /// `SecondaryDistribution`'s `Yield::EnergyDependent` variant.
    EnergyDependent,
}

#[derive(Debug, Clone, Copy)]
pub struct ReactionType {
    pub frame: ReferenceFrame,
    pub multiplicity: Multiplicity,
}

impl From<i64> for ReactionType {
    fn from(tyr: i64) -> Self {
        let frame = if tyr < 0 {
            ReferenceFrame::CenterOfMass
        } else {
            ReferenceFrame::Laboratory
        };
        let magnitude = tyr.abs();
        let multiplicity = if magnitude > 100 {
            Multiplicity::EnergyDependent
        } else {
            Multiplicity::Fixed(magnitude)
        };
        ReactionType { frame, multiplicity }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CePayload {
    pub energies: Vec<f64>,
    pub xs: HashMap<i64, CrossSection>,
    pub mt_list: Vec<i64>,
    pub q_values: Vec<f64>,
    pub reaction_type: Vec<ReactionType>,
    /// Keyed by MT, plus the sentinel MT `0` for elastic.
    pub angular_dist: HashMap<i64, AngularDistribution>,
    pub secondary_dist: HashMap<i64, SecondaryDistribution>,
    pub nubar: Option<Nubar>,
    pub photon_production_present: bool,
}

/// Sentinel key for the elastic-scattering angular distribution, which
/// has no MT of its own in `mt_list`.
pub const ELASTIC_ANGULAR_KEY: i64 = 2;

#[derive(Debug, Clone)]
pub enum ItxeData {
    /// `NXS[7] == 1`: constant-weight equiprobable discrete cosines.
    EquiprobableDiscrete {
        /// One row per incident energy; each row has `NXS[4]` outgoing
        /// energies, each followed by `NXS[3]+1` cosines.
        outgoing_energy: Vec<Vec<f64>>,
        cosines: Vec<Vec<Vec<f64>>>,
    },
    /// `NXS[7] == 2`: continuous tabulated.
    Continuous {
        records: Vec<Vec<ItxeContinuousRecord>>,
    },
}

#[derive(Debug, Clone)]
pub struct ItxeContinuousRecord {
    pub eout: f64,
    pub pdf: f64,
    pub cdf: f64,
    pub cosines: Vec<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct SabPayload {
    pub inelastic_energy: Vec<f64>,
    pub inelastic_xs: Vec<f64>,
    pub elastic_energy: Option<Vec<f64>>,
    pub elastic_xs: Option<Vec<f64>>,
    pub elastic_equiprobable_cosines: Option<Vec<Vec<f64>>>,
    pub itxe: Option<ItxeData>,
}

#[derive(Debug, Clone, Default)]
pub struct PhotonPayload {
    pub present: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ChargedParticlePayload {
    pub present: bool,
}

#[derive(Debug, Clone)]
pub enum Payload {
    ContinuousEnergy(CePayload),
    Sab(SabPayload),
    Photon(PhotonPayload),
    ChargedParticle(ChargedParticlePayload),
}

#[derive(Debug, Clone)]
pub struct AceTable {
    pub header: Header,
    pub payload: Payload,
    pub diagnostics: Vec<Diagnostic>,
}

/// JSON-serializable summary of scalar metadata, per the external
/// output contract. Exact shape beyond these fields is unspecified.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub zaid: String,
    pub nxs: Vec<i64>,
    pub jxs: Vec<i64>,
    pub table_length: i64,
    pub ne: i64,
    pub e_max: Option<f64>,
    pub has_gpd: bool,
    pub has_nubar: bool,
    pub has_delayed_nubar: bool,
    pub is_charged_particle: bool,
    pub has_unresolved_resonance: bool,
}

impl AceTable {
    pub fn summary(&self) -> TableSummary {
        let e_max = match &self.payload {
            Payload::ContinuousEnergy(ce) => ce.energies.last().copied(),
            Payload::Sab(sab) => sab.inelastic_energy.last().copied(),
            _ => None,
        };
        TableSummary {
            zaid: self.header.zaid.clone(),
            nxs: self.header.nxs[1..].to_vec(),
            jxs: self.header.jxs[1..].to_vec(),
            table_length: self.header.nxs(1),
            ne: self.header.nxs(3),
            e_max,
            has_gpd: self.header.jxs(12) != 0,
            has_nubar: self.header.jxs(2) != 0,
            has_delayed_nubar: self.header.jxs(24) > 0,
            is_charged_particle: matches!(self.payload, Payload::ChargedParticle(_)),
            has_unresolved_resonance: self.header.jxs(23) > 0,
        }
    }
}
