pub mod angular_distribution;
pub mod cross_section;
pub mod nubar;
pub mod secondary_distribution;
pub mod table;

pub use angular_distribution::{AngularDistribution, AngularDistributionAtEnergy};
pub use cross_section::CrossSection;
pub use nubar::{Nubar, NubarForm, PrecursorFamily};
pub use secondary_distribution::{SecondaryDistribution, Yield};
pub use table::{AceTable, CePayload, Payload, ReactionType, SabPayload, TableSummary};
