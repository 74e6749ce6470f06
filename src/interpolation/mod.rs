mod scheme;
mod table;

pub use scheme::InterpolationScheme;
pub use table::{InterpolationRegions, InterpolationTable, TabularDistributionPrelude};
