pub mod abbreviation;
pub mod entries;
pub mod settings;
pub mod table;

pub use abbreviation::*;
pub use entries::*;
pub use settings::*;
pub use table::*;
