//! Compiled-in Bible punctuation system tables.
//!
//! Each punctuation system pairs every 3-character book abbreviation with the
//! system's index number, stored twice: once ordered by abbreviation
//! (`by_reference`) and once ordered by index (`by_book`). The record types
//! keep the fixed C layout of the generated tables so the data can be shared
//! as a raw image, see [`layout`].

pub mod config;
pub mod error;
pub mod layout;
pub mod state;
pub mod systems;

pub use config::PunctuationConfig;
pub use error::{AbbreviationFault, PunctuationError, Result};
pub use state::{
    BookAbbreviation, IndexToReferenceEntry, PunctuationSettings, PunctuationSystemTable,
    ReferenceToIndexEntry,
};
pub use systems::{system_by_index, system_by_name, PunctuationSystem, PUNCTUATION_SYSTEMS};
