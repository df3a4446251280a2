pub mod books;
pub mod data;

pub use books::{BOOK_CODES, BOOK_COUNT};
pub use data::{ENGLISH_BRIEF_INDEX, ENGLISH_INDEX, MATIGSALUG_INDEX};

use tracing::debug;

use crate::state::{PunctuationSettings, PunctuationSystemTable};

/// A compiled-in punctuation system: its tables plus the conventions its
/// index number refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationSystem {
    pub index_number: i32,
    pub table: PunctuationSystemTable,
    pub settings: PunctuationSettings,
}

impl PunctuationSystem {
    pub const fn name(&self) -> &'static str {
        self.table.system_name
    }
}

pub const SYSTEM_COUNT: usize = 3;

/// Every bundled system; `index_number` equals the position in this array.
pub static PUNCTUATION_SYSTEMS: [PunctuationSystem; SYSTEM_COUNT] = [
    PunctuationSystem {
        index_number: ENGLISH_BRIEF_INDEX,
        table: data::ENGLISH_BRIEF_TABLE,
        settings: data::ENGLISH_BRIEF_SETTINGS,
    },
    PunctuationSystem {
        index_number: MATIGSALUG_INDEX,
        table: data::MATIGSALUG_TABLE,
        settings: data::MATIGSALUG_SETTINGS,
    },
    PunctuationSystem {
        index_number: ENGLISH_INDEX,
        table: data::ENGLISH_TABLE,
        settings: data::ENGLISH_SETTINGS,
    },
];

/// Exact, case-sensitive match on the system name.
pub fn system_by_name(name: &str) -> Option<&'static PunctuationSystem> {
    let system = PUNCTUATION_SYSTEMS.iter().find(|system| system.name() == name);
    if system.is_none() {
        debug!("No punctuation system named {:?}", name);
    }
    system
}

pub fn system_by_index(index_number: i32) -> Option<&'static PunctuationSystem> {
    usize::try_from(index_number)
        .ok()
        .and_then(|position| PUNCTUATION_SYSTEMS.get(position))
}

pub fn system_names() -> impl Iterator<Item = &'static str> {
    PUNCTUATION_SYSTEMS.iter().map(PunctuationSystem::name)
}
