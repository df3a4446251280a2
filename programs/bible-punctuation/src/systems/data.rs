//! Compiled-in punctuation systems.
//!
//! Index numbers are positions in [`super::PUNCTUATION_SYSTEMS`].
//!
//! The settings values are the published ones for each system. The
//! book-to-index rows are not: no per-book assignment exists for these
//! systems, so each table is synthesized by mapping all 66 books to the
//! system's own index. As a consequence `by_book` holds the same order as
//! `by_reference`.

use super::books::{by_book_entries, by_reference_entries, BOOK_COUNT};
use crate::state::{
    BooknameCase, IndexToReferenceEntry, PunctuationSettings, PunctuationSystemTable, QuoteMarks,
    ReferenceToIndexEntry, QUOTE_LEVELS,
};

pub const ENGLISH_BRIEF_INDEX: i32 = 0;
pub const MATIGSALUG_INDEX: i32 = 1;
pub const ENGLISH_INDEX: i32 = 2;

const ENGLISH_BRIEF_BY_REFERENCE: [ReferenceToIndexEntry; BOOK_COUNT] =
    by_reference_entries(ENGLISH_BRIEF_INDEX);
const ENGLISH_BRIEF_BY_BOOK: [IndexToReferenceEntry; BOOK_COUNT] =
    by_book_entries(ENGLISH_BRIEF_INDEX);

const MATIGSALUG_BY_REFERENCE: [ReferenceToIndexEntry; BOOK_COUNT] =
    by_reference_entries(MATIGSALUG_INDEX);
const MATIGSALUG_BY_BOOK: [IndexToReferenceEntry; BOOK_COUNT] =
    by_book_entries(MATIGSALUG_INDEX);

const ENGLISH_BY_REFERENCE: [ReferenceToIndexEntry; BOOK_COUNT] =
    by_reference_entries(ENGLISH_INDEX);
const ENGLISH_BY_BOOK: [IndexToReferenceEntry; BOOK_COUNT] = by_book_entries(ENGLISH_INDEX);

pub const ENGLISH_BRIEF_TABLE: PunctuationSystemTable = PunctuationSystemTable::new(
    "English_brief",
    &ENGLISH_BRIEF_BY_REFERENCE,
    &ENGLISH_BRIEF_BY_BOOK,
);

pub const MATIGSALUG_TABLE: PunctuationSystemTable = PunctuationSystemTable::new(
    "Matigsalug",
    &MATIGSALUG_BY_REFERENCE,
    &MATIGSALUG_BY_BOOK,
);

pub const ENGLISH_TABLE: PunctuationSystemTable =
    PunctuationSystemTable::new("English", &ENGLISH_BY_REFERENCE, &ENGLISH_BY_BOOK);

const ENGLISH_QUOTES: [QuoteMarks; QUOTE_LEVELS] = [
    QuoteMarks::new("“", "”"),
    QuoteMarks::new("‘", "’"),
    QuoteMarks::new("“", "”"),
    QuoteMarks::UNUSED,
];

pub const ENGLISH_BRIEF_SETTINGS: PunctuationSettings = PunctuationSettings {
    book_chapter_separator: " ",
    chapter_verse_separator: ":",
    verse_separator: ",",
    chapter_separator: ";",
    book_separator: ";",
    verse_bridge_character: "-",
    chapter_bridge_character: "-",
    book_bridge_character: "-",
    punctuation_after_book_abbreviation: "",
    space_allowed_after_bcs: "E",
    allowed_verse_suffixes: "abcdef",
    bookname_case: BooknameCase::Mixed,
    bookname_length: 3,
    statement_terminator: ".",
    question_terminator: "?",
    exclamation_terminator: "!",
    comma_pause_character: ",",
    quote_levels: ENGLISH_QUOTES,
    sentence_capitalisation: true,
    proper_noun_capitalisation: true,
};

// Matigsalug bridges chapters and books with an en dash
pub const MATIGSALUG_SETTINGS: PunctuationSettings = PunctuationSettings {
    chapter_bridge_character: "–",
    book_bridge_character: "–",
    allowed_verse_suffixes: "ab",
    ..ENGLISH_BRIEF_SETTINGS
};

pub const ENGLISH_SETTINGS: PunctuationSettings = PunctuationSettings {
    punctuation_after_book_abbreviation: ".",
    ..ENGLISH_BRIEF_SETTINGS
};
