/// How book names are cased when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooknameCase {
    /// `ME`: mixed case, e.g. `Gen`
    Mixed,
    /// `UC`
    Upper,
    /// `LC`
    Lower,
}

impl BooknameCase {
    pub const fn code(&self) -> &'static str {
        match self {
            BooknameCase::Mixed => "ME",
            BooknameCase::Upper => "UC",
            BooknameCase::Lower => "LC",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ME" => Some(BooknameCase::Mixed),
            "UC" => Some(BooknameCase::Upper),
            "LC" => Some(BooknameCase::Lower),
            _ => None,
        }
    }
}

/// Opening and closing quote marks for one nesting level. Both are empty
/// when the system does not define that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteMarks {
    pub start: &'static str,
    pub end: &'static str,
}

impl QuoteMarks {
    pub const UNUSED: QuoteMarks = QuoteMarks::new("", "");

    pub const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    pub const fn is_defined(&self) -> bool {
        !self.start.is_empty() || !self.end.is_empty()
    }
}

/// Number of quote nesting levels a system can define
pub const QUOTE_LEVELS: usize = 4;

/// The punctuation conventions a system applies when rendering references
/// and running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationSettings {
    // Reference separators
    pub book_chapter_separator: &'static str,
    pub chapter_verse_separator: &'static str,
    pub verse_separator: &'static str,
    pub chapter_separator: &'static str,
    pub book_separator: &'static str,

    // Ranges
    pub verse_bridge_character: &'static str,
    pub chapter_bridge_character: &'static str,
    pub book_bridge_character: &'static str,

    // Book names
    pub punctuation_after_book_abbreviation: &'static str,
    pub space_allowed_after_bcs: &'static str,
    pub allowed_verse_suffixes: &'static str,
    pub bookname_case: BooknameCase,
    pub bookname_length: u8,

    // Running text
    pub statement_terminator: &'static str,
    pub question_terminator: &'static str,
    pub exclamation_terminator: &'static str,
    pub comma_pause_character: &'static str,
    pub quote_levels: [QuoteMarks; QUOTE_LEVELS],
    pub sentence_capitalisation: bool,
    pub proper_noun_capitalisation: bool,
}

impl PunctuationSettings {
    /// Whether `suffix` may follow a verse number, as in `3:16b`.
    pub fn allows_verse_suffix(&self, suffix: char) -> bool {
        self.allowed_verse_suffixes.contains(suffix)
    }

    /// Quote marks for a 1-based nesting level, `None` past the last defined level.
    pub fn quote_level(&self, level: usize) -> Option<&QuoteMarks> {
        level
            .checked_sub(1)
            .and_then(|i| self.quote_levels.get(i))
            .filter(|marks| marks.is_defined())
    }

    /// Deepest quote nesting level the system defines.
    pub fn quote_depth(&self) -> usize {
        self.quote_levels.iter().take_while(|marks| marks.is_defined()).count()
    }
}
