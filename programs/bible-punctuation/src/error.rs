use thiserror::Error;

/// Reasons a byte sequence is not a valid book abbreviation.
///
/// Kept `Copy` so the abbreviation checks can run inside `const fn`.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AbbreviationFault {
    #[error("Abbreviation must be exactly 3 characters, got {0}")]
    WrongLength(usize),

    #[error("Abbreviation contains non-printable byte 0x{byte:02x} at position {position}")]
    NonPrintable { position: usize, byte: u8 },

    #[error("Abbreviation contains lowercase byte 0x{byte:02x} at position {position}")]
    Lowercase { position: usize, byte: u8 },

    #[error("Abbreviation terminator must be zero, got 0x{0:02x}")]
    MissingTerminator(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PunctuationError {
    #[error("Invalid book abbreviation: {0}")]
    InvalidAbbreviation(#[from] AbbreviationFault),

    #[error("Negative index number: {0}")]
    NegativeIndex(i32),

    #[error("Record image of {len} bytes is not a whole number of {record_size}-byte records")]
    MisalignedRecords { len: usize, record_size: usize },

    #[error("Unknown punctuation system: {0}")]
    UnknownSystem(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for PunctuationError {
    fn from(e: toml::de::Error) -> Self {
        PunctuationError::ConfigParse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PunctuationError>;
