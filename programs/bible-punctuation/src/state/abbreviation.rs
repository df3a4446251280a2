use std::{fmt, str::FromStr};

use bytemuck::NoUninit;

use crate::error::{AbbreviationFault, PunctuationError};

/// Meaningful characters in a book abbreviation
pub const ABBREVIATION_LEN: usize = 3;

/// Storage width of a book abbreviation: 3 characters plus the terminator
pub const ABBREVIATION_WIDTH: usize = ABBREVIATION_LEN + 1;

/// Fixed-width book reference abbreviation, e.g. `GEN` or `SA1`.
///
/// Stored as `[u8; 4]` to match the generated record layout: three printable
/// ASCII bytes followed by a zero terminator. The terminator is part of the
/// type's invariant rather than something callers have to remember.
///
/// Only `NoUninit` is derived: the bytes can be viewed, but a value can only
/// be produced by the validating constructors.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, NoUninit)]
pub struct BookAbbreviation([u8; ABBREVIATION_WIDTH]);

impl BookAbbreviation {
    /// Build an abbreviation in a const context.
    ///
    /// Invalid input aborts const evaluation, so a bad literal in a static
    /// table is a compile error.
    pub const fn new(code: &str) -> Self {
        match Self::from_code(code.as_bytes()) {
            Ok(abbreviation) => abbreviation,
            Err(_) => panic!("invalid book abbreviation"),
        }
    }

    /// Validate three code bytes and append the terminator.
    pub const fn from_code(code: &[u8]) -> Result<Self, AbbreviationFault> {
        if code.len() != ABBREVIATION_LEN {
            return Err(AbbreviationFault::WrongLength(code.len()));
        }
        Self::from_bytes([code[0], code[1], code[2], 0])
    }

    /// Validate a raw 4-byte field as it appears inside a record.
    pub const fn from_bytes(bytes: [u8; ABBREVIATION_WIDTH]) -> Result<Self, AbbreviationFault> {
        let mut position = 0;
        while position < ABBREVIATION_LEN {
            let byte = bytes[position];
            if !byte.is_ascii_graphic() {
                return Err(AbbreviationFault::NonPrintable { position, byte });
            }
            position += 1;
        }
        if bytes[ABBREVIATION_LEN] != 0 {
            return Err(AbbreviationFault::MissingTerminator(bytes[ABBREVIATION_LEN]));
        }
        Ok(Self(bytes))
    }

    /// The full 4-byte field, terminator included.
    pub const fn as_bytes(&self) -> &[u8; ABBREVIATION_WIDTH] {
        &self.0
    }

    /// The three meaningful bytes.
    pub const fn code(&self) -> [u8; ABBREVIATION_LEN] {
        [self.0[0], self.0[1], self.0[2]]
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0[..ABBREVIATION_LEN]).unwrap_or_default()
    }

    /// Byte-wise ordering usable from `const fn`; agrees with `Ord`.
    pub const fn const_cmp(&self, other: &Self) -> std::cmp::Ordering {
        let mut i = 0;
        while i < ABBREVIATION_WIDTH {
            if self.0[i] < other.0[i] {
                return std::cmp::Ordering::Less;
            }
            if self.0[i] > other.0[i] {
                return std::cmp::Ordering::Greater;
            }
            i += 1;
        }
        std::cmp::Ordering::Equal
    }
}

impl fmt::Display for BookAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for BookAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BookAbbreviation").field(&self.as_str()).finish()
    }
}

impl TryFrom<[u8; ABBREVIATION_WIDTH]> for BookAbbreviation {
    type Error = PunctuationError;

    fn try_from(bytes: [u8; ABBREVIATION_WIDTH]) -> Result<Self, Self::Error> {
        Ok(Self::from_bytes(bytes)?)
    }
}

impl TryFrom<&str> for BookAbbreviation {
    type Error = PunctuationError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Ok(Self::from_code(code.as_bytes())?)
    }
}

impl FromStr for BookAbbreviation {
    type Err = PunctuationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::try_from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_construction() {
        const GEN: BookAbbreviation = BookAbbreviation::new("GEN");
        assert_eq!(GEN.as_bytes(), b"GEN\0");
        assert_eq!(GEN.code(), *b"GEN");
        assert_eq!(GEN.as_str(), "GEN");
        assert_eq!(GEN.to_string(), "GEN");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            BookAbbreviation::try_from("GENE"),
            Err(PunctuationError::InvalidAbbreviation(AbbreviationFault::WrongLength(4)))
        );
        assert_eq!(
            BookAbbreviation::try_from(""),
            Err(PunctuationError::InvalidAbbreviation(AbbreviationFault::WrongLength(0)))
        );
    }

    #[test]
    fn test_rejects_non_printable() {
        let err = BookAbbreviation::from_bytes(*b"G N\0").unwrap_err();
        assert_eq!(err, AbbreviationFault::NonPrintable { position: 1, byte: b' ' });

        let err = BookAbbreviation::from_bytes([b'G', b'E', 0, 0]).unwrap_err();
        assert_eq!(err, AbbreviationFault::NonPrintable { position: 2, byte: 0 });
    }

    #[test]
    fn test_rejects_missing_terminator() {
        let err = BookAbbreviation::from_bytes(*b"GENE").unwrap_err();
        assert_eq!(err, AbbreviationFault::MissingTerminator(b'E'));
    }

    #[test]
    fn test_multibyte_input_counts_bytes() {
        // "Äb" is three bytes but the first two are not ASCII
        let err = BookAbbreviation::from_code("Äb".as_bytes()).unwrap_err();
        assert!(matches!(err, AbbreviationFault::NonPrintable { position: 0, .. }));
    }

    #[test]
    fn test_const_cmp_agrees_with_ord() {
        let codes = ["ACT", "CH1", "CH2", "GEN", "JN1", "JNA", "ZEP"];
        for a in codes {
            for b in codes {
                let a = BookAbbreviation::new(a);
                let b = BookAbbreviation::new(b);
                assert_eq!(a.const_cmp(&b), a.cmp(&b));
            }
        }
    }

    #[test]
    fn test_from_str_and_debug() {
        let abbreviation: BookAbbreviation = "SA1".parse().unwrap();
        assert_eq!(format!("{:?}", abbreviation), "BookAbbreviation(\"SA1\")");
    }
}
