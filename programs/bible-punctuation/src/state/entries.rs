use std::mem::{align_of, offset_of, size_of};

use bytemuck::NoUninit;

use super::abbreviation::{BookAbbreviation, ABBREVIATION_WIDTH};

/// Forward record: book abbreviation first, then the punctuation system index.
///
/// Layout: 8 bytes, align 4. Field order is part of the binary contract with
/// generated data and must not change.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, NoUninit)]
pub struct ReferenceToIndexEntry {
    pub reference_abbreviation: BookAbbreviation,
    pub index_number: i32,
}

/// Inverse record: index first, then the abbreviation.
///
/// Layout: 8 bytes, align 4.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, NoUninit)]
pub struct IndexToReferenceEntry {
    pub index_number: i32,
    pub reference_abbreviation: BookAbbreviation,
}

impl ReferenceToIndexEntry {
    /// Size in bytes
    pub const SIZE: usize = ABBREVIATION_WIDTH + // reference_abbreviation
        size_of::<i32>(); // index_number

    pub const fn new(reference_abbreviation: BookAbbreviation, index_number: i32) -> Self {
        Self {
            reference_abbreviation,
            index_number,
        }
    }

    pub const fn pair(&self) -> (BookAbbreviation, i32) {
        (self.reference_abbreviation, self.index_number)
    }
}

impl IndexToReferenceEntry {
    /// Size in bytes
    pub const SIZE: usize = size_of::<i32>() + // index_number
        ABBREVIATION_WIDTH; // reference_abbreviation

    pub const fn new(index_number: i32, reference_abbreviation: BookAbbreviation) -> Self {
        Self {
            index_number,
            reference_abbreviation,
        }
    }

    pub const fn pair(&self) -> (BookAbbreviation, i32) {
        (self.reference_abbreviation, self.index_number)
    }
}

impl From<ReferenceToIndexEntry> for IndexToReferenceEntry {
    fn from(entry: ReferenceToIndexEntry) -> Self {
        Self::new(entry.index_number, entry.reference_abbreviation)
    }
}

impl From<IndexToReferenceEntry> for ReferenceToIndexEntry {
    fn from(entry: IndexToReferenceEntry) -> Self {
        Self::new(entry.reference_abbreviation, entry.index_number)
    }
}

// Compile-time layout verification
const _: () = assert!(size_of::<BookAbbreviation>() == ABBREVIATION_WIDTH);
const _: () = assert!(align_of::<BookAbbreviation>() == 1);

const _: () = assert!(size_of::<ReferenceToIndexEntry>() == ReferenceToIndexEntry::SIZE);
const _: () = assert!(align_of::<ReferenceToIndexEntry>() == 4);
const _: () = assert!(offset_of!(ReferenceToIndexEntry, reference_abbreviation) == 0);
const _: () = assert!(offset_of!(ReferenceToIndexEntry, index_number) == ABBREVIATION_WIDTH);

const _: () = assert!(size_of::<IndexToReferenceEntry>() == IndexToReferenceEntry::SIZE);
const _: () = assert!(align_of::<IndexToReferenceEntry>() == 4);
const _: () = assert!(offset_of!(IndexToReferenceEntry, index_number) == 0);
const _: () = assert!(offset_of!(IndexToReferenceEntry, reference_abbreviation) == size_of::<i32>());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_swaps_field_order_only() {
        let forward = ReferenceToIndexEntry::new(BookAbbreviation::new("ROM"), 2);
        let inverse = IndexToReferenceEntry::from(forward);

        assert_eq!(inverse.index_number, 2);
        assert_eq!(inverse.reference_abbreviation.as_str(), "ROM");
        assert_eq!(forward.pair(), inverse.pair());
        assert_eq!(ReferenceToIndexEntry::from(inverse), forward);
    }
}
