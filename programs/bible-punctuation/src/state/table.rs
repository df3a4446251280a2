use super::{
    abbreviation::BookAbbreviation,
    entries::{IndexToReferenceEntry, ReferenceToIndexEntry},
};

/// A named punctuation system with its two pre-sorted entry arrays.
///
/// `by_reference` is ordered by abbreviation and `by_book` by index number;
/// both hold the same logical set of pairs. The arrays are borrowed statics
/// and carry their own length, so no sentinel entry terminates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationSystemTable {
    pub system_name: &'static str,
    pub by_reference: &'static [ReferenceToIndexEntry],
    pub by_book: &'static [IndexToReferenceEntry],
}

impl PunctuationSystemTable {
    pub const fn new(
        system_name: &'static str,
        by_reference: &'static [ReferenceToIndexEntry],
        by_book: &'static [IndexToReferenceEntry],
    ) -> Self {
        Self {
            system_name,
            by_reference,
            by_book,
        }
    }

    /// Number of forward entries.
    pub const fn entry_count(&self) -> usize {
        self.by_reference.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.by_reference.is_empty() && self.by_book.is_empty()
    }

    /// `(abbreviation, index)` pairs in `by_reference` order.
    pub fn reference_pairs(&self) -> impl Iterator<Item = (BookAbbreviation, i32)> + 'static {
        self.by_reference.iter().map(ReferenceToIndexEntry::pair)
    }

    /// `(abbreviation, index)` pairs in `by_book` order.
    pub fn book_pairs(&self) -> impl Iterator<Item = (BookAbbreviation, i32)> + 'static {
        self.by_book.iter().map(IndexToReferenceEntry::pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BY_REFERENCE: [ReferenceToIndexEntry; 2] = [
        ReferenceToIndexEntry::new(BookAbbreviation::new("EXO"), 1),
        ReferenceToIndexEntry::new(BookAbbreviation::new("GEN"), 0),
    ];
    static BY_BOOK: [IndexToReferenceEntry; 2] = [
        IndexToReferenceEntry::new(0, BookAbbreviation::new("GEN")),
        IndexToReferenceEntry::new(1, BookAbbreviation::new("EXO")),
    ];

    #[test]
    fn test_pairs_follow_stored_order() {
        let table = PunctuationSystemTable::new("Sample", &BY_REFERENCE, &BY_BOOK);

        assert_eq!(table.entry_count(), 2);
        assert!(!table.is_empty());

        let forward: Vec<_> = table.reference_pairs().map(|(a, i)| (a.to_string(), i)).collect();
        assert_eq!(forward, vec![("EXO".to_string(), 1), ("GEN".to_string(), 0)]);

        let inverse: Vec<_> = table.book_pairs().map(|(a, i)| (a.to_string(), i)).collect();
        assert_eq!(inverse, vec![("GEN".to_string(), 0), ("EXO".to_string(), 1)]);
    }

    #[test]
    fn test_empty_table() {
        let table = PunctuationSystemTable::new("Empty", &[], &[]);
        assert!(table.is_empty());
        assert_eq!(table.entry_count(), 0);
        assert_eq!(table.reference_pairs().count(), 0);
    }
}
