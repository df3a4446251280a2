//! Canonical book codes and the const builders that turn them into sorted
//! per-system entry arrays.

use std::cmp::Ordering;

use crate::state::{BookAbbreviation, IndexToReferenceEntry, ReferenceToIndexEntry};

pub const BOOK_COUNT: usize = 66;

const fn book(code: &str) -> BookAbbreviation {
    BookAbbreviation::new(code)
}

/// Book codes in canonical (Genesis to Revelation) order.
pub const BOOK_CODES: [BookAbbreviation; BOOK_COUNT] = [
    book("GEN"), book("EXO"), book("LEV"), book("NUM"), book("DEU"),
    book("JOS"), book("JDG"), book("RUT"), book("SA1"), book("SA2"),
    book("KI1"), book("KI2"), book("CH1"), book("CH2"), book("EZR"),
    book("NEH"), book("EST"), book("JOB"), book("PSA"), book("PRO"),
    book("ECC"), book("SNG"), book("ISA"), book("JER"), book("LAM"),
    book("EZE"), book("DAN"), book("HOS"), book("JOL"), book("AMO"),
    book("OBA"), book("JNA"), book("MIC"), book("NAH"), book("HAB"),
    book("ZEP"), book("HAG"), book("ZEC"), book("MAL"),
    book("MAT"), book("MRK"), book("LUK"), book("JHN"), book("ACT"),
    book("ROM"), book("CO1"), book("CO2"), book("GAL"), book("EPH"),
    book("PHP"), book("COL"), book("TH1"), book("TH2"), book("TI1"),
    book("TI2"), book("TIT"), book("PMN"), book("HEB"), book("JAM"),
    book("PE1"), book("PE2"), book("JN1"), book("JN2"), book("JN3"),
    book("JDE"), book("REV"),
];

/// Insertion sort by abbreviation, evaluated at compile time.
const fn sorted_codes(mut codes: [BookAbbreviation; BOOK_COUNT]) -> [BookAbbreviation; BOOK_COUNT] {
    let mut i = 1;
    while i < BOOK_COUNT {
        let current = codes[i];
        let mut j = i;
        while j > 0 && matches!(codes[j - 1].const_cmp(&current), Ordering::Greater) {
            codes[j] = codes[j - 1];
            j -= 1;
        }
        codes[j] = current;
        i += 1;
    }
    codes
}

const fn strictly_ascending(codes: &[BookAbbreviation; BOOK_COUNT]) -> bool {
    let mut i = 1;
    while i < BOOK_COUNT {
        if !matches!(codes[i - 1].const_cmp(&codes[i]), Ordering::Less) {
            return false;
        }
        i += 1;
    }
    true
}

const SORTED_BOOK_CODES: [BookAbbreviation; BOOK_COUNT] = sorted_codes(BOOK_CODES);

// Duplicate codes would leave two equal neighbours after sorting
const _: () = assert!(strictly_ascending(&SORTED_BOOK_CODES));

/// Every book mapped to `index_number`, ordered by abbreviation.
pub const fn by_reference_entries(index_number: i32) -> [ReferenceToIndexEntry; BOOK_COUNT] {
    let mut entries = [ReferenceToIndexEntry::new(SORTED_BOOK_CODES[0], index_number); BOOK_COUNT];
    let mut i = 0;
    while i < BOOK_COUNT {
        entries[i] = ReferenceToIndexEntry::new(SORTED_BOOK_CODES[i], index_number);
        i += 1;
    }
    entries
}

/// Every book mapped to `index_number`, ordered by index then abbreviation.
///
/// With a single index per system that is the abbreviation order again.
pub const fn by_book_entries(index_number: i32) -> [IndexToReferenceEntry; BOOK_COUNT] {
    let mut entries = [IndexToReferenceEntry::new(index_number, SORTED_BOOK_CODES[0]); BOOK_COUNT];
    let mut i = 0;
    while i < BOOK_COUNT {
        entries[i] = IndexToReferenceEntry::new(index_number, SORTED_BOOK_CODES[i]);
        i += 1;
    }
    entries
}
