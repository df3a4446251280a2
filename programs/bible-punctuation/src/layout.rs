//! Byte-level views of the entry records.
//!
//! The image is the records exactly as they sit in memory (native endian,
//! 8 bytes each, no header and no sentinel). Encoding is a zero-copy cast;
//! decoding validates every field and copies, so the input need not be
//! aligned.

use arrayref::{array_ref, array_refs};
use bytemuck::NoUninit;
use tracing::{debug, warn};

use crate::{
    error::{PunctuationError, Result},
    state::{BookAbbreviation, IndexToReferenceEntry, ReferenceToIndexEntry, ABBREVIATION_WIDTH},
};

/// Size of one record in either field order
pub const RECORD_SIZE: usize = 8;

const _: () = assert!(ReferenceToIndexEntry::SIZE == RECORD_SIZE);
const _: () = assert!(IndexToReferenceEntry::SIZE == RECORD_SIZE);

/// Borrow a slice of records as its in-memory byte image.
pub fn as_bytes<T: NoUninit>(entries: &[T]) -> &[u8] {
    bytemuck::cast_slice(entries)
}

fn records(bytes: &[u8]) -> Result<impl Iterator<Item = &[u8; RECORD_SIZE]>> {
    if bytes.len() % RECORD_SIZE != 0 {
        warn!("Rejecting record image of {} bytes", bytes.len());
        return Err(PunctuationError::MisalignedRecords {
            len: bytes.len(),
            record_size: RECORD_SIZE,
        });
    }
    Ok(bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| array_ref![chunk, 0, RECORD_SIZE]))
}

fn index_number(bytes: &[u8; 4]) -> Result<i32> {
    let index_number = i32::from_ne_bytes(*bytes);
    if index_number < 0 {
        return Err(PunctuationError::NegativeIndex(index_number));
    }
    Ok(index_number)
}

/// Decode an image of abbreviation-first records.
pub fn reference_entries_from_bytes(bytes: &[u8]) -> Result<Vec<ReferenceToIndexEntry>> {
    let entries = records(bytes)?
        .map(|record| -> Result<ReferenceToIndexEntry> {
            let (abbreviation, index) = array_refs![record, ABBREVIATION_WIDTH, 4];
            Ok(ReferenceToIndexEntry::new(
                BookAbbreviation::try_from(*abbreviation)?,
                index_number(index)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Decoded {} by-reference entries", entries.len());
    Ok(entries)
}

/// Decode an image of index-first records.
pub fn book_entries_from_bytes(bytes: &[u8]) -> Result<Vec<IndexToReferenceEntry>> {
    let entries = records(bytes)?
        .map(|record| -> Result<IndexToReferenceEntry> {
            let (index, abbreviation) = array_refs![record, 4, ABBREVIATION_WIDTH];
            Ok(IndexToReferenceEntry::new(
                index_number(index)?,
                BookAbbreviation::try_from(*abbreviation)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Decoded {} by-book entries", entries.len());
    Ok(entries)
}
