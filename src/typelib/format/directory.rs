//! Directory-entry table parsing.

use std::io::{Read, Seek};

use log::debug;

use crate::typelib::io::PrimitiveReader;
use crate::typelib::types::error::Result;
use crate::typelib::types::models::{DirEntry, Header};

/// Reads the top-level entry table.
///
/// Seeks to `header.directory` and reads `header.n_entries` contiguous
/// fixed-size records. Entries come back in file order; the 0-based position
/// of an entry doubles as its implicit id elsewhere in the format, so order
/// is significant.
pub fn parse<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    header: &Header,
) -> Result<Vec<DirEntry>> {
    debug!(
        "Parsing directory: {} entries at offset {:#x}",
        header.n_entries, header.directory
    );

    reader.read_array_at(
        header.n_entries as usize,
        header.directory as u64,
        "directory entry",
    )
}
