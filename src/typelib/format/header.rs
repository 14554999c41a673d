//! Typelib file header parsing.

use std::io::{Read, Seek};

use log::{debug, info};

use crate::typelib::io::PrimitiveReader;
use crate::typelib::types::error::{Result, TypelibError};
use crate::typelib::types::models::Header;

/// The 16-byte magic signature at the start of every typelib file:
/// `GOBJ\nMETADATA\r\n\x1a`.
pub const MAGIC: [u8; 16] = *b"GOBJ\nMETADATA\r\n\x1a";

/// Parses the fixed-size header at offset 0.
///
/// Validates the magic signature and fails with [`TypelibError::BadMagic`]
/// on mismatch. Version numbers are stored but not validated, so files with
/// unknown minor versions still decode.
pub fn parse<R: Read + Seek>(reader: &mut PrimitiveReader<R>) -> Result<Header> {
    info!("Parsing typelib header");

    let header: Header = reader.read_fixed_at(0, "header")?;

    if header.magic != MAGIC {
        return Err(TypelibError::BadMagic {
            expected: MAGIC,
            found: header.magic,
        });
    }

    debug!(
        "Header parsed: version={}.{}, entries={} ({} local), size={} bytes",
        header.major_version,
        header.minor_version,
        header.n_entries,
        header.n_local_entries,
        header.size
    );

    Ok(header)
}
