//! Dependency list parsing.

use std::io::{Read, Seek};

use log::debug;

use crate::typelib::io::PrimitiveReader;
use crate::typelib::types::error::Result;
use crate::typelib::types::models::Header;

/// Reads the namespace requirements, e.g. `["GObject-2.0", "Gio-2.0"]`.
///
/// The file stores them as one NUL-terminated string with `|` between
/// tokens. A namespace with no dependencies is represented either by a
/// dependencies offset of 0 or by an empty string; both normalize to an
/// empty list rather than one empty token.
pub fn parse<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    header: &Header,
) -> Result<Vec<String>> {
    if header.dependencies == 0 {
        debug!("No dependency string present");
        return Ok(Vec::new());
    }

    let raw = reader.read_cstring(header.dependencies as u64)?;
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let dependencies: Vec<String> = raw.split('|').map(str::to_owned).collect();
    debug!("Dependencies: {:?}", dependencies);
    Ok(dependencies)
}
