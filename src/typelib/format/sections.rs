//! Section table parsing.

use std::io::{Read, Seek};

use log::debug;

use crate::typelib::io::PrimitiveReader;
use crate::typelib::types::error::Result;
use crate::typelib::types::models::{Header, Section, SectionKind};

/// Reads the sentinel-terminated list of auxiliary sections.
///
/// Records are read contiguously from `header.sections` until one with the
/// END kind appears; the sentinel itself is discarded. A corrupt table that
/// never reaches END fails with `TruncatedInput` once the source is
/// exhausted. A sections offset of 0 means the table is absent (older minor
/// versions) and yields an empty list.
pub fn parse<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    header: &Header,
) -> Result<Vec<Section>> {
    if header.sections == 0 {
        debug!("No section table present");
        return Ok(Vec::new());
    }

    reader.seek_to(header.sections as u64)?;
    let mut sections = Vec::new();
    loop {
        let section: Section = reader.read_fixed("section")?;
        if section.kind == SectionKind::End {
            break;
        }
        sections.push(section);
    }

    debug!("Section table: {} sections", sections.len());
    Ok(sections)
}
