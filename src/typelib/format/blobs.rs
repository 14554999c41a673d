//! On-demand blob decoding.
//!
//! Each function is a pure decode of `(reader, offset)`; nothing is cached
//! or mutated. Offsets come from directory entries or from fields inside
//! other blobs (a [`FunctionBlob`]'s `signature` points at a
//! [`SignatureBlob`]).

use std::io::{Read, Seek};

use log::trace;

use super::records::SignatureHeader;
use crate::typelib::io::PrimitiveReader;
use crate::typelib::types::error::Result;
use crate::typelib::types::models::{ArgBlob, FunctionBlob, SignatureBlob, SimpleTypeBlob};

/// Decodes a simple type descriptor at `offset`.
pub fn simple_type<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    offset: u64,
) -> Result<SimpleTypeBlob> {
    trace!("Decoding simple type blob at {:#x}", offset);
    reader.read_fixed_at(offset, "simple type blob")
}

/// Decodes a single argument record at `offset`.
pub fn arg<R: Read + Seek>(reader: &mut PrimitiveReader<R>, offset: u64) -> Result<ArgBlob> {
    trace!("Decoding arg blob at {:#x}", offset);
    reader.read_fixed_at(offset, "arg blob")
}

/// Decodes a signature and its trailing argument array at `offset`.
///
/// The arguments start immediately after the fixed signature header with no
/// padding, so the array read continues from the cursor left by the header
/// read.
pub fn signature<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    offset: u64,
) -> Result<SignatureBlob> {
    trace!("Decoding signature blob at {:#x}", offset);
    let head: SignatureHeader = reader.read_fixed_at(offset, "signature blob")?;
    let arguments = reader.read_array(head.n_arguments as usize, "signature argument")?;
    Ok(SignatureBlob {
        return_type: head.return_type,
        raw_flags: head.raw_flags,
        arguments,
    })
}

/// Decodes a function record at `offset`.
pub fn function<R: Read + Seek>(
    reader: &mut PrimitiveReader<R>,
    offset: u64,
) -> Result<FunctionBlob> {
    trace!("Decoding function blob at {:#x}", offset);
    reader.read_fixed_at(offset, "function blob")
}
