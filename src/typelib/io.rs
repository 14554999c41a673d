//! Positioned byte-stream reading primitives.
//!
//! Everything in the typelib format is addressed by absolute byte offsets
//! from the start of the file, so the reader exposes absolute seeks plus
//! fixed-size record reads. Seeking does not restore the previous cursor;
//! callers that interleave sequential reads with offset dereferences must
//! save and restore the position themselves.

use std::io::{Read, Seek, SeekFrom};

use super::types::error::{Result, TypelibError};

/// A fixed-layout record that can decode itself from an exact-size buffer of
/// native-endian bytes.
///
/// Implementations live in [`crate::typelib::format::records`]; they read
/// integer fields explicitly rather than overlaying a struct on raw bytes, so
/// no host structure-layout or padding rules are relied on.
pub trait FixedRecord: Sized {
    /// Exact encoded size in bytes.
    const SIZE: usize;

    /// Decodes from a buffer of exactly [`Self::SIZE`] bytes.
    fn decode(buf: &[u8]) -> Self;
}

/// Positioned, seekable reader over a random-access byte source.
#[derive(Debug)]
pub struct PrimitiveReader<R> {
    source: R,
    /// Total length of the source in bytes, captured at construction.
    len: u64,
}

impl<R: Read + Seek> PrimitiveReader<R> {
    /// Wraps a byte source, capturing its total length and rewinding to the
    /// start.
    pub fn new(mut source: R) -> Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        source.seek(SeekFrom::Start(0))?;
        Ok(Self { source, len })
    }

    /// Total length of the underlying source in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Current cursor position.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.source.stream_position()?)
    }

    /// Seeks to an absolute offset, failing with `UnresolvedOffset` if the
    /// offset lies past the end of the source.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(TypelibError::UnresolvedOffset {
                offset,
                len: self.len,
            });
        }
        self.source.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Reads one fixed-size record at the current cursor.
    pub fn read_fixed<T: FixedRecord>(&mut self, context: &'static str) -> Result<T> {
        let offset = self.position()?;
        let mut buf = vec![0u8; T::SIZE];
        self.source.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                TypelibError::TruncatedInput {
                    context,
                    offset,
                    needed: T::SIZE as u64,
                }
            } else {
                TypelibError::Io(e)
            }
        })?;
        Ok(T::decode(&buf))
    }

    /// Seeks to `offset` and reads one fixed-size record there.
    pub fn read_fixed_at<T: FixedRecord>(
        &mut self,
        offset: u64,
        context: &'static str,
    ) -> Result<T> {
        self.seek_to(offset)?;
        self.read_fixed(context)
    }

    /// Reads `count` contiguous fixed-size records at the current cursor.
    pub fn read_array<T: FixedRecord>(
        &mut self,
        count: usize,
        context: &'static str,
    ) -> Result<Vec<T>> {
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.read_fixed(context)?);
        }
        Ok(records)
    }

    /// Seeks to `offset` and reads `count` contiguous fixed-size records.
    pub fn read_array_at<T: FixedRecord>(
        &mut self,
        count: usize,
        offset: u64,
        context: &'static str,
    ) -> Result<Vec<T>> {
        self.seek_to(offset)?;
        self.read_array(count, context)
    }

    /// Reads a NUL-terminated string at an absolute offset.
    ///
    /// Bytes are decoded as UTF-8 with lossy replacement, matching the 8-bit
    /// name strings the format stores. Fails with `TruncatedInput` if the
    /// source ends before a NUL terminator is found.
    pub fn read_cstring(&mut self, offset: u64) -> Result<String> {
        self.seek_to(offset)?;
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            if self.source.read(&mut byte)? == 0 {
                return Err(TypelibError::TruncatedInput {
                    context: "NUL-terminated string",
                    offset,
                    needed: bytes.len() as u64 + 1,
                });
            }
            if byte[0] == 0 {
                break;
            }
            bytes.push(byte[0]);
        }
        let (text, _, _) = encoding_rs::UTF_8.decode(&bytes);
        Ok(text.into_owned())
    }
}
