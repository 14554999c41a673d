use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::sync::Mutex;

use log::info;

use super::format;
use super::io::PrimitiveReader;
use super::types::error::{Result, TypelibError};
use super::types::models::*;

/// The main reader for compiled typelib files.
///
/// Parsing happens in two phases. The constructor eagerly decodes the
/// header, directory, dependency list, and section table; those are
/// immutable afterwards and may be shared freely. Blobs and name strings
/// are decoded lazily from stored offsets, through a mutex-guarded cursor
/// on the underlying source.
#[derive(Debug)]
pub struct TypelibReader<R> {
    source: Mutex<PrimitiveReader<R>>,
    header: Header,
    directory: Vec<DirEntry>,
    dependencies: Vec<String>,
    sections: Vec<Section>,
}

impl TypelibReader<File> {
    /// Opens and parses a typelib file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The magic signature does not match
    /// - Any eagerly-parsed table is truncated or points past end of file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening typelib file: {}", path.display());
        Self::new(File::open(path)?)
    }
}

impl TypelibReader<Cursor<Vec<u8>>> {
    /// Parses a typelib from an in-memory byte buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::new(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> TypelibReader<R> {
    /// Parses a typelib from any seekable byte source.
    pub fn new(source: R) -> Result<Self> {
        let mut reader = PrimitiveReader::new(source)?;

        let header = format::header::parse(&mut reader)?;
        let dependencies = format::dependencies::parse(&mut reader, &header)?;
        let directory = format::directory::parse(&mut reader, &header)?;
        let sections = format::sections::parse(&mut reader, &header)?;

        info!(
            "Typelib parsed: {} entries, {} dependencies, {} sections",
            directory.len(),
            dependencies.len(),
            sections.len()
        );

        Ok(Self {
            source: Mutex::new(reader),
            header,
            directory,
            dependencies,
            sections,
        })
    }

    /// The parsed file header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Directory entries in file order. The 0-based index of an entry is its
    /// implicit id elsewhere in the format.
    pub fn directory(&self) -> &[DirEntry] {
        &self.directory
    }

    /// Namespace requirement tokens, e.g. `"GObject-2.0"`.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Auxiliary sections, excluding the END sentinel.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of directory entries.
    pub fn n_entries(&self) -> u16 {
        self.header.n_entries
    }

    /// Number of directory entries defined locally in this namespace.
    pub fn n_local_entries(&self) -> u16 {
        self.header.n_local_entries
    }

    /// The namespace name, e.g. `"Gst"`.
    pub fn namespace(&self) -> Result<String> {
        self.read_string(self.header.namespace)
    }

    /// The namespace version, e.g. `"1.0"`.
    pub fn nsversion(&self) -> Result<String> {
        self.read_string(self.header.nsversion)
    }

    /// The shared library name(s) the namespace binds, if recorded.
    pub fn shared_library(&self) -> Result<Option<String>> {
        self.read_optional_string(self.header.shared_library)
    }

    /// The C identifier prefix for the namespace, if recorded.
    pub fn c_prefix(&self) -> Result<Option<String>> {
        self.read_optional_string(self.header.c_prefix)
    }

    /// Reads the name string of a directory entry.
    pub fn entry_name(&self, entry: &DirEntry) -> Result<String> {
        self.string_at(entry.name)
    }

    /// Reads the NUL-terminated string at an absolute offset, as stored in
    /// name/symbol fields of blobs.
    pub fn string_at(&self, offset: u32) -> Result<String> {
        self.read_string(offset)
    }

    /// Decodes the simple type blob at `offset`.
    pub fn simple_type_blob(&self, offset: u32) -> Result<SimpleTypeBlob> {
        let mut source = self.lock_source()?;
        format::blobs::simple_type(&mut source, offset as u64)
    }

    /// Decodes the argument blob at `offset`.
    pub fn arg_blob(&self, offset: u32) -> Result<ArgBlob> {
        let mut source = self.lock_source()?;
        format::blobs::arg(&mut source, offset as u64)
    }

    /// Decodes the signature blob at `offset`, including its argument array.
    pub fn signature_blob(&self, offset: u32) -> Result<SignatureBlob> {
        let mut source = self.lock_source()?;
        format::blobs::signature(&mut source, offset as u64)
    }

    /// Decodes the function blob at `offset`. Directory entries with
    /// [`BlobKind::Function`] store such an offset in their payload field.
    pub fn function_blob(&self, offset: u32) -> Result<FunctionBlob> {
        let mut source = self.lock_source()?;
        format::blobs::function(&mut source, offset as u64)
    }

    fn read_string(&self, offset: u32) -> Result<String> {
        let mut source = self.lock_source()?;
        source.read_cstring(offset as u64)
    }

    fn read_optional_string(&self, offset: u32) -> Result<Option<String>> {
        if offset == 0 {
            return Ok(None);
        }
        self.read_string(offset).map(Some)
    }

    fn lock_source(&self) -> Result<std::sync::MutexGuard<'_, PrimitiveReader<R>>> {
        self.source.lock().map_err(|_| TypelibError::LockPoisoned)
    }
}
