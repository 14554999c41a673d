//! # typelib-reader
//!
//! A reader for compiled GObject Introspection typelib files.
//!
//! A typelib records, for one library namespace, its dependencies, a
//! directory of named top-level entries, and typed blobs describing callable
//! signatures, arguments, and simple type descriptors. Most boolean and
//! enumerated metadata is packed into C bitfields whose physical bit order
//! depends on the authoring host's endianness; the [`typelib::bitfield`]
//! helpers reproduce that layout so decoded values are identical on either
//! kind of host.
//!
//! The header, directory, dependency list, and section table are parsed
//! eagerly when a [`TypelibReader`] is constructed; blobs and name strings
//! are decoded lazily from stored offsets.
pub mod typelib;

// Re-export the main types for convenience
pub use typelib::{
    types::models::{
        ArgBlob, BlobKind, DirEntry, FunctionBlob, Header, ScopeKind, Section, SectionKind,
        SignatureBlob, SimpleTypeBlob, SimpleTypeBlobFlags, TypeTag,
    },
    Result, TypelibError, TypelibReader,
};
