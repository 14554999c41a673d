//! Custom error types for the typelib-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum TypelibError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The 16-byte magic signature at the start of the file did not match.
    /// Parsing cannot continue past this point.
    #[error("Bad magic signature: expected {expected:02x?}, got {found:02x?}")]
    BadMagic {
        expected: [u8; 16],
        found: [u8; 16],
    },

    /// Fewer bytes were available than a fixed-size read or a sentinel scan
    /// required.
    #[error("Truncated input while reading {context}: needed {needed} bytes at offset {offset}")]
    TruncatedInput {
        context: &'static str,
        offset: u64,
        needed: u64,
    },

    /// An offset stored in a header, directory entry, or blob points past the
    /// end of the file. Reported only when the offset is actually followed.
    #[error("Unresolved offset {offset:#x}: file is only {len} bytes")]
    UnresolvedOffset { offset: u64, len: u64 },

    /// A mutex lock was poisoned, indicating a panic in another thread holding the lock.
    #[error("A mutex lock was poisoned, indicating a panic in another thread holding the lock.")]
    LockPoisoned,
}

/// A convenience `Result` type alias using the crate's `TypelibError` type.
pub type Result<T> = std::result::Result<T, TypelibError>;
