//! File format parsing layer for typelib files.
//!
//! This module provides the mid-level parsing layer that bridges between
//! raw byte I/O and the high-level
//! [`TypelibReader`](crate::typelib::reader::TypelibReader).
//!
//! # Module Organization
//!
//! - [`records`]: Fixed-layout record decoding (native-endian field reads)
//! - [`header`]: Parses and validates the fixed 112-byte file header
//! - [`directory`]: Parses the top-level entry table
//! - [`dependencies`]: Parses the `|`-delimited namespace requirement string
//! - [`sections`]: Parses the sentinel-terminated auxiliary section table
//! - [`blobs`]: On-demand decoding of type/arg/signature/function blobs
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────┐
//! │  Header          │ ← header::parse() (offset 0, magic validated)
//! ├──────────────────┤
//! │  Directory       │ ← directory::parse() (header.directory)
//! ├──────────────────┤
//! │  Dependencies    │ ← dependencies::parse() (header.dependencies)
//! ├──────────────────┤
//! │  Sections        │ ← sections::parse() (header.sections, END-terminated)
//! ├──────────────────┤
//! │  Blob data       │ ← blobs::* (offsets inside entries/blobs)
//! └──────────────────┘
//! ```
//!
//! All offsets are absolute byte offsets from the start of the file.

pub mod blobs;
pub mod dependencies;
pub mod directory;
pub mod header;
pub mod records;
pub mod sections;
