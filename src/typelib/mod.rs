//! Core typelib reader module

pub mod bitfield;
pub mod format;
pub mod io;
pub mod reader;
pub mod types;

pub use reader::TypelibReader;
pub use types::error::{Result, TypelibError};
