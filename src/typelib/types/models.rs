//! Data structures representing typelib format components.
//!
//! All records here are immutable value snapshots produced at decode time.
//! Boolean and enumerated metadata packed into bitfield words is never stored
//! redundantly; accessors derive it on demand through
//! [`crate::typelib::bitfield`].

use crate::typelib::bitfield;

/// Kind tag of a top-level directory entry or blob.
///
/// Unknown discriminants are preserved opaquely so files using newer blob
/// kinds still decode structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobKind {
    Invalid,
    Function,
    Callback,
    Struct,
    Boxed,
    Enum,
    Flags,
    Object,
    Interface,
    Constant,
    Invalid0,
    Union,
    Unknown(u16),
}

impl From<u16> for BlobKind {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::Invalid,
            1 => Self::Function,
            2 => Self::Callback,
            3 => Self::Struct,
            4 => Self::Boxed,
            5 => Self::Enum,
            6 => Self::Flags,
            7 => Self::Object,
            8 => Self::Interface,
            9 => Self::Constant,
            10 => Self::Invalid0,
            11 => Self::Union,
            other => Self::Unknown(other),
        }
    }
}

/// Fundamental type tag carried by a [`SimpleTypeBlob`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Void,
    Boolean,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    GType,
    Utf8,
    Filename,
    Array,
    Interface,
    GList,
    GSList,
    GHash,
    Error,
    Unichar,
    Unknown(u8),
}

impl From<u8> for TypeTag {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Void,
            1 => Self::Boolean,
            2 => Self::Int8,
            3 => Self::Uint8,
            4 => Self::Int16,
            5 => Self::Uint16,
            6 => Self::Int32,
            7 => Self::Uint32,
            8 => Self::Int64,
            9 => Self::Uint64,
            10 => Self::Float,
            11 => Self::Double,
            12 => Self::GType,
            13 => Self::Utf8,
            14 => Self::Filename,
            15 => Self::Array,
            16 => Self::Interface,
            17 => Self::GList,
            18 => Self::GSList,
            19 => Self::GHash,
            20 => Self::Error,
            21 => Self::Unichar,
            other => Self::Unknown(other),
        }
    }
}

impl TypeTag {
    /// Human-readable name of the tag, from a fixed read-only table.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Boolean => "gboolean",
            Self::Int8 => "gint8",
            Self::Uint8 => "guint8",
            Self::Int16 => "gint16",
            Self::Uint16 => "guint16",
            Self::Int32 => "gint32",
            Self::Uint32 => "guint32",
            Self::Int64 => "gint64",
            Self::Uint64 => "guint64",
            Self::Float => "gfloat",
            Self::Double => "gdouble",
            Self::GType => "GType",
            Self::Utf8 => "utf8",
            Self::Filename => "filename",
            Self::Array => "array",
            Self::Interface => "interface",
            Self::GList => "GList",
            Self::GSList => "GSList",
            Self::GHash => "GHashTable",
            Self::Error => "GError",
            Self::Unichar => "gunichar",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Lifetime of a callback argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Not a callback, or scope not applicable.
    Invalid,
    /// Valid only for the duration of the call.
    Call,
    /// Valid until the asynchronous operation completes.
    Async,
    /// Valid until the destroy notifier is invoked.
    Notified,
    Unknown(u8),
}

impl From<u8> for ScopeKind {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Invalid,
            1 => Self::Call,
            2 => Self::Async,
            3 => Self::Notified,
            other => Self::Unknown(other),
        }
    }
}

/// Kind of an auxiliary section table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Sentinel terminating the section list.
    End,
    /// Directory index section, reserved for future use.
    Index,
    Unknown(u32),
}

impl From<u32> for SectionKind {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::End,
            1 => Self::Index,
            other => Self::Unknown(other),
        }
    }
}

/// Parsed typelib file header.
///
/// A fixed 112-byte record at offset 0. All offsets are absolute byte
/// offsets from the start of the file; `size` equals the file's byte length.
#[derive(Debug, Clone)]
pub struct Header {
    pub magic: [u8; 16],
    pub major_version: u8,
    pub minor_version: u8,
    pub reserved: u16,
    /// Total number of directory entries.
    pub n_entries: u16,
    /// Number of directory entries defined in this namespace.
    pub n_local_entries: u16,
    /// Offset of the directory-entry table.
    pub directory: u32,
    pub n_attributes: u32,
    pub attributes: u32,
    /// Offset of the `|`-delimited dependency string, or 0 if absent.
    pub dependencies: u32,
    /// Total file size in bytes.
    pub size: u32,
    pub namespace: u32,
    pub nsversion: u32,
    pub shared_library: u32,
    pub c_prefix: u32,
    pub entry_blob_size: u16,
    pub function_blob_size: u16,
    pub callback_blob_size: u16,
    pub signal_blob_size: u16,
    pub vfunc_blob_size: u16,
    pub arg_blob_size: u16,
    pub property_blob_size: u16,
    pub field_blob_size: u16,
    pub value_blob_size: u16,
    pub attribute_blob_size: u16,
    pub constant_blob_size: u16,
    pub error_domain_blob_size: u16,
    pub signature_blob_size: u16,
    pub enum_blob_size: u16,
    pub struct_blob_size: u16,
    pub object_blob_size: u16,
    pub interface_blob_size: u16,
    pub union_blob_size: u16,
    /// Offset of the section table, or 0 if absent.
    pub sections: u32,
}

/// One indexed top-level symbol in the directory table.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub kind: BlobKind,
    /// Bit 0 holds the locally-defined flag; remaining bits are reserved.
    pub raw_local_reserved: u16,
    /// Offset of the entry's NUL-terminated name string.
    pub name: u32,
    /// Offset of the entry's payload blob; meaning depends on `kind`.
    pub offset: u32,
}

impl DirEntry {
    /// Whether this entry is defined in the namespace itself rather than
    /// re-exported from a dependency.
    pub fn is_local(&self) -> bool {
        bitfield::extract_bool(self.raw_local_reserved as u32, 16, 0)
    }
}

/// One (kind, offset) pair from the auxiliary section table.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub kind: SectionKind,
    pub offset: u32,
}

/// The 32-bit flags word of a [`SimpleTypeBlob`].
#[derive(Debug, Clone, Copy)]
pub struct SimpleTypeBlobFlags(pub u32);

impl SimpleTypeBlobFlags {
    pub fn is_pointer(&self) -> bool {
        bitfield::extract_bool(self.0, 32, 24)
    }

    pub fn tag(&self) -> TypeTag {
        TypeTag::from(bitfield::extract_value(self.0, 32, 27, 5) as u8)
    }
}

/// Simple type descriptor: a flags word plus an offset used only when the
/// tag names a compound/interface type (otherwise unused padding).
#[derive(Debug, Clone, Copy)]
pub struct SimpleTypeBlob {
    pub flags: SimpleTypeBlobFlags,
    pub offset: u32,
}

/// One callable argument: name, packed flags, callback bookkeeping indices,
/// and the inline argument type.
#[derive(Debug, Clone)]
pub struct ArgBlob {
    /// Offset of the argument's name string.
    pub name: u32,
    pub raw_flags: u32,
    /// Index of the user-data argument for a callback, or 0xFF.
    pub closure: u8,
    /// Index of the destroy-notify argument for a callback, or 0xFF.
    pub destroy: u8,
    pub arg_type: SimpleTypeBlob,
}

impl ArgBlob {
    pub fn is_in(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 0)
    }

    pub fn is_out(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 1)
    }

    pub fn caller_allocates(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 2)
    }

    pub fn nullable(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 3)
    }

    pub fn optional(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 4)
    }

    pub fn transfer_ownership(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 5)
    }

    pub fn transfer_container_ownership(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 6)
    }

    pub fn is_return_value(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 7)
    }

    pub fn scope(&self) -> ScopeKind {
        ScopeKind::from(bitfield::extract_value(self.raw_flags, 32, 8, 3) as u8)
    }

    pub fn skip(&self) -> bool {
        bitfield::extract_bool(self.raw_flags, 32, 11)
    }
}

/// Callable signature: return type, packed flags, and the owned argument
/// list that trails the fixed header in the file.
#[derive(Debug, Clone)]
pub struct SignatureBlob {
    pub return_type: SimpleTypeBlob,
    pub raw_flags: u16,
    pub arguments: Vec<ArgBlob>,
}

impl SignatureBlob {
    pub fn may_return_null(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 0)
    }

    pub fn caller_owns_return_value(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 1)
    }

    pub fn caller_owns_return_container(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 2)
    }

    pub fn skip_return(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 3)
    }

    pub fn instance_transfer_ownership(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 4)
    }

    pub fn throws(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 5)
    }
}

/// Function description: kind discriminant, packed flags, and offsets of the
/// name string, C symbol string, and [`SignatureBlob`].
#[derive(Debug, Clone)]
pub struct FunctionBlob {
    pub kind: BlobKind,
    pub raw_flags: u16,
    pub name: u32,
    pub symbol: u32,
    pub signature: u32,
}

impl FunctionBlob {
    pub fn is_deprecated(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 0)
    }

    pub fn is_setter(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 1)
    }

    pub fn is_getter(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 2)
    }

    pub fn is_constructor(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 3)
    }

    pub fn wraps_vfunc(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 4)
    }

    pub fn throws(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 5)
    }

    pub fn has_property_index(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 6)
    }

    pub fn is_static(&self) -> bool {
        bitfield::extract_bool(self.raw_flags as u32, 16, 7)
    }
}
