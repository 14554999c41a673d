//! Fixed-layout record decoding.
//!
//! Each impl reads integer fields explicitly at fixed offsets in native byte
//! order, matching how the typelib compiler writes them. Nothing here relies
//! on host structure layout or padding rules.

use byteorder::{ByteOrder, NativeEndian};

use crate::typelib::io::FixedRecord;
use crate::typelib::types::models::{
    ArgBlob, BlobKind, DirEntry, FunctionBlob, Header, Section, SectionKind, SimpleTypeBlob,
    SimpleTypeBlobFlags,
};

impl FixedRecord for Header {
    const SIZE: usize = 112;

    fn decode(buf: &[u8]) -> Self {
        let mut magic = [0u8; 16];
        magic.copy_from_slice(&buf[0..16]);
        Self {
            magic,
            major_version: buf[16],
            minor_version: buf[17],
            reserved: NativeEndian::read_u16(&buf[18..20]),
            n_entries: NativeEndian::read_u16(&buf[20..22]),
            n_local_entries: NativeEndian::read_u16(&buf[22..24]),
            directory: NativeEndian::read_u32(&buf[24..28]),
            n_attributes: NativeEndian::read_u32(&buf[28..32]),
            attributes: NativeEndian::read_u32(&buf[32..36]),
            dependencies: NativeEndian::read_u32(&buf[36..40]),
            size: NativeEndian::read_u32(&buf[40..44]),
            namespace: NativeEndian::read_u32(&buf[44..48]),
            nsversion: NativeEndian::read_u32(&buf[48..52]),
            shared_library: NativeEndian::read_u32(&buf[52..56]),
            c_prefix: NativeEndian::read_u32(&buf[56..60]),
            entry_blob_size: NativeEndian::read_u16(&buf[60..62]),
            function_blob_size: NativeEndian::read_u16(&buf[62..64]),
            callback_blob_size: NativeEndian::read_u16(&buf[64..66]),
            signal_blob_size: NativeEndian::read_u16(&buf[66..68]),
            vfunc_blob_size: NativeEndian::read_u16(&buf[68..70]),
            arg_blob_size: NativeEndian::read_u16(&buf[70..72]),
            property_blob_size: NativeEndian::read_u16(&buf[72..74]),
            field_blob_size: NativeEndian::read_u16(&buf[74..76]),
            value_blob_size: NativeEndian::read_u16(&buf[76..78]),
            attribute_blob_size: NativeEndian::read_u16(&buf[78..80]),
            constant_blob_size: NativeEndian::read_u16(&buf[80..82]),
            error_domain_blob_size: NativeEndian::read_u16(&buf[82..84]),
            signature_blob_size: NativeEndian::read_u16(&buf[84..86]),
            enum_blob_size: NativeEndian::read_u16(&buf[86..88]),
            struct_blob_size: NativeEndian::read_u16(&buf[88..90]),
            object_blob_size: NativeEndian::read_u16(&buf[90..92]),
            interface_blob_size: NativeEndian::read_u16(&buf[92..94]),
            union_blob_size: NativeEndian::read_u16(&buf[94..96]),
            sections: NativeEndian::read_u32(&buf[96..100]),
            // 12 bytes of trailing padding are ignored.
        }
    }
}

impl FixedRecord for DirEntry {
    const SIZE: usize = 12;

    fn decode(buf: &[u8]) -> Self {
        Self {
            kind: BlobKind::from(NativeEndian::read_u16(&buf[0..2])),
            raw_local_reserved: NativeEndian::read_u16(&buf[2..4]),
            name: NativeEndian::read_u32(&buf[4..8]),
            offset: NativeEndian::read_u32(&buf[8..12]),
        }
    }
}

impl FixedRecord for Section {
    const SIZE: usize = 8;

    fn decode(buf: &[u8]) -> Self {
        Self {
            kind: SectionKind::from(NativeEndian::read_u32(&buf[0..4])),
            offset: NativeEndian::read_u32(&buf[4..8]),
        }
    }
}

impl FixedRecord for SimpleTypeBlob {
    const SIZE: usize = 8;

    fn decode(buf: &[u8]) -> Self {
        Self {
            flags: SimpleTypeBlobFlags(NativeEndian::read_u32(&buf[0..4])),
            offset: NativeEndian::read_u32(&buf[4..8]),
        }
    }
}

impl FixedRecord for ArgBlob {
    const SIZE: usize = 20;

    fn decode(buf: &[u8]) -> Self {
        Self {
            name: NativeEndian::read_u32(&buf[0..4]),
            raw_flags: NativeEndian::read_u32(&buf[4..8]),
            closure: buf[8],
            destroy: buf[9],
            // buf[10..12] is padding.
            arg_type: SimpleTypeBlob::decode(&buf[12..20]),
        }
    }
}

impl FixedRecord for FunctionBlob {
    const SIZE: usize = 20;

    fn decode(buf: &[u8]) -> Self {
        Self {
            kind: BlobKind::from(NativeEndian::read_u16(&buf[0..2])),
            raw_flags: NativeEndian::read_u16(&buf[2..4]),
            name: NativeEndian::read_u32(&buf[4..8]),
            symbol: NativeEndian::read_u32(&buf[8..12]),
            signature: NativeEndian::read_u32(&buf[12..16]),
            // buf[16..20] holds two reserved words.
        }
    }
}

/// Fixed leading part of a signature blob; the argument array follows it
/// immediately in the file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignatureHeader {
    pub return_type: SimpleTypeBlob,
    pub raw_flags: u16,
    pub n_arguments: u16,
}

impl FixedRecord for SignatureHeader {
    const SIZE: usize = 12;

    fn decode(buf: &[u8]) -> Self {
        Self {
            return_type: SimpleTypeBlob::decode(&buf[0..8]),
            raw_flags: NativeEndian::read_u16(&buf[8..10]),
            n_arguments: NativeEndian::read_u16(&buf[10..12]),
        }
    }
}
