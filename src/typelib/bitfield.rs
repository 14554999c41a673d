//! Endianness-aware bitfield extraction.
//!
//! The typelib format packs boolean and enumerated metadata into C bitfields
//! inside 16/32-bit words. A C compiler allocates adjacent bitfields starting
//! from the least significant bit on little-endian hosts and from the most
//! significant bit on big-endian hosts, so the physical position of a logical
//! field depends on the byte order of the machine that authored the file.
//! These helpers reproduce that layout so accessors yield the same logical
//! values on either kind of host.

/// Extracts an unsigned `length`-bit value at logical bit `index` from a word
/// of `width` physical bits.
///
/// On a little-endian host the field occupies physical bits
/// `index .. index + length - 1` (logical MSB highest); on a big-endian host
/// the logical MSB sits at physical bit `width - 1 - index`.
///
/// `length == 0` yields 0. `index + length` must not exceed `width`.
pub fn extract_value(word: u32, width: u32, index: u32, length: u32) -> u32 {
    debug_assert!(index + length <= width, "bitfield out of range");
    if length == 0 {
        return 0;
    }
    let shift = if cfg!(target_endian = "little") {
        index
    } else {
        width - index - length
    };
    let mask = if length >= 32 {
        u32::MAX
    } else {
        (1u32 << length) - 1
    };
    (word >> shift) & mask
}

/// Extracts a single-bit boolean field at logical bit `index`.
pub fn extract_bool(word: u32, width: u32, index: u32) -> bool {
    extract_value(word, width, index, 1) == 1
}
