//! Wire-level support enumerations and limits.
//!
//! These are small closed sets consumed by the serializer core: the byte-order
//! setting, the one-byte shape tags written ahead of every container, and the
//! fixed caps enforced on counts and lengths. The core never extends them at
//! runtime.

/// Byte order for every multi-byte field written by one serializer instance.
///
/// Little-endian is the canonical in-buffer layout; the big-endian setting
/// byte-reverses each multi-byte field as it crosses the buffer boundary, so
/// the produced stream is identical across hosts either way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Conditionally byte-reverses one multi-byte field in place.
    ///
    /// Applied uniformly to scalars and to the 4-byte counts written ahead of
    /// containers, on both the encode and decode paths.
    #[inline]
    pub fn adjust(&self, bytes: &mut [u8]) {
        if *self == ByteOrder::BigEndian {
            bytes.reverse();
        }
    }
}

/// One-byte shape tag written immediately before every container value.
///
/// Scalars carry no tag; their shape is implied by the caller's static type.
/// The numeric values are stable within one build but are not a cross-release
/// compatibility promise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum TypeTag {
    Vector = 0x01,
    List = 0x02,
    Map = 0x03,
    Tuple = 0x04,
}

/// Initial buffer capacity of a fresh serializer.
pub const DEFAULT_CAPACITY: usize = 32;

/// Maximum encoded string length in bytes.
pub const MAX_STRING_LENGTH: usize = 65_536;

/// Maximum raw byte-range length.
pub const MAX_BYTE_COUNT: usize = 65_536;

/// Maximum element count of an ordered sequence.
pub const MAX_VECTOR_COUNT: usize = 16_777_216;

/// Maximum element count of a linked sequence.
pub const MAX_LIST_COUNT: usize = 16_777_216;

/// Maximum key-value pair count of a map.
pub const MAX_MAP_PAIR_COUNT: usize = 16_777_216;

/// Maximum tuple arity.
pub const MAX_TUPLE_ARITY: usize = 64;
