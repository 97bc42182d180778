//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations.
///
/// The variant is the error kind and the display string the human-readable
/// message; each value describes a single failed operation. The set is
/// closed: any failure raised inside a nested decode that is not already a
/// member is remapped to [`Error::ReadingSubElements`] before it crosses the
/// container-decode boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Decode attempted past the end of the buffer, or not enough bytes
    /// remain for a required field.
    #[error("not enough remaining memory")]
    InsufficientRemainingMemory,
    /// The shape tag (or tuple arity) at the read position does not match the
    /// expected container shape.
    #[error("read type error: {0}")]
    DataType(String),
    /// A decoded vector count exceeds the cap.
    #[error("illegal vector count: {0}")]
    IllegalVectorCount(u32),
    /// A decoded list count exceeds the cap.
    #[error("illegal list count: {0}")]
    IllegalListCount(u32),
    /// A decoded map pair count exceeds the cap.
    #[error("illegal map k-v pair count: {0}")]
    IllegalMapPairCount(u32),
    /// A decoded string length prefix exceeds the cap.
    #[error("illegal string length: {0}")]
    IllegalStringLength(u32),
    /// A decoded raw byte-range length prefix exceeds the cap.
    #[error("illegal byte count: {0}")]
    IllegalByteCount(u32),
    #[error("the vector count exceeds the limit: {0}")]
    VectorCountExceedsLimit(usize),
    #[error("the list count exceeds the limit: {0}")]
    ListCountExceedsLimit(usize),
    #[error("the map k-v pair count exceeds the limit: {0}")]
    MapPairCountExceedsLimit(usize),
    #[error("the tuple arity exceeds the limit: {0}")]
    TupleArityExceedsLimit(usize),
    #[error("the string length exceeds the limit: {0}")]
    StringLengthExceedsLimit(usize),
    #[error("the byte count exceeds the limit: {0}")]
    ByteCountExceedsLimit(usize),
    /// Any other failure encountered while decoding a nested element.
    #[error("error reading sub-elements: {0}")]
    ReadingSubElements(String),
}
