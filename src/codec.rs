//! Core codec traits

use crate::{error::Error, serializer::Serializer};

/// Trait for values that can be written (encoded) to a [`Serializer`].
///
/// Unlike a plain buffer append, encoding can fail: container counts and
/// string/byte-range lengths are capped, and a container that fails its count
/// check has already appended its shape tag (see the container modules). The
/// methods therefore return `Result`.
pub trait Write {
    /// Appends the wire form of this value to the serializer's buffer.
    fn write(&self, ser: &mut Serializer) -> Result<(), Error>;
}

/// Trait for values that can be read (decoded) from a [`Serializer`].
///
/// Decoding constructs the value from the bytes at the read cursor; the
/// element types of a container therefore only need this capability, checked
/// at compile time.
pub trait Read: Sized {
    /// Reads a value from the serializer's read cursor, consuming the
    /// necessary bytes on success.
    ///
    /// Container implementations must leave the read position unchanged on
    /// failure; wrap the body in [`Serializer::transaction`].
    fn read(ser: &mut Serializer) -> Result<Self, Error>;
}

/// Trait for types that can be encoded and decoded.
pub trait Codec: Write + Read {}

// Automatically implement `Codec` for types that implement `Write` and `Read`.
impl<T: Write + Read> Codec for T {}

/// A heterogeneous group of values written in call order.
///
/// Unlike the tuple codec, an argument group carries no shape tag and no
/// count: the encoded form is exactly the concatenation of the members'
/// individual encodings. Implemented for tuples up to arity 12.
pub trait WriteArgs {
    /// Writes each member in order.
    fn write_args(&self, ser: &mut Serializer) -> Result<(), Error>;
}

/// The decode counterpart of [`WriteArgs`].
///
/// Members are read back in the same order they were written. The group as a
/// whole is not transactional; a failure part-way leaves the values already
/// read consumed.
pub trait ReadArgs: Sized {
    /// Reads each member in order.
    fn read_args(ser: &mut Serializer) -> Result<Self, Error>;
}

impl WriteArgs for () {
    #[inline]
    fn write_args(&self, _: &mut Serializer) -> Result<(), Error> {
        Ok(())
    }
}

impl ReadArgs for () {
    #[inline]
    fn read_args(_: &mut Serializer) -> Result<Self, Error> {
        Ok(())
    }
}
