//! The serializer core: byte buffer, cursors, and the transactional decode
//! guard.

use crate::{
    codec::{Read, ReadArgs, Write, WriteArgs},
    error::Error,
    wire::{ByteOrder, TypeTag, DEFAULT_CAPACITY},
};
use bytes::{BufMut, BytesMut};

/// A binary serializer over a single growable byte stream.
///
/// A `Serializer` owns exactly one byte buffer, one read position, and one
/// [`ByteOrder`] setting fixed for its lifetime. The write position is
/// implicit (always the buffer length, monotonically increasing); the read
/// position advances on successful decodes, rewinds to a snapshot when a
/// container decode fails, and can be reset to the start with
/// [`Serializer::reset`].
///
/// The type is move-only: a move transfers the buffer and cursor state
/// atomically and statically invalidates the source. There is deliberately no
/// `Clone`, so two instances can never alias one buffer.
#[derive(Debug)]
pub struct Serializer {
    /// Encoded byte stream. The write cursor is its length.
    buf: BytesMut,
    /// Offset of the next unread byte, `0 <= read_position <= buf.len()`.
    read_position: usize,
    /// Byte order applied to every multi-byte field.
    order: ByteOrder,
}

impl Serializer {
    /// Creates an empty serializer with the default (little-endian) byte
    /// order and a small initial capacity.
    pub fn new() -> Self {
        Self::with_order(ByteOrder::default())
    }

    /// Creates an empty serializer with the given byte order.
    pub fn with_order(order: ByteOrder) -> Self {
        Self {
            buf: BytesMut::with_capacity(DEFAULT_CAPACITY),
            read_position: 0,
            order,
        }
    }

    /// Returns the byte order this instance writes and reads with.
    #[inline]
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Returns the number of bytes in the buffer.
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.read_position
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.read_position
    }

    /// Borrows the full encoded stream, including already-read bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Empties the buffer and resets the read position to the start.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.read_position = 0;
    }

    /// Resets only the read position, leaving the buffer intact so the stream
    /// can be decoded again from the start.
    pub fn reset(&mut self) {
        self.read_position = 0;
    }

    /// Appends raw bytes to the buffer, e.g. received from a transport.
    ///
    /// The bytes are not framed or prefixed; pair with [`Serializer::as_bytes`]
    /// on the producing side.
    pub fn load(&mut self, bytes: &[u8]) {
        self.append(bytes);
    }

    /// Encodes one value, returning `&mut Self` so calls chain.
    ///
    /// A failed container encode leaves its shape tag already appended; the
    /// instance must be [`Serializer::clear`]ed before further appends.
    pub fn input<T: Write + ?Sized>(&mut self, value: &T) -> Result<&mut Self, Error> {
        value.write(self)?;
        Ok(self)
    }

    /// Decodes one value at the read cursor.
    pub fn output<T: Read>(&mut self) -> Result<T, Error> {
        T::read(self)
    }

    /// Encodes a heterogeneous group of values in order, with no framing
    /// around the group.
    pub fn input_args<A: WriteArgs>(&mut self, args: &A) -> Result<&mut Self, Error> {
        args.write_args(self)?;
        Ok(self)
    }

    /// Decodes a heterogeneous group of values in the order they were
    /// written.
    pub fn output_args<A: ReadArgs>(&mut self) -> Result<A, Error> {
        A::read_args(self)
    }

    /// Runs `op`, restoring the read position to its pre-call value if `op`
    /// fails.
    ///
    /// This is the rollback discipline every container decode relies on: a
    /// failed decode leaves the stream exactly as it was, so the caller may
    /// [`Serializer::load`] more bytes and replay, or hand the same position
    /// to a different decode. Custom [`Read`] implementations for composite
    /// types should wrap their bodies in it.
    pub fn transaction<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let snapshot = self.read_position;
        let result = op(self);
        if result.is_err() {
            self.read_position = snapshot;
        }
        result
    }

    /// Ensures capacity for `additional` more bytes, at least doubling so
    /// repeated appends stay amortized O(1).
    fn grow(&mut self, additional: usize) {
        let spare = self.buf.capacity() - self.buf.len();
        if spare < additional {
            self.buf.reserve(additional.max(self.buf.capacity()));
        }
    }

    /// Appends bytes unconditionally, growing first if needed.
    pub(crate) fn append(&mut self, bytes: &[u8]) {
        self.grow(bytes.len());
        self.buf.put_slice(bytes);
    }

    /// Writes one fixed-width field, byte-reversed per the instance order.
    pub(crate) fn write_scalar<const N: usize>(&mut self, mut bytes: [u8; N]) {
        self.order.adjust(&mut bytes);
        self.append(&bytes);
    }

    /// Reads one fixed-width field, refusing without advancing if fewer than
    /// `N` bytes remain.
    pub(crate) fn read_scalar<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        if self.remaining() < N {
            return Err(Error::InsufficientRemainingMemory);
        }
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buf[self.read_position..self.read_position + N]);
        self.order.adjust(&mut bytes);
        self.read_position += N;
        Ok(bytes)
    }

    /// Borrows `len` raw bytes at the read cursor and advances past them,
    /// refusing without advancing if they are not available.
    pub(crate) fn read_raw(&mut self, len: usize) -> Result<&[u8], Error> {
        if self.remaining() < len {
            return Err(Error::InsufficientRemainingMemory);
        }
        let start = self.read_position;
        self.read_position += len;
        Ok(&self.buf[start..start + len])
    }

    /// Appends a container shape tag.
    pub(crate) fn write_tag(&mut self, tag: TypeTag) {
        self.append(&[tag as u8]);
    }

    /// Validates the shape tag at the read cursor and consumes it.
    ///
    /// Refuses if the read position is not strictly before the buffer end; a
    /// tag mismatch errs without advancing.
    pub(crate) fn expect_tag(&mut self, expected: TypeTag) -> Result<(), Error> {
        if self.read_position >= self.buf.len() {
            return Err(Error::InsufficientRemainingMemory);
        }
        let found = self.buf[self.read_position];
        if found != expected as u8 {
            return Err(Error::DataType(format!(
                "expected {expected:?} tag, found byte {found:#04x}"
            )));
        }
        self.read_position += 1;
        Ok(())
    }

    /// Appends a 4-byte element count, byte order applied.
    pub(crate) fn write_count(&mut self, count: u32) {
        self.write_scalar(count.to_le_bytes());
    }

    /// Reads a 4-byte element count, byte order applied.
    pub(crate) fn read_count(&mut self) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.read_scalar()?))
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}
