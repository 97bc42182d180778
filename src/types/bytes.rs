//! Codec implementations for strings and raw byte ranges.
//!
//! Both are length-prefixed: a 4-byte count (byte order applied), then the
//! raw bytes, with no shape tag. Lengths are capped at 65,536 bytes on both
//! the encode and decode side. A slice carries its length in the type, so a
//! length-less byte pointer cannot reach this API.

use crate::{
    codec::{Read, Write},
    error::Error,
    serializer::Serializer,
    wire::{MAX_BYTE_COUNT, MAX_STRING_LENGTH},
};
use bytes::Bytes;

impl Write for str {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        if self.len() > MAX_STRING_LENGTH {
            return Err(Error::StringLengthExceedsLimit(self.len()));
        }
        ser.write_count(self.len() as u32);
        ser.append(self.as_bytes());
        Ok(())
    }
}

impl Write for String {
    #[inline]
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        self.as_str().write(ser)
    }
}

impl Read for String {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            let len = ser.read_count()?;
            if len as usize > MAX_STRING_LENGTH {
                return Err(Error::IllegalStringLength(len));
            }
            let raw = ser.read_raw(len as usize)?.to_vec();
            String::from_utf8(raw).map_err(|err| Error::ReadingSubElements(err.to_string()))
        })
    }
}

impl Write for [u8] {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        if self.len() > MAX_BYTE_COUNT {
            return Err(Error::ByteCountExceedsLimit(self.len()));
        }
        ser.write_count(self.len() as u32);
        ser.append(self);
        Ok(())
    }
}

impl Write for Bytes {
    #[inline]
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        self.as_ref().write(ser)
    }
}

impl Read for Bytes {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            let len = ser.read_count()?;
            if len as usize > MAX_BYTE_COUNT {
                return Err(Error::IllegalByteCount(len));
            }
            Ok(Bytes::copy_from_slice(ser.read_raw(len as usize)?))
        })
    }
}
