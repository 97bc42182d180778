//! Codec implementation for ordered sequences.
//!
//! Wire form: `Vector` tag, 4-byte element count (byte order applied), then
//! each element recursively. The count check on encode runs after the tag is
//! appended, so a rejected encode leaves the tag byte behind and the instance
//! must be cleared before further appends. Decode is all-or-nothing.

use crate::{
    codec::{Read, Write},
    error::Error,
    serializer::Serializer,
    wire::{TypeTag, MAX_VECTOR_COUNT},
};

impl<T: Write> Write for Vec<T> {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        ser.write_tag(TypeTag::Vector);
        if self.len() > MAX_VECTOR_COUNT {
            return Err(Error::VectorCountExceedsLimit(self.len()));
        }
        ser.write_count(self.len() as u32);
        for item in self {
            item.write(ser)?;
        }
        Ok(())
    }
}

impl<T: Read> Read for Vec<T> {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            ser.expect_tag(TypeTag::Vector)?;
            let count = ser.read_count()?;
            if count as usize > MAX_VECTOR_COUNT {
                return Err(Error::IllegalVectorCount(count));
            }
            let mut vec = Vec::with_capacity(count as usize);
            for _ in 0..count {
                vec.push(T::read(ser)?);
            }
            Ok(vec)
        })
    }
}
