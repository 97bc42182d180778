//! Codec implementations for primitive scalar types.
//!
//! Scalars are written at their fixed native width with no tag and no length
//! prefix; multi-byte values go through the instance byte order. `bool` is a
//! single byte, 1 for true and 0 for false, and any nonzero byte decodes as
//! true.

use crate::{
    codec::{Read, Write},
    error::Error,
    serializer::Serializer,
};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty) => {
        impl Write for $type {
            #[inline]
            fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
                ser.write_scalar(self.to_le_bytes());
                Ok(())
            }
        }

        impl Read for $type {
            #[inline]
            fn read(ser: &mut Serializer) -> Result<Self, Error> {
                Ok(<$type>::from_le_bytes(ser.read_scalar()?))
            }
        }
    };
}

impl_numeric!(u8);
impl_numeric!(u16);
impl_numeric!(u32);
impl_numeric!(u64);
impl_numeric!(i8);
impl_numeric!(i16);
impl_numeric!(i32);
impl_numeric!(i64);
impl_numeric!(f32);
impl_numeric!(f64);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        ser.write_scalar([*self as u8]);
        Ok(())
    }
}

impl Read for bool {
    #[inline]
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        let [byte] = ser.read_scalar()?;
        Ok(byte != 0)
    }
}
