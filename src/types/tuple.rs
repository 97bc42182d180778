//! Codec implementations for fixed-arity tuples and argument groups.
//!
//! A tuple is a container on the wire: `Tuple` tag, the arity as the 4-byte
//! count, then each element in ascending position order. Decode validates the
//! tag and that the wire arity equals the target tuple's arity before reading
//! any element.
//!
//! Argument groups ([`WriteArgs`]/[`ReadArgs`]) reuse the same tuple type
//! parameters but carry no tag and no count: each member is encoded exactly
//! as it would be standalone, in call order.

use crate::{
    codec::{Read, ReadArgs, Write, WriteArgs},
    error::Error,
    serializer::Serializer,
    wire::{TypeTag, MAX_TUPLE_ARITY},
};
use paste::paste;

macro_rules! impl_codec_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> Write for ( $( [<T $index>], )* ) {
                fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
                    ser.write_tag(TypeTag::Tuple);
                    let arity = [$($index),*].len();
                    if arity > MAX_TUPLE_ARITY {
                        return Err(Error::TupleArityExceedsLimit(arity));
                    }
                    ser.write_count(arity as u32);
                    $( self.$index.write(ser)?; )*
                    Ok(())
                }
            }

            impl<$( [<T $index>]: Read ),*> Read for ( $( [<T $index>], )* ) {
                fn read(ser: &mut Serializer) -> Result<Self, Error> {
                    ser.transaction(|ser| {
                        ser.expect_tag(TypeTag::Tuple)?;
                        let arity = [$($index),*].len() as u32;
                        let count = ser.read_count()?;
                        if count != arity {
                            return Err(Error::DataType(format!(
                                "expected tuple arity {arity}, found {count}"
                            )));
                        }
                        Ok(( $( [<T $index>]::read(ser)?, )* ))
                    })
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 12
impl_codec_for_tuple!(0);
impl_codec_for_tuple!(0, 1);
impl_codec_for_tuple!(0, 1, 2);
impl_codec_for_tuple!(0, 1, 2, 3);
impl_codec_for_tuple!(0, 1, 2, 3, 4);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_codec_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

macro_rules! impl_args_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Write ),*> WriteArgs for ( $( [<T $index>], )* ) {
                fn write_args(&self, ser: &mut Serializer) -> Result<(), Error> {
                    $( self.$index.write(ser)?; )*
                    Ok(())
                }
            }

            impl<$( [<T $index>]: Read ),*> ReadArgs for ( $( [<T $index>], )* ) {
                fn read_args(ser: &mut Serializer) -> Result<Self, Error> {
                    Ok(( $( [<T $index>]::read(ser)?, )* ))
                }
            }
        }
    };
}

impl_args_for_tuple!(0);
impl_args_for_tuple!(0, 1);
impl_args_for_tuple!(0, 1, 2);
impl_args_for_tuple!(0, 1, 2, 3);
impl_args_for_tuple!(0, 1, 2, 3, 4);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_args_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
