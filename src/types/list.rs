//! Codec implementations for linked sequences.
//!
//! `LinkedList` and `VecDeque` share the `List` shape tag and are wire
//! compatible; elements append in read order on decode. The encode/decode
//! skeleton matches the ordered-sequence codec, with the list cap and error
//! kinds.

use crate::{
    codec::{Read, Write},
    error::Error,
    serializer::Serializer,
    wire::{TypeTag, MAX_LIST_COUNT},
};
use std::collections::{LinkedList, VecDeque};

fn write_list<'a, T: Write + 'a>(
    items: impl ExactSizeIterator<Item = &'a T>,
    ser: &mut Serializer,
) -> Result<(), Error> {
    ser.write_tag(TypeTag::List);
    let count = items.len();
    if count > MAX_LIST_COUNT {
        return Err(Error::ListCountExceedsLimit(count));
    }
    ser.write_count(count as u32);
    for item in items {
        item.write(ser)?;
    }
    Ok(())
}

fn read_count_checked(ser: &mut Serializer) -> Result<u32, Error> {
    ser.expect_tag(TypeTag::List)?;
    let count = ser.read_count()?;
    if count as usize > MAX_LIST_COUNT {
        return Err(Error::IllegalListCount(count));
    }
    Ok(count)
}

impl<T: Write> Write for LinkedList<T> {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        write_list(self.iter(), ser)
    }
}

impl<T: Read> Read for LinkedList<T> {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            let count = read_count_checked(ser)?;
            let mut list = LinkedList::new();
            for _ in 0..count {
                list.push_back(T::read(ser)?);
            }
            Ok(list)
        })
    }
}

impl<T: Write> Write for VecDeque<T> {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        write_list(self.iter(), ser)
    }
}

impl<T: Read> Read for VecDeque<T> {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            let count = read_count_checked(ser)?;
            let mut deque = VecDeque::with_capacity(count as usize);
            for _ in 0..count {
                deque.push_back(T::read(ser)?);
            }
            Ok(deque)
        })
    }
}
