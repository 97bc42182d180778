//! Codec implementations for maps.
//!
//! Wire form: `Map` tag, 4-byte pair count, then key and value alternating,
//! in the source map's native iteration order (sorted for `BTreeMap`,
//! unspecified for `HashMap`). Decode inserts or overwrites by key, so any
//! pair order on the wire reconstructs the same map.

use crate::{
    codec::{Read, Write},
    error::Error,
    serializer::Serializer,
    wire::{TypeTag, MAX_MAP_PAIR_COUNT},
};
use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

fn write_pairs<'a, K: Write + 'a, V: Write + 'a>(
    pairs: impl ExactSizeIterator<Item = (&'a K, &'a V)>,
    ser: &mut Serializer,
) -> Result<(), Error> {
    ser.write_tag(TypeTag::Map);
    let count = pairs.len();
    if count > MAX_MAP_PAIR_COUNT {
        return Err(Error::MapPairCountExceedsLimit(count));
    }
    ser.write_count(count as u32);
    for (key, value) in pairs {
        key.write(ser)?;
        value.write(ser)?;
    }
    Ok(())
}

fn read_count_checked(ser: &mut Serializer) -> Result<u32, Error> {
    ser.expect_tag(TypeTag::Map)?;
    let count = ser.read_count()?;
    if count as usize > MAX_MAP_PAIR_COUNT {
        return Err(Error::IllegalMapPairCount(count));
    }
    Ok(count)
}

impl<K: Write, V: Write> Write for BTreeMap<K, V> {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        write_pairs(self.iter(), ser)
    }
}

impl<K: Read + Ord, V: Read> Read for BTreeMap<K, V> {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            let count = read_count_checked(ser)?;
            let mut map = BTreeMap::new();
            for _ in 0..count {
                let key = K::read(ser)?;
                let value = V::read(ser)?;
                map.insert(key, value);
            }
            Ok(map)
        })
    }
}

impl<K: Write, V: Write> Write for HashMap<K, V> {
    fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
        write_pairs(self.iter(), ser)
    }
}

impl<K: Read + Eq + Hash, V: Read> Read for HashMap<K, V> {
    fn read(ser: &mut Serializer) -> Result<Self, Error> {
        ser.transaction(|ser| {
            let count = read_count_checked(ser)?;
            let mut map = HashMap::with_capacity(count as usize);
            for _ in 0..count {
                let key = K::read(ser)?;
                let value = V::read(ser)?;
                map.insert(key, value);
            }
            Ok(map)
        })
    }
}
