//! End-to-end stream behavior: framing arithmetic, cap edges, rollback
//! guarantees, and byte-order layouts over the public API.

use rand::{distributions::Alphanumeric, Rng};
use std::collections::BTreeMap;
use tagwire::{ByteOrder, Error, Serializer, TypeTag};

#[test]
fn vector_of_three_ints_is_seventeen_bytes() {
    let mut ser = Serializer::new();
    ser.input(&vec![1i32, 2, 3]).unwrap();

    // tag + count + 3 * 4 element bytes
    assert_eq!(ser.byte_count(), 17);
    assert_eq!(ser.output::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
    assert_eq!(ser.remaining(), 0);
}

#[test]
fn count_cap_edges() {
    // The cap itself encodes and decodes.
    let mut ser = Serializer::new();
    let at_cap = vec![0u8; 16_777_216];
    ser.input(&at_cap).unwrap();
    assert_eq!(ser.byte_count(), 1 + 4 + at_cap.len());
    assert_eq!(ser.output::<Vec<u8>>().unwrap().len(), at_cap.len());

    // One element over fails, leaving exactly the tag byte behind.
    ser.clear();
    let over_cap = vec![0u8; 16_777_217];
    assert!(matches!(
        ser.input(&over_cap),
        Err(Error::VectorCountExceedsLimit(16_777_217))
    ));
    assert_eq!(ser.byte_count(), 1);

    // The instance is only usable again after a clear.
    ser.clear();
    ser.input(&vec![5u8]).unwrap();
    assert_eq!(ser.output::<Vec<u8>>().unwrap(), vec![5]);
}

#[test]
fn tag_mismatch_leaves_read_position() {
    let mut map = BTreeMap::new();
    map.insert(1u32, 2u32);

    let mut ser = Serializer::new();
    ser.input(&"padding".to_string()).unwrap();
    ser.input(&map).unwrap();
    let _: String = ser.output().unwrap();
    let before = ser.position();

    assert!(matches!(ser.output::<Vec<u32>>(), Err(Error::DataType(_))));
    assert_eq!(ser.position(), before);

    // The untouched stream still decodes as what it actually holds.
    assert_eq!(ser.output::<BTreeMap<u32, u32>>().unwrap(), map);
}

#[test]
fn truncated_decode_rolls_back() {
    let mut ser = Serializer::new();
    ser.input(&vec![1i32, 2, 3]).unwrap();
    let stream = ser.as_bytes();

    let mut truncated = Serializer::new();
    truncated.load(&stream[..stream.len() - 2]);
    assert!(matches!(
        truncated.output::<Vec<i32>>(),
        Err(Error::InsufficientRemainingMemory)
    ));
    assert_eq!(truncated.position(), 0);

    // Retry succeeds from the unchanged position once the rest arrives.
    truncated.load(&stream[stream.len() - 2..]);
    assert_eq!(truncated.output::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
}

#[test]
fn count_byte_layout_per_order() {
    let mut big = Serializer::with_order(ByteOrder::BigEndian);
    big.input(&300u32).unwrap();
    assert_eq!(big.as_bytes(), &[0x00, 0x00, 0x01, 0x2C]);
    assert_eq!(big.output::<u32>().unwrap(), 300);

    let mut little = Serializer::with_order(ByteOrder::LittleEndian);
    little.input(&300u32).unwrap();
    assert_eq!(little.as_bytes(), &[0x2C, 0x01, 0x00, 0x00]);
    assert_eq!(little.output::<u32>().unwrap(), 300);

    // The same adjustment governs container counts.
    let mut ser = Serializer::with_order(ByteOrder::BigEndian);
    ser.input(&vec![0u8; 300]).unwrap();
    assert_eq!(ser.as_bytes()[0], TypeTag::Vector as u8);
    assert_eq!(&ser.as_bytes()[1..5], &[0x00, 0x00, 0x01, 0x2C]);
}

#[test]
fn reset_decodes_the_same_stream_again() {
    let mut ser = Serializer::new();
    ser.input(&vec!["x".to_string(), "yz".to_string()]).unwrap();

    let first: Vec<String> = ser.output().unwrap();
    assert_eq!(ser.remaining(), 0);
    ser.reset();
    let second: Vec<String> = ser.output().unwrap();
    assert_eq!(first, second);
}

#[test]
fn map_round_trip_is_insertion_order_independent() {
    let mut forward = BTreeMap::new();
    forward.insert("a".to_string(), 1u32);
    forward.insert("b".to_string(), 2u32);
    let mut backward = BTreeMap::new();
    backward.insert("b".to_string(), 2u32);
    backward.insert("a".to_string(), 1u32);

    let mut ser = Serializer::new();
    ser.input(&forward).unwrap();
    ser.input(&backward).unwrap();
    let first: BTreeMap<String, u32> = ser.output().unwrap();
    let second: BTreeMap<String, u32> = ser.output().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, forward);
}

#[test]
fn mixed_stream_round_trip() {
    let mut ser = Serializer::with_order(ByteOrder::BigEndian);
    ser.input(&true)
        .unwrap()
        .input(&-7i16)
        .unwrap()
        .input("text")
        .unwrap()
        .input(&(1u8, 2u64))
        .unwrap();

    assert!(ser.output::<bool>().unwrap());
    assert_eq!(ser.output::<i16>().unwrap(), -7);
    assert_eq!(ser.output::<String>().unwrap(), "text");
    assert_eq!(ser.output::<(u8, u64)>().unwrap(), (1, 2));
    assert_eq!(ser.remaining(), 0);
}

#[test]
fn args_round_trip() {
    let mut ser = Serializer::new();
    ser.input_args(&(1u8, 2u16, "three".to_string())).unwrap();

    // No group framing: byte count is the sum of the members' encodings.
    assert_eq!(ser.byte_count(), 1 + 2 + (4 + 5));
    let (a, b, c): (u8, u16, String) = ser.output_args().unwrap();
    assert_eq!((a, b, c.as_str()), (1, 2, "three"));
}

#[test]
fn randomized_round_trips() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let order = if rng.gen() {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        };
        let mut ser = Serializer::with_order(order);

        let ints: Vec<i64> = (0..rng.gen_range(0..64)).map(|_| rng.gen()).collect();
        let floats: Vec<f64> = (0..rng.gen_range(0..16)).map(|_| rng.gen()).collect();
        let text_len = rng.gen_range(0..128);
        let text: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(text_len)
            .map(char::from)
            .collect();

        ser.input(&ints).unwrap();
        ser.input(&floats).unwrap();
        ser.input(text.as_str()).unwrap();

        assert_eq!(ser.output::<Vec<i64>>().unwrap(), ints);
        assert_eq!(ser.output::<Vec<f64>>().unwrap(), floats);
        assert_eq!(ser.output::<String>().unwrap(), text);
        assert_eq!(ser.remaining(), 0);
    }
}
