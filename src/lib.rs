//! Tagged binary serialization over a growable in-memory byte stream.
//!
//! # Overview
//!
//! A [`Serializer`] owns a contiguous, growable byte buffer together with one
//! append-only write position and one independent, rewindable read position.
//! Values are encoded by appending their wire form to the buffer and decoded
//! by consuming bytes at the read cursor:
//!
//! - Scalars (`bool`, fixed-width integers, floats) are written at their fixed
//!   width with no tag, in the byte order configured per instance.
//! - Strings and raw byte ranges carry a 4-byte length prefix followed by the
//!   raw bytes, bounded at 65,536 bytes.
//! - Containers (`Vec`, `LinkedList`/`VecDeque`, `BTreeMap`/`HashMap`, and
//!   tuples) carry a one-byte shape tag and a 4-byte element count, then each
//!   element recursively.
//!
//! Container decode is transactional: on any failure the read position is
//! restored to its pre-call value, so the caller may buffer more bytes with
//! [`Serializer::load`] and replay the same decode. Container *encode* is not:
//! a count-limit failure leaves the shape tag already appended, and the
//! instance must be [`Serializer::clear`]ed before further use.
//!
//! # Supported Types
//!
//! Natively supports:
//! - Primitives: `bool`, `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`,
//!   `f32`, `f64`
//! - Text and raw bytes: `str`/`String`, `[u8]`/`Bytes`
//! - Containers: `Vec<T>`, `LinkedList<T>`, `VecDeque<T>`, `BTreeMap<K, V>`,
//!   `HashMap<K, V>`, and tuples up to arity 12, nested arbitrarily
//!
//! User-defined types participate by implementing the [`Write`] and [`Read`]
//! traits; composite implementations should wrap their read path in
//! [`Serializer::transaction`] to keep the all-or-nothing decode discipline.
//!
//! # Example
//!
//! ```
//! use tagwire::Serializer;
//!
//! let mut ser = Serializer::new();
//! ser.input(&true).unwrap();
//! ser.input(&300u32).unwrap();
//! ser.input("hello").unwrap();
//! ser.input(&vec![1i32, 2, 3]).unwrap();
//!
//! // Values come back in write order.
//! assert!(ser.output::<bool>().unwrap());
//! assert_eq!(ser.output::<u32>().unwrap(), 300);
//! assert_eq!(ser.output::<String>().unwrap(), "hello");
//! assert_eq!(ser.output::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
//! assert_eq!(ser.remaining(), 0);
//! ```
//!
//! # Example (Custom Type)
//!
//! ```
//! use tagwire::{Error, Read, Serializer, Write};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Write for Point {
//!     fn write(&self, ser: &mut Serializer) -> Result<(), Error> {
//!         self.x.write(ser)?;
//!         self.y.write(ser)
//!     }
//! }
//!
//! impl Read for Point {
//!     fn read(ser: &mut Serializer) -> Result<Self, Error> {
//!         ser.transaction(|ser| {
//!             let x = i32::read(ser)?;
//!             let y = i32::read(ser)?;
//!             Ok(Point { x, y })
//!         })
//!     }
//! }
//!
//! let mut ser = Serializer::new();
//! ser.input(&Point { x: 1, y: -2 }).unwrap();
//! assert_eq!(ser.output::<Point>().unwrap(), Point { x: 1, y: -2 });
//! ```
//!
//! # Example (Byte Order)
//!
//! ```
//! use tagwire::{ByteOrder, Serializer};
//!
//! let mut ser = Serializer::with_order(ByteOrder::BigEndian);
//! ser.input(&300u32).unwrap();
//! assert_eq!(ser.as_bytes(), &[0x00, 0x00, 0x01, 0x2C]);
//! assert_eq!(ser.output::<u32>().unwrap(), 300);
//! ```

pub mod codec;
pub mod error;
pub mod serializer;
pub mod types;
pub mod wire;

// Re-export main types and traits
pub use codec::{Codec, Read, ReadArgs, Write, WriteArgs};
pub use error::Error;
pub use serializer::Serializer;
pub use wire::{ByteOrder, TypeTag};
