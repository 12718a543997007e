//! # vellum
//!
//! vellum is a compact binary serialization core with two wire formats:
//!
//! * a **structural** format for values whose shape both sides already know (records,
//!   sequences, options, primitives), with no tags or names on the wire and
//!   [varint](varint) integers, and
//! * a **dynamic** format for self-describing [`Value`]s, where every node carries a
//!   one-byte tag and integers are fixed-width little-endian.
//!
//! # Usage
//!
//! Records implement [`Ser`](structural::Ser) and [`De`](structural::De) through
//! `#[derive(Wire)]`, and are then ready to be encoded.
//!
//! For example:
//!
//! ```
//! use vellum::prelude::*;
//!
//! #[derive(Wire, Clone, Debug, PartialEq)]
//! /// A point, with an optional label.
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: Option<String>,
//! }
//!
//! let p = Point { x: 1, y: -1, label: Some("origin-ish".to_string()) };
//!
//! // encode
//! let encoded = encode_full(&p).unwrap();
//!
//! // and then immediately decode
//! let decoded: Point = decode_full(&encoded).unwrap();
//!
//! assert_eq!(p, decoded);
//! ```
//!
//! When nothing is known about the data ahead of time, build a [`Value`] instead:
//!
//! ```
//! use vellum::prelude::*;
//!
//! let v = Value::from(vec![Value::from("a"), Value::from(1), Value::None]);
//!
//! let encoded = encode_value_full(&v).unwrap();
//! assert_eq!(decode_value_full(&encoded).unwrap(), v);
//! ```
//!
//! # Decoding untrusted input
//!
//! Declared counts are checked against [`Limits`](limits::Limits) before anything is
//! allocated. The defaults allow 10 000 elements per sequence, list or dictionary; pass
//! other limits through [`Reader::with_limits`](source::Reader::with_limits).
//!
//! # Specification
//!
//! This section describes both binary formats. Neither has a magic number, version or
//! checksum.
//!
//! ## Varints
//!
//! Seven payload bits per byte, least significant group first, with the high bit set on
//! every byte except the last. Signed integers are widened to their 64-bit two's
//! complement pattern first, so every negative number takes ten bytes.
//!
//! | Value        | Bytes                 |
//! | ---          | ---                   |
//! | `0`          | `00`                  |
//! | `300`        | `ac 02`               |
//! | `0xffffffff` | `ff ff ff ff 0f`      |
//! | `-1`         | `ff ff ff ff ff ff ff ff ff 01` |
//!
//! ## Structural values
//!
//! | Kind          | Bytes                                          |
//! | ---           | ---                                            |
//! | `bool`        | `01` or `00`                                   |
//! | `u8`, `i8`    | the raw byte                                   |
//! | wider ints    | varint                                         |
//! | `f32`, `f64`  | IEEE 754 bits, little-endian                   |
//! | strings       | varint byte length, then UTF-8 bytes           |
//! | `Vec<T>`      | varint count, then the elements                |
//! | `[T; N]`      | the elements                                   |
//! | `Option<T>`   | `00`, or `01` followed by the value            |
//! | records       | the fields in declaration order                |
//! | enums         | the discriminant, as its `#[repr]` integer     |
//!
//! ## Dynamic values
//!
//! See the [dynamic module](dynamic) for the tag table.

#![warn(
//    missing_docs,
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

// lets the paths generated by `#[derive(Wire)]` resolve inside this crate too; only
// the test build derives anything here
#[allow(unused_extern_crates)]
extern crate self as vellum;

/// Derives [`Ser`](structural::Ser) and [`De`](structural::De) for a struct.
pub use vellum_derive::Wire;

#[macro_use]
mod util;

pub mod dynamic;
pub mod errors;
#[cfg(feature = "json")] pub mod json;
pub mod limits;
pub mod prelude;
pub mod sink;
pub mod source;
pub mod structural;
pub mod value;
pub mod varint;
pub mod vecmap;

pub use value::{Dictionary, Value, ValueKind};
