//! # Structural codec
//!
//! Encode and decode functions for values whose shape both sides already know.
//!
//! The wire form carries no tags, names or version: a boolean is one byte, an 8-bit
//! integer is one raw byte, wider integers are [varints](crate::varint), strings and
//! sequences are prefixed with a varint length, and an `Option` is a presence byte
//! followed by the value. Records are their fields, in declaration order.
//!
//! # Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! // a record that will store some data
//! #[derive(Wire, PartialEq, Debug)]
//! struct SomeData {
//!     x: i8,
//!     y: String,
//!     z: Option<u32>,
//! }
//!
//! let some_data = SomeData { x: 1, y: "hi".to_string(), z: None };
//!
//! // encode it
//! let enc = encode_full(&some_data).unwrap();
//! assert_eq!(enc, vec![1, 2, b'h', b'i', 0]);
//!
//! // encode it a different way, into a buffer we own
//! let out = &mut Vec::new();
//! encode(&some_data, out).unwrap();
//! assert_eq!(*out, enc);
//!
//! // and back
//! let dec: SomeData = decode_full(&enc).unwrap();
//! assert_eq!(dec, some_data);
//! ```

use crate::{
    errors::{Error, ErrorKind},
    sink::Serializer,
    source::{Deserializer, Reader},
    varint,
};
use tracing::trace;

pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;

/// Presence byte of an absent `Option`.
pub(crate) const ABSENT: u8 = 0;
/// Presence byte of a present `Option`.
pub(crate) const PRESENT: u8 = 1;

/// Encodes `t`, writing the output to `out`.
///
/// # Arguments
///
/// * `t: &T` - A reference to the value to be encoded.
/// * `out: &mut S` - The [`Serializer`] the output is written to.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let out = &mut Vec::new();
/// encode(&vec![1i8, 2, 3], out).unwrap();
///
/// assert_eq!(*out, vec![3, 1, 2, 3]);
/// ```
pub fn encode<T: Ser + ?Sized, S: Serializer>(t: &T, out: &mut S) -> Result<(), Error> {
    t.ser(out)
}

/// Encodes `t` into a fresh vector of bytes.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// assert_eq!(encode_full("hello").unwrap(), b"\x05hello".to_vec());
/// ```
pub fn encode_full<T: Ser + ?Sized>(t: &T) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    t.ser(&mut out)?;
    trace!(len = out.len(), "encoded structural value");
    Ok(out)
}

/// Decodes a `T` from `d`.
///
/// Bytes after the value are left in `d`; check [`Deserializer::remaining`] when the
/// whole input must be a single value.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let mut r = Reader::new(&[172, 2][..]);
/// let n: u16 = decode(&mut r).unwrap();
///
/// assert_eq!(n, 300);
/// ```
pub fn decode<T: De, D: Deserializer>(d: &mut D) -> Result<T, Error> { T::de(d) }

/// Decodes from `d` into storage the caller owns.
///
/// On failure `dest` may be partially populated.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let mut dest: Option<String> = None;
/// decode_into(&mut Reader::new(&[1, 2, b'o', b'k'][..]), &mut dest).unwrap();
///
/// assert_eq!(dest.as_deref(), Some("ok"));
/// ```
pub fn decode_into<T: De, D: Deserializer>(d: &mut D, dest: &mut T) -> Result<(), Error> {
    dest.de_in_place(d)
}

/// Decodes a `T` from the front of `bytes` with the default
/// [`Limits`](crate::limits::Limits).
///
/// Trailing bytes are ignored; see [`decode_exact`] for the strict variant.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let b: bool = decode_full(&[1, 0xaa]).unwrap();
/// assert!(b);
/// ```
pub fn decode_full<T: De>(bytes: &[u8]) -> Result<T, Error> {
    let mut r = Reader::new(bytes);
    let t = T::de(&mut r)?;
    trace!(
        len = bytes.len(),
        remaining = r.remaining(),
        "decoded structural value"
    );
    Ok(t)
}

/// Decodes a `T` that must occupy all of `bytes`.
///
/// # Errors
///
/// Besides any decode error, fails with [`ErrorKind::TrailingBytes`] if input remains.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// assert!(decode_exact::<bool>(&[1]).unwrap());
/// assert!(decode_exact::<bool>(&[1, 0]).is_err());
/// ```
pub fn decode_exact<T: De>(bytes: &[u8]) -> Result<T, Error> {
    let mut r = Reader::new(bytes);
    let t = T::de(&mut r)?;
    match r.remaining() {
        0 => Ok(t),
        n => Err(Error::new(ErrorKind::TrailingBytes(n))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Segment, limits::Limits, sink::SliceWriter};
    use std::{fmt::Debug, rc::Rc, sync::Arc};
    use vellum_derive::Wire;

    fn check<T: Ser + De + PartialEq + Debug>(t: T, expected: &[u8]) {
        let out = encode_full(&t).unwrap();
        assert_eq!(out, expected, "encoding {:?}", t);

        let mut r = Reader::new(expected);
        let dec: T = decode(&mut r).unwrap();
        assert_eq!(dec, t);
        assert_eq!(r.remaining(), 0, "buffer not fully consumed for {:?}", t);
    }

    fn err_kind<T: De + Debug>(bytes: &[u8]) -> ErrorKind {
        decode_full::<T>(bytes).unwrap_err().into_kind()
    }

    #[test]
    fn booleans() {
        check(false, &[0]);
        check(true, &[1]);
        assert!(decode_full::<bool>(&[0x7f]).unwrap());
    }

    #[test]
    fn eight_bit() {
        check(127i8, &[127]);
        check(-128i8, &[0x80]);
        check(127u8, &[127]);
        check(128u8, &[0x80]);
        check(255u8, &[0xff]);
    }

    #[test]
    fn wide_integers() {
        check(0i64, &[0]);
        check(1i64, &[1]);
        check(-1i64, &[255, 255, 255, 255, 255, 255, 255, 255, 255, 1]);
        check(-2i64, &[254, 255, 255, 255, 255, 255, 255, 255, 255, 1]);
        check(300i32, &[172, 2]);
        check(0x7fff_ffffi32, &[255, 255, 255, 255, 7]);
        check(0x7fff_ffff_ffff_ffffi64, &[
            255, 255, 255, 255, 255, 255, 255, 255, 127,
        ]);
        check(u64::max_value(), &[
            255, 255, 255, 255, 255, 255, 255, 255, 255, 1,
        ]);
        check(65535u16, &[255, 255, 3]);
        check(300usize, &[172, 2]);
    }

    #[test]
    fn narrow_on_decode() {
        assert_eq!(decode_full::<u32>(&[128, 128, 4]).unwrap(), 65536);
        assert_eq!(decode_full::<i32>(&[128, 128, 4]).unwrap(), 65536);

        // sign-extended patterns narrow back to the original value
        for i in &[-1i16, -2, -300, i16::min_value(), i16::max_value()] {
            check(*i, &encode_full(&(*i as i64)).unwrap());
        }
        for i in &[-1i32, -50_000_000, i32::min_value()] {
            assert_eq!(encode_full(i).unwrap().len(), 10);
            check(*i, &encode_full(&(*i as i64)).unwrap());
        }
    }

    #[test]
    fn strings() {
        check(String::new(), &[0]);
        check("a".to_string(), &[1, b'a']);
        check("hello".to_string(), &[5, b'h', b'e', b'l', b'l', b'o']);
        check("hello world".to_string(), b"\x0bhello world");
    }

    #[test]
    fn short_string() {
        assert_eq!(
            err_kind::<String>(&[5, b'h', b'e']),
            ErrorKind::EndOfBuffer {
                needed: 5,
                remaining: 2
            }
        );
    }

    #[test]
    fn invalid_utf8() {
        assert_eq!(err_kind::<String>(&[2, 0xc3, 0x28]), ErrorKind::InvalidUtf8);
        // the same bytes are a fine byte sequence
        check(vec![0xc3u8, 0x28], &[2, 0xc3, 0x28]);
    }

    #[test]
    fn sequences() {
        check(Vec::<i8>::new(), &[0]);
        check(vec![1i8], &[1, 1]);
        check(vec![1i8, 2, 3], &[3, 1, 2, 3]);
        check(vec![1i8, 2, 3, 4], &[4, 1, 2, 3, 4]);
        check(vec!["a".to_string(), "b".to_string()], &[2, 1, b'a', 1, b'b']);
        check(vec![1i32, 2, 3], &[3, 1, 2, 3]);
        check(vec![vec![1u8], vec![]], &[2, 1, 1, 0]);
    }

    #[test]
    fn sequence_ceiling() {
        // 10_001 elements announced, none present
        let mut bytes = Vec::new();
        varint::write(10_001, &mut bytes).unwrap();
        assert_eq!(
            err_kind::<Vec<u64>>(&bytes),
            ErrorKind::SizeLimitExceeded {
                len: 10_001,
                limit: 10_000
            }
        );

        // an absurd count is rejected the same way
        let bytes = varint::encode(u64::max_value());
        assert!(matches!(
            err_kind::<Vec<u8>>(&bytes),
            ErrorKind::SizeLimitExceeded { .. }
        ));

        // exactly at the ceiling is fine
        let at_limit = vec![0u8; 10_000];
        assert_eq!(
            decode_full::<Vec<u8>>(&encode_full(&at_limit).unwrap()).unwrap(),
            at_limit
        );
    }

    #[test]
    fn sequence_ceiling_is_configurable() {
        let bytes = [3, 1, 2, 3];
        let limits = Limits::default().with_max_sequence_len(3);
        let ok: Vec<u8> = decode(&mut Reader::with_limits(&bytes[..], limits)).unwrap();
        assert_eq!(ok, vec![1, 2, 3]);

        let limits = limits.with_max_sequence_len(2);
        assert!(decode::<Vec<u8>, _>(&mut Reader::with_limits(&bytes[..], limits)).is_err());
    }

    #[test]
    fn sequence_errors_carry_index() {
        let err = decode_full::<Vec<String>>(&[2, 1, b'a', 3, b'b']).unwrap_err();
        assert_eq!(err.path().collect::<Vec<_>>(), vec![&Segment::Index(1)]);
    }

    #[test]
    fn options() {
        check(None::<String>, &[0]);
        check(Some("booya".to_string()), &[1, 5, b'b', b'o', b'o', b'y', b'a']);
        check(Some(Box::new(66u32)), &[1, 66]);
        check(Some(Some(false)), &[1, 1, 0]);
        assert!(matches!(
            err_kind::<Option<u8>>(&[2, 0]),
            ErrorKind::TypeMismatch(_)
        ));
    }

    #[test]
    fn option_in_place_only_stores_complete_values() {
        let mut dest = Some("old".to_string());
        let err = decode_into(&mut Reader::new(&[1, 4, b'n'][..]), &mut dest).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EndOfBuffer { .. }));
        assert_eq!(dest.as_deref(), Some("old"));

        decode_into(&mut Reader::new(&[0][..]), &mut dest).unwrap();
        assert_eq!(dest, None);
    }

    #[test]
    fn floats() {
        check(1.5f32, &[0, 0, 0xc0, 0x3f]);
        check(-0.0f32, &[0, 0, 0, 0x80]);
        check(-42.6f32, &(-42.6f32).to_bits().to_le_bytes());
        check(1.0f64, &[0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
    }

    #[test]
    fn fixed_arrays() {
        check([0x12u8, 0x56, 0x34, 0xab], &[0x12, 0x56, 0x34, 0xab]);
        check([0x77_7777u32, 0xa8, 0x8d_786a], &[
            0xf7, 0xee, 0xdd, 0x03, 0xa8, 0x01, 0xea, 0xf0, 0xb5, 0x04,
        ]);

        let mut dest = [0u16; 2];
        decode_into(&mut Reader::new(&[1, 2][..]), &mut dest).unwrap();
        assert_eq!(dest, [1, 2]);
    }

    #[test]
    fn tuples_and_unit() {
        check((), &[]);
        check((true, 7u8), &[1, 7]);
        check((1i8, "x".to_string(), vec![2u16]), &[1, 1, b'x', 1, 2]);
    }

    #[test]
    fn shared_pointers() {
        check(Rc::new(5u8), &[5]);
        check(Arc::new("s".to_string()), &[1, b's']);

        let mut unique = Rc::new(0u8);
        decode_into(&mut Reader::new(&[9][..]), &mut unique).unwrap();
        assert_eq!(*unique, 9);

        let _other = Rc::clone(&unique);
        let err = decode_into(&mut Reader::new(&[9][..]), &mut unique).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NotMutable("Rc"));

        let mut shared = Arc::new(1u8);
        let _other = Arc::clone(&shared);
        let err = decode_into(&mut Reader::new(&[9][..]), &mut shared).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NotMutable("Arc"));
    }

    #[derive(Wire, Debug, PartialEq, Clone, Default)]
    struct Inner {
        x: i8,
        y: String,
    }

    #[derive(Wire, Debug, PartialEq, Clone, Default)]
    struct Outer {
        a: i8,
        b: String,
        c: Vec<i32>,
        d: Inner,
        e: Vec<Inner>,
    }

    fn outer() -> Outer {
        Outer {
            a: 1,
            b: "hello".to_string(),
            c: vec![1, 2, 3],
            d: Inner {
                x: 2,
                y: "world".to_string(),
            },
            e: vec![
                Inner {
                    x: 5,
                    y: "qux".to_string(),
                },
                Inner {
                    x: 6,
                    y: "foo".to_string(),
                },
            ],
        }
    }

    #[rustfmt::skip]
    const OUTER_BYTES: &[u8] = &[
        1,                             // a
        5, b'h', b'e', b'l', b'l', b'o', // b
        3, 1, 2, 3,                    // c
        2, 5, b'w', b'o', b'r', b'l', b'd', // d
        2,                             // len(e)
        5, 3, b'q', b'u', b'x',        // e[0]
        6, 3, b'f', b'o', b'o',        // e[1]
    ];

    #[test]
    fn records() { check(outer(), OUTER_BYTES); }

    #[test]
    fn record_in_place() {
        let mut dest = Outer::default();
        decode_into(&mut Reader::new(OUTER_BYTES), &mut dest).unwrap();
        assert_eq!(dest, outer());
    }

    #[test]
    fn record_errors_carry_field_path() {
        let truncated = &OUTER_BYTES[..OUTER_BYTES.len() - 1];
        let err = decode_full::<Outer>(truncated).unwrap_err();
        assert_eq!(err.path().collect::<Vec<_>>(), vec![
            &Segment::Field("e"),
            &Segment::Index(1),
            &Segment::Field("y"),
        ]);
        assert!(matches!(err.kind(), ErrorKind::EndOfBuffer { .. }));
    }

    #[test]
    fn truncated_records_never_decode() {
        for n in 0..OUTER_BYTES.len() {
            assert!(decode_full::<Outer>(&OUTER_BYTES[..n]).is_err(), "{} bytes", n);
        }
    }

    #[derive(Wire, Debug, PartialEq)]
    struct Pointers {
        a: Option<i8>,
        b: Option<String>,
        c: Option<Vec<i32>>,
        d: Option<Box<Inner>>,
        e: Option<Vec<Inner>>,
    }

    #[test]
    fn record_of_options() {
        check(
            Pointers {
                a: None,
                b: Some("foo".to_string()),
                c: None,
                d: None,
                e: None,
            },
            &[0, 1, 3, b'f', b'o', b'o', 0, 0, 0],
        );
    }

    #[derive(Wire, Debug, PartialEq)]
    struct Pair(u8, String);

    #[derive(Wire, Debug, PartialEq)]
    struct Marker;

    #[test]
    fn tuple_and_unit_records() {
        check(Pair(86, "foo".to_string()), &[86, 3, b'f', b'o', b'o']);
        check(Marker, &[]);
    }

    #[derive(Wire, Debug, PartialEq, Default)]
    struct WithSkipped {
        id: u32,
        #[wire(skip)]
        cached: Option<String>,
        name: String,
    }

    #[test]
    fn skipped_fields_are_symmetric() {
        let v = WithSkipped {
            id: 1,
            cached: Some("scratch".to_string()),
            name: "n".to_string(),
        };
        let enc = encode_full(&v).unwrap();
        assert_eq!(enc, vec![1, 1, b'n']);

        let dec: WithSkipped = decode_full(&enc).unwrap();
        assert_eq!(dec.cached, None);
        assert_eq!(dec.name, "n");

        let mut dest = WithSkipped {
            cached: Some("keep".to_string()),
            ..WithSkipped::default()
        };
        decode_into(&mut Reader::new(&enc[..]), &mut dest).unwrap();
        assert_eq!(dest.cached.as_deref(), Some("keep"));
        assert_eq!(dest.id, 1);
    }

    #[derive(Wire, Debug, PartialEq)]
    struct Generic<T> {
        items: Vec<T>,
        first: Option<T>,
    }

    #[test]
    fn generic_records() {
        check(
            Generic {
                items: vec![1u16, 300],
                first: Some(1),
            },
            &[2, 1, 172, 2, 1, 1],
        );
    }

    #[test]
    fn slice_sink_overflow() {
        let mut storage = [0u8; 4];
        let err = encode(&outer(), &mut SliceWriter::new(&mut storage)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EndOfBuffer { .. }));
        assert_eq!(err.path().next(), Some(&Segment::Field("b")));
    }

    #[test]
    fn trailing_bytes() {
        assert_eq!(decode_full::<u8>(&[1, 2]).unwrap(), 1);
        assert_eq!(
            decode_exact::<u8>(&[1, 2]).unwrap_err().kind(),
            &ErrorKind::TrailingBytes(1)
        );
    }
}
