//! # Dynamic value codec
//!
//! Encode and decode functions for self-describing [`Value`]s.
//!
//! Every value starts with a one-byte tag:
//!
//! | Tag | Kind         | Payload                                                   |
//! | --- | ---          | ---                                                       |
//! | `0` | `None`       | nothing                                                   |
//! | `1` | `Boolean`    | one byte, nonzero is `true`                               |
//! | `2` | `Int64`      | 8 bytes, little-endian two's complement                   |
//! | `3` | `String`     | `u32` little-endian byte length, then the UTF-8 bytes     |
//! | `4` | `Dictionary` | `u64` little-endian count, then per entry an untagged key |
//! |     |              | (`u32` length and bytes) followed by a tagged value       |
//! | `5` | `List`       | `u64` little-endian count, then the tagged values         |
//!
//! Unlike the [structural codec](crate::structural), no integer here is a varint.
//!
//! # Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! let v = Value::from(vec![Value::from(true), Value::from(43)]);
//!
//! let enc = encode_value_full(&v).unwrap();
//! assert_eq!(
//!     enc,
//!     vec![5, 2, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 43, 0, 0, 0, 0, 0, 0, 0]
//! );
//!
//! assert_eq!(decode_value_full(&enc).unwrap(), v);
//! ```

use crate::{
    errors::{Error, ErrorKind},
    sink::Serializer,
    source::{Deserializer, Reader},
    value::{Dictionary, Value},
};
use tracing::trace;

pub(crate) mod constants;
use constants::*;
pub mod ser;
pub use ser::*;
pub mod de;
pub use de::*;

/// Encodes `v`, writing the output to `out`.
///
/// # Errors
///
/// Fails with [`ErrorKind::SizeLimitExceeded`] if a string or key is longer than
/// `u32::MAX` bytes, and with whatever error `out` reports when it runs out of space.
pub fn encode_value<S: Serializer>(v: &Value, out: &mut S) -> Result<(), Error> {
    out.put_value(v)
}

/// Encodes `v` into a fresh vector of bytes.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// assert_eq!(encode_value_full(&Value::None).unwrap(), vec![0]);
/// ```
pub fn encode_value_full(v: &Value) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    out.put_value(v)?;
    trace!(len = out.len(), kind = %v.kind(), "encoded dynamic value");
    Ok(out)
}

/// Decodes one tagged value from `d`.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let mut r = Reader::new(&[3, 4, 0, 0, 0, b'f', b'd', b's', b'f', 0xaa][..]);
///
/// assert_eq!(decode_value(&mut r).unwrap(), Value::from("fdsf"));
/// assert_eq!(r.remaining(), 1);
/// ```
pub fn decode_value<D: Deserializer>(d: &mut D) -> Result<Value, Error> { d.read_value() }

/// Decodes one tagged value from the front of `bytes` with the default
/// [`Limits`](crate::limits::Limits). Trailing bytes are ignored.
pub fn decode_value_full(bytes: &[u8]) -> Result<Value, Error> {
    let v = decode_value(&mut Reader::new(bytes))?;
    trace!(len = bytes.len(), kind = %v.kind(), "decoded dynamic value");
    Ok(v)
}
