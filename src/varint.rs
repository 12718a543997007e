//! Variable-length unsigned integers.
//!
//! Seven payload bits per byte, least significant group first. The high bit of each
//! byte is set when more bytes follow. Encoding is canonical: the shortest form is
//! always written.
//!
//! Signed integers are not zig-zag encoded. They are widened to their 64-bit two's
//! complement bit pattern first, so every negative value takes the full ten bytes.
//!
//! | value         | bytes                        |
//! | ---           | ---                          |
//! | `0`           | `00`                         |
//! | `127`         | `7f`                         |
//! | `128`         | `80 01`                      |
//! | `300`         | `ac 02`                      |
//! | `0x7fffffff`  | `ff ff ff ff 07`             |
//! | `-1`          | `ff ff ff ff ff ff ff ff ff 01` |
//!
//! # Example
//!
//! ```
//! use vellum::varint;
//!
//! assert_eq!(varint::encode(300).as_slice(), &[0xac, 0x02]);
//! assert_eq!(varint::encode(varint::widen(-2i64)).len(), 10);
//!
//! assert_eq!(varint::decode(&[0xac, 0x02, 0xff]).unwrap(), (300, 2));
//! ```

use crate::{
    errors::{Error, ErrorKind},
    sink::Serializer,
    source::Deserializer,
};
use smallvec::SmallVec;
use tracing::debug;

/// Longest encoding of a `u64`.
pub const MAX_LEN: usize = 10;

const CONTINUE_BIT: u8 = 0b1000_0000;
const PAYLOAD_MASK: u8 = 0b0111_1111;

/// Widens a signed integer to the bit pattern that gets encoded.
#[inline]
pub fn widen(i: i64) -> u64 { i as u64 }

/// Encodes `u` in its canonical form.
pub fn encode(mut u: u64) -> SmallVec<[u8; MAX_LEN]> {
    let mut out = SmallVec::new();
    while u >= CONTINUE_BIT as u64 {
        out.push(u as u8 | CONTINUE_BIT);
        u >>= 7;
    }
    out.push(u as u8);
    out
}

/// Number of bytes [`encode`] produces for `u`.
pub fn encoded_len(u: u64) -> usize {
    let bits = 64 - u.leading_zeros() as usize;
    if bits == 0 {
        1
    } else {
        (bits + 6) / 7
    }
}

/// Writes `u` to a [`Serializer`].
#[inline]
pub fn write<S: Serializer>(u: u64, out: &mut S) -> Result<(), Error> {
    if u < CONTINUE_BIT as u64 {
        out.put_u8(u as u8)
    } else {
        out.put_slice(&encode(u))
    }
}

/// Reads a varint from a [`Deserializer`].
///
/// # Errors
///
/// Fails with [`ErrorKind::EndOfBuffer`] if the input ends before a byte with the
/// continuation bit clear, and with [`ErrorKind::VarintOverflow`] if the value does not
/// fit in 64 bits.
pub fn read<D: Deserializer>(d: &mut D) -> Result<u64, Error> {
    let mut acc = 0u64;
    for i in 0..MAX_LEN {
        let byte = d.take_u8()?;
        acc = accumulate(acc, i, byte)?;
        if byte & CONTINUE_BIT == 0 {
            return Ok(acc);
        }
    }
    // the tenth byte either terminates or overflows
    unreachable_overflow()
}

/// Decodes a varint from the front of `bytes`, returning the value and the number of
/// bytes it occupied.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize), Error> {
    let mut acc = 0u64;
    for (i, &byte) in bytes.iter().take(MAX_LEN).enumerate() {
        acc = accumulate(acc, i, byte)?;
        if byte & CONTINUE_BIT == 0 {
            return Ok((acc, i + 1));
        }
    }
    if bytes.len() < MAX_LEN {
        Err(Error::end_of_buffer(bytes.len() + 1, bytes.len()))
    } else {
        unreachable_overflow()
    }
}

#[inline]
fn accumulate(acc: u64, i: usize, byte: u8) -> Result<u64, Error> {
    // only the lowest bit of the tenth byte is inside 64 bits
    if i == MAX_LEN - 1 && byte > 1 {
        debug!(byte, "varint overflows 64 bits");
        return Err(Error::new(ErrorKind::VarintOverflow));
    }
    Ok(acc | ((byte & PAYLOAD_MASK) as u64) << (7 * i))
}

#[cold]
fn unreachable_overflow<T>() -> Result<T, Error> { Err(Error::new(ErrorKind::VarintOverflow)) }
