//! Byte sources the decoders read from.
//!
//! [`Reader`] wraps any [`bytes::Buf`] (a `&[u8]`, a [`Bytes`](bytes::Bytes), a chain of
//! buffers) together with the [`Limits`] the decoders check counts against. Every read
//! checks the remaining length first, so a short buffer fails with
//! [`ErrorKind::EndOfBuffer`](crate::errors::ErrorKind::EndOfBuffer) before anything is
//! consumed or allocated for that field.

use crate::{errors::Error, limits::Limits};
use bytes::Buf;

/// A source of encoded bytes.
pub trait Deserializer {
    /// The ceilings counts are checked against.
    fn limits(&self) -> &Limits;

    /// Bytes left to read.
    fn remaining(&self) -> usize;

    /// Read a single byte.
    fn take_u8(&mut self) -> Result<u8, Error>;

    /// Fill `dst` completely, or fail without consuming anything.
    fn take_exact(&mut self, dst: &mut [u8]) -> Result<(), Error>;

    /// Read exactly `len` bytes into a fresh vector.
    ///
    /// The remaining length is checked before allocating.
    fn take_vec(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        if len > self.remaining() {
            return Err(Error::end_of_buffer(len, self.remaining()));
        }
        let mut out = vec![0; len];
        self.take_exact(&mut out)?;
        Ok(out)
    }
}

#[derive(Debug, Clone)]
/// A [`Deserializer`] over a [`Buf`].
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let bytes = [1, 2, 0xff];
/// let mut r = Reader::new(&bytes[..]);
///
/// let pair: (bool, u8) = (decode(&mut r).unwrap(), decode(&mut r).unwrap());
/// assert_eq!(pair, (true, 2));
///
/// // decoding never checks that the input was used up
/// assert_eq!(r.remaining(), 1);
/// ```
pub struct Reader<B> {
    buf: B,
    limits: Limits,
}

impl<B: Buf> Reader<B> {
    /// Creates a reader with the default [`Limits`].
    pub fn new(buf: B) -> Self { Reader::with_limits(buf, Limits::default()) }

    /// Creates a reader with custom [`Limits`].
    pub fn with_limits(buf: B, limits: Limits) -> Self { Reader { buf, limits } }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize { self.buf.remaining() }

    /// The wrapped buffer.
    pub fn get_ref(&self) -> &B { &self.buf }

    /// Consumes the reader, returning the buffer positioned after the last read.
    pub fn into_inner(self) -> B { self.buf }
}

impl<B: Buf> Deserializer for Reader<B> {
    fn limits(&self) -> &Limits { &self.limits }

    fn remaining(&self) -> usize { self.buf.remaining() }

    #[inline]
    fn take_u8(&mut self) -> Result<u8, Error> {
        if self.buf.has_remaining() {
            Ok(self.buf.get_u8())
        } else {
            Err(Error::end_of_buffer(1, 0))
        }
    }

    #[inline]
    fn take_exact(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        let remaining = self.buf.remaining();
        if dst.len() > remaining {
            return Err(Error::end_of_buffer(dst.len(), remaining));
        }
        self.buf.copy_to_slice(dst);
        Ok(())
    }
}
