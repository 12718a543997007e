//! Byte sinks the encoders write into.
//!
//! A [`Serializer`] only knows how to accept bytes. Growable sinks ([`Vec<u8>`],
//! [`BytesMut`]) never fail; [`SliceWriter`] writes into caller-provided storage and
//! fails with [`ErrorKind::EndOfBuffer`](crate::errors::ErrorKind::EndOfBuffer) once it
//! is full.

use crate::errors::Error;
use bytes::{BufMut, Bytes, BytesMut};

/// A destination for encoded bytes.
///
/// `Vec<u8>` and `BytesMut` also implement [`bytes::BufMut`], whose `put_u8` and
/// `put_slice` have the same names. With both traits in scope, method-call syntax is
/// ambiguous; call through the trait instead:
///
/// ```
/// use bytes::BufMut;
/// use vellum::prelude::*;
///
/// let mut out = Vec::new();
/// Serializer::put_u8(&mut out, 1).unwrap();
/// BufMut::put_u8(&mut out, 2);
/// assert_eq!(out, vec![1, 2]);
/// ```
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output.
    fn put_u8(&mut self, u: u8) -> Result<(), Error>;
    /// Add a slice to the output.
    fn put_slice(&mut self, slice: &[u8]) -> Result<(), Error>;
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) -> Result<(), Error> {
        self.push(u);
        Ok(())
    }

    fn put_slice(&mut self, slice: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(slice);
        Ok(())
    }

    fn finalize(self) -> Self::Out { self }
}

impl Serializer for BytesMut {
    type Out = Bytes;

    fn put_u8(&mut self, u: u8) -> Result<(), Error> {
        BufMut::put_u8(self, u);
        Ok(())
    }

    fn put_slice(&mut self, slice: &[u8]) -> Result<(), Error> {
        BufMut::put_slice(self, slice);
        Ok(())
    }

    fn finalize(self) -> Bytes { self.freeze() }
}

#[derive(Debug)]
/// A sink over a fixed-size, caller-owned buffer.
///
/// # Example
///
/// ```
/// use vellum::prelude::*;
///
/// let mut storage = [0u8; 4];
/// let mut w = SliceWriter::new(&mut storage);
///
/// encode("hi", &mut w).unwrap();
/// assert_eq!(w.finalize(), 3);
///
/// // does not fit
/// let mut small = [0u8; 2];
/// assert!(encode("hi", &mut SliceWriter::new(&mut small)).is_err());
/// ```
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    /// Creates a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self { SliceWriter { buf, pos: 0 } }

    /// Bytes written so far.
    pub fn written(&self) -> usize { self.pos }

    /// Space left in the buffer.
    pub fn remaining(&self) -> usize { self.buf.len() - self.pos }
}

impl<'a> Serializer for SliceWriter<'a> {
    /// Number of bytes written.
    type Out = usize;

    fn put_u8(&mut self, u: u8) -> Result<(), Error> { self.put_slice(&[u]) }

    fn put_slice(&mut self, slice: &[u8]) -> Result<(), Error> {
        if slice.len() > self.remaining() {
            return Err(Error::end_of_buffer(slice.len(), self.remaining()));
        }
        self.buf[self.pos..self.pos + slice.len()].copy_from_slice(slice);
        self.pos += slice.len();
        Ok(())
    }

    fn finalize(self) -> usize { self.pos }
}
