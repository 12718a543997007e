use super::*;
use std::{rc::Rc, sync::Arc};

/// Convenience methods for [`Serializer`] used by the structural codec.
pub trait SerializerExt: Serializer {
    /// Add a [`bool`] as a single `0`/`1` byte.
    ///
    /// # Arguments
    ///
    /// * `b: bool` - The value to be added.
    fn put_bool(&mut self, b: bool) -> Result<(), Error>;

    /// Add a varint.
    ///
    /// # Arguments
    ///
    /// * `u: u64` - The value to be added.
    fn put_varint(&mut self, u: u64) -> Result<(), Error>;

    /// Add a length or element count.
    ///
    /// # Arguments
    ///
    /// * `len: usize` - The length to be added.
    fn put_len(&mut self, len: usize) -> Result<(), Error>;

    /// Add a length-prefixed byte string.
    ///
    /// # Arguments
    ///
    /// * `bytes: &[u8]` - The bytes to be added.
    fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_bool(&mut self, b: bool) -> Result<(), Error> { self.put_u8(b as u8) }

    #[inline]
    fn put_varint(&mut self, u: u64) -> Result<(), Error> { varint::write(u, self) }

    #[inline]
    fn put_len(&mut self, len: usize) -> Result<(), Error> { self.put_varint(len as u64) }

    fn put_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.put_len(bytes.len())?;
        self.put_slice(bytes)
    }
}

/// A value with a statically known shape that can be encoded.
///
/// Implemented for the primitive kinds, strings, sequences, options and owning
/// pointers. Records get an implementation from `#[derive(Wire)]`.
pub trait Ser {
    /// Write `self` to `s`.
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error>;
}

impl Ser for bool {
    #[inline]
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_bool(*self) }
}

// one raw byte, no framing
impl Ser for u8 {
    #[inline]
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_u8(*self) }
}

impl Ser for i8 {
    #[inline]
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_u8(*self as u8) }
}

impl Ser for u64 {
    #[inline]
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_varint(*self) }
}

impl Ser for i64 {
    #[inline]
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        s.put_varint(varint::widen(*self))
    }
}

macro_rules! unsigned_ser {
    ($($t:ty),*) => {
        $(impl Ser for $t {
            #[inline]
            fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
                s.put_varint(*self as u64)
            }
        })*
    };
}

unsigned_ser!(u16, u32, usize);

macro_rules! signed_ser {
    ($($t:ty),*) => {
        $(impl Ser for $t {
            #[inline]
            fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
                s.put_varint(varint::widen(*self as i64))
            }
        })*
    };
}

signed_ser!(i16, i32, isize);

impl Ser for f32 {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        s.put_slice(&self.to_bits().to_le_bytes())
    }
}

impl Ser for f64 {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        s.put_slice(&self.to_bits().to_le_bytes())
    }
}

impl Ser for str {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { s.put_bytes(self.as_bytes()) }
}

impl Ser for String {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { self.as_str().ser(s) }
}

impl<T: Ser> Ser for [T] {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        s.put_len(self.len())?;
        for (i, t) in self.iter().enumerate() {
            t.ser(s).map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }
}

impl<T: Ser> Ser for Vec<T> {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { self.as_slice().ser(s) }
}

// the length is part of the shape, so no count is written
impl<T: Ser, const N: usize> Ser for [T; N] {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        for (i, t) in self.iter().enumerate() {
            t.ser(s).map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }
}

impl<T: Ser> Ser for Option<T> {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
        match self {
            None => s.put_u8(ABSENT),
            Some(t) => {
                s.put_u8(PRESENT)?;
                t.ser(s)
            }
        }
    }
}

macro_rules! deref_ser {
    ($($ptr:ident),*) => {
        $(impl<T: Ser + ?Sized> Ser for $ptr<T> {
            #[inline]
            fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { (**self).ser(s) }
        })*
    };
}

deref_ser!(Box, Rc, Arc);

impl<'a, T: Ser + ?Sized> Ser for &'a T {
    #[inline]
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> { (**self).ser(s) }
}

impl Ser for () {
    fn ser<S: Serializer>(&self, _: &mut S) -> Result<(), Error> { Ok(()) }
}

macro_rules! tuple_ser {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Ser),+> Ser for ($($name,)+) {
            fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), Error> {
                $(self.$idx.ser(s).map_err(|e| e.at_index($idx))?;)+
                Ok(())
            }
        }
    };
}

tuple_ser!(T0 0);
tuple_ser!(T0 0, T1 1);
tuple_ser!(T0 0, T1 1, T2 2);
tuple_ser!(T0 0, T1 1, T2 2, T3 3);
tuple_ser!(T0 0, T1 1, T2 2, T3 3, T4 4);
tuple_ser!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
