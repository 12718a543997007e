use super::*;
use std::{convert::TryFrom, rc::Rc, sync::Arc};
use tracing::debug;

/// Convenience methods for [`Deserializer`] used by the structural codec.
pub trait DeserializerExt: Deserializer {
    /// Read a [`bool`]; any nonzero byte is `true`.
    fn read_bool(&mut self) -> Result<bool, Error>;

    /// Read a varint.
    fn read_varint(&mut self) -> Result<u64, Error>;

    /// Read a length that must be addressable on this platform.
    fn read_len(&mut self) -> Result<usize, Error>;

    /// Read a sequence element count, checking it against
    /// [`Limits::max_sequence_len`](crate::limits::Limits::max_sequence_len).
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::SizeLimitExceeded`] before anything is allocated when the
    /// count is above the ceiling.
    fn read_seq_len(&mut self) -> Result<usize, Error>;

    /// Read a length-prefixed byte string.
    fn read_bytes(&mut self) -> Result<Vec<u8>, Error>;
}

impl<D: Deserializer> DeserializerExt for D {
    #[inline]
    fn read_bool(&mut self) -> Result<bool, Error> { Ok(self.take_u8()? != 0) }

    #[inline]
    fn read_varint(&mut self) -> Result<u64, Error> { varint::read(self) }

    fn read_len(&mut self) -> Result<usize, Error> {
        let len = self.read_varint()?;
        usize::try_from(len).map_err(|_| Error::size_limit(len, usize::max_value() as u64))
    }

    fn read_seq_len(&mut self) -> Result<usize, Error> {
        let len = self.read_varint()?;
        let limit = self.limits().max_sequence_len;
        if len > limit as u64 {
            debug!(len, limit, "sequence count above ceiling");
            return Err(Error::size_limit(len, limit as u64));
        }
        Ok(len as usize)
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>, Error> {
        let len = self.read_len()?;
        self.take_vec(len)
    }
}

/// A value with a statically known shape that can be decoded.
///
/// The destination type is the shape: decoding walks it field by field and never looks
/// at the bytes to decide what comes next.
pub trait De: Sized {
    /// Read a value of type `Self` from a [`Deserializer`].
    ///
    /// # Arguments
    ///
    /// * `d` - The [`Deserializer`] to be read from.
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error>;

    /// Decode into storage the caller already owns.
    ///
    /// On failure `self` may be left partially overwritten.
    ///
    /// # Arguments
    ///
    /// * `d` - The [`Deserializer`] to be read from.
    fn de_in_place<D: Deserializer>(&mut self, d: &mut D) -> Result<(), Error> {
        *self = Self::de(d)?;
        Ok(())
    }
}

impl De for bool {
    #[inline]
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { d.read_bool() }
}

impl De for u8 {
    #[inline]
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { d.take_u8() }
}

impl De for i8 {
    #[inline]
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { Ok(d.take_u8()? as i8) }
}

// wider integers are narrowed to the target width by truncation, which is what makes
// sign-extended negatives come back intact
macro_rules! varint_de {
    ($($t:ty),*) => {
        $(impl De for $t {
            #[inline]
            fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { Ok(d.read_varint()? as $t) }
        })*
    };
}

varint_de!(u16, u32, usize, i16, i32, i64, isize);

impl De for u64 {
    #[inline]
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { d.read_varint() }
}

impl De for f32 {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
        let mut buf = [0; 4];
        d.take_exact(&mut buf)?;
        Ok(f32::from_bits(u32::from_le_bytes(buf)))
    }
}

impl De for f64 {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
        let mut buf = [0; 8];
        d.take_exact(&mut buf)?;
        Ok(f64::from_bits(u64::from_le_bytes(buf)))
    }
}

impl De for String {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
        String::from_utf8(d.read_bytes()?).map_err(|_| Error::new(ErrorKind::InvalidUtf8))
    }
}

impl<T: De> De for Vec<T> {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
        let len = d.read_seq_len()?;
        let mut out = Vec::with_capacity(len.min(d.remaining()));
        for i in 0..len {
            out.push(T::de(d).map_err(|e| e.at_index(i))?);
        }
        Ok(out)
    }
}

impl<T: De, const N: usize> De for [T; N] {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
        let mut out = Vec::with_capacity(N);
        for i in 0..N {
            out.push(T::de(d).map_err(|e| e.at_index(i))?);
        }
        match <[T; N]>::try_from(out) {
            Ok(arr) => Ok(arr),
            Err(_) => Err(Error::type_mismatch("fixed-size array length")),
        }
    }

    fn de_in_place<D: Deserializer>(&mut self, d: &mut D) -> Result<(), Error> {
        for (i, t) in self.iter_mut().enumerate() {
            t.de_in_place(d).map_err(|e| e.at_index(i))?;
        }
        Ok(())
    }
}

fn read_presence<D: Deserializer>(d: &mut D) -> Result<bool, Error> {
    match d.take_u8()? {
        ABSENT => Ok(false),
        PRESENT => Ok(true),
        flag => Err(Error::type_mismatch(format!(
            "presence flag must be 0 or 1, found {}",
            flag
        ))),
    }
}

impl<T: De> De for Option<T> {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
        if read_presence(d)? {
            Ok(Some(T::de(d)?))
        } else {
            Ok(None)
        }
    }

    // the pointee is only stored once it decoded completely
    fn de_in_place<D: Deserializer>(&mut self, d: &mut D) -> Result<(), Error> {
        if read_presence(d)? {
            let t = T::de(d)?;
            *self = Some(t);
        } else {
            *self = None;
        }
        Ok(())
    }
}

impl<T: De> De for Box<T> {
    fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { Ok(Box::new(T::de(d)?)) }

    fn de_in_place<D: Deserializer>(&mut self, d: &mut D) -> Result<(), Error> {
        (**self).de_in_place(d)
    }
}

macro_rules! shared_de {
    ($($ptr:ident),*) => {
        $(impl<T: De> De for $ptr<T> {
            fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> { Ok($ptr::new(T::de(d)?)) }

            fn de_in_place<D: Deserializer>(&mut self, d: &mut D) -> Result<(), Error> {
                match $ptr::get_mut(self) {
                    Some(t) => t.de_in_place(d),
                    None => Err(Error::new(ErrorKind::NotMutable(stringify!($ptr)))),
                }
            }
        })*
    };
}

shared_de!(Rc, Arc);

impl De for () {
    fn de<D: Deserializer>(_: &mut D) -> Result<Self, Error> { Ok(()) }
}

macro_rules! tuple_de {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: De),+> De for ($($name,)+) {
            fn de<D: Deserializer>(d: &mut D) -> Result<Self, Error> {
                Ok(($($name::de(d).map_err(|e| e.at_index($idx))?,)+))
            }

            fn de_in_place<D: Deserializer>(&mut self, d: &mut D) -> Result<(), Error> {
                $(self.$idx.de_in_place(d).map_err(|e| e.at_index($idx))?;)+
                Ok(())
            }
        }
    };
}

tuple_de!(T0 0);
tuple_de!(T0 0, T1 1);
tuple_de!(T0 0, T1 1, T2 2);
tuple_de!(T0 0, T1 1, T2 2, T3 3);
tuple_de!(T0 0, T1 1, T2 2, T3 3, T4 4);
tuple_de!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
