use super::*;
use std::convert::TryFrom;

/// Convenience methods for [`Serializer`] used by the dynamic codec.
///
/// Every integer here is fixed-width little-endian.
pub trait ValueSerializerExt: Serializer {
    /// Add a tag byte.
    fn put_tag(&mut self, tag: u8) -> Result<(), Error>;

    /// Add a `u32` as 4 little-endian bytes.
    fn put_u32_le(&mut self, u: u32) -> Result<(), Error>;

    /// Add a `u64` as 8 little-endian bytes.
    fn put_u64_le(&mut self, u: u64) -> Result<(), Error>;

    /// Add an `i64` as 8 little-endian two's complement bytes.
    fn put_i64_le(&mut self, i: i64) -> Result<(), Error>;

    /// Add a string with a `u32` byte length and no tag, the form used for both string
    /// payloads and dictionary keys.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::SizeLimitExceeded`](crate::errors::ErrorKind) before
    /// writing anything if the string is longer than `u32::MAX` bytes.
    fn put_str(&mut self, s: &str) -> Result<(), Error>;

    /// Add a collection count.
    fn put_count(&mut self, count: usize) -> Result<(), Error>;

    /// Add a tagged [`Value`], recursively.
    fn put_value(&mut self, v: &Value) -> Result<(), Error>;
}

pub(crate) fn str_len(s: &str) -> Result<u32, Error> {
    u32::try_from(s.len()).map_err(|_| Error::size_limit(s.len() as u64, u32::max_value() as u64))
}

impl<S: Serializer> ValueSerializerExt for S {
    #[inline]
    fn put_tag(&mut self, tag: u8) -> Result<(), Error> { self.put_u8(tag) }

    #[inline]
    fn put_u32_le(&mut self, u: u32) -> Result<(), Error> { self.put_slice(&u.to_le_bytes()) }

    #[inline]
    fn put_u64_le(&mut self, u: u64) -> Result<(), Error> { self.put_slice(&u.to_le_bytes()) }

    #[inline]
    fn put_i64_le(&mut self, i: i64) -> Result<(), Error> { self.put_slice(&i.to_le_bytes()) }

    fn put_str(&mut self, s: &str) -> Result<(), Error> {
        let len = str_len(s)?;
        self.put_u32_le(len)?;
        self.put_slice(s.as_bytes())
    }

    #[inline]
    fn put_count(&mut self, count: usize) -> Result<(), Error> { self.put_u64_le(count as u64) }

    fn put_value(&mut self, v: &Value) -> Result<(), Error> {
        match v {
            Value::None => self.put_tag(TAG_NONE),
            Value::Boolean(b) => {
                self.put_tag(TAG_BOOLEAN)?;
                self.put_u8(*b as u8)
            }
            Value::Int64(i) => {
                self.put_tag(TAG_INT64)?;
                self.put_i64_le(*i)
            }
            Value::String(s) => {
                // checked before the tag so an oversized string writes nothing
                str_len(s)?;
                self.put_tag(TAG_STRING)?;
                self.put_str(s)
            }
            Value::List(l) => {
                self.put_tag(TAG_LIST)?;
                self.put_count(l.len())?;
                for (i, item) in l.iter().enumerate() {
                    self.put_value(item).map_err(|e| e.at_index(i))?;
                }
                Ok(())
            }
            Value::Dictionary(d) => {
                self.put_tag(TAG_DICTIONARY)?;
                self.put_count(d.len())?;
                for (k, item) in d.iter() {
                    self.put_str(k).map_err(|e| e.at_key(k.as_str()))?;
                    self.put_value(item).map_err(|e| e.at_key(k.as_str()))?;
                }
                Ok(())
            }
        }
    }
}
