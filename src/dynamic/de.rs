use super::*;
use tracing::debug;

/// Convenience methods for [`Deserializer`] used by the dynamic codec.
pub trait ValueDeserializerExt: Deserializer {
    /// Read a tag byte.
    fn read_tag(&mut self) -> Result<u8, Error>;

    /// Read 4 little-endian bytes as a `u32`.
    fn read_u32_le(&mut self) -> Result<u32, Error>;

    /// Read 8 little-endian bytes as a `u64`.
    fn read_u64_le(&mut self) -> Result<u64, Error>;

    /// Read 8 little-endian two's complement bytes as an `i64`.
    fn read_i64_le(&mut self) -> Result<i64, Error>;

    /// Read a string with a `u32` byte length and no tag.
    fn read_str(&mut self) -> Result<String, Error>;

    /// Read a list or dictionary count, checking it against
    /// [`Limits::max_collection_len`](crate::limits::Limits::max_collection_len).
    fn read_count(&mut self) -> Result<usize, Error>;

    /// Read a tagged [`Value`], recursively.
    ///
    /// # Errors
    ///
    /// An unknown tag fails with [`ErrorKind::UnhandledTag`]; nothing after the tag byte
    /// is consumed.
    fn read_value(&mut self) -> Result<Value, Error>;
}

impl<D: Deserializer> ValueDeserializerExt for D {
    #[inline]
    fn read_tag(&mut self) -> Result<u8, Error> { self.take_u8() }

    fn read_u32_le(&mut self) -> Result<u32, Error> {
        let mut buf = [0u8; STRING_LEN_BYTES];
        self.take_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn read_u64_le(&mut self) -> Result<u64, Error> {
        let mut buf = [0u8; COUNT_BYTES];
        self.take_exact(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn read_i64_le(&mut self) -> Result<i64, Error> {
        let mut buf = [0u8; 8];
        self.take_exact(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    fn read_str(&mut self) -> Result<String, Error> {
        let len = self.read_u32_le()?;
        let bytes = self.take_vec(len as usize)?;
        String::from_utf8(bytes).map_err(|_| ErrorKind::InvalidUtf8.into())
    }

    fn read_count(&mut self) -> Result<usize, Error> {
        let count = self.read_u64_le()?;
        let limit = self.limits().max_collection_len;
        if count > limit as u64 {
            debug!(count, limit, "collection count above ceiling");
            return Err(Error::size_limit(count, limit as u64));
        }
        Ok(count as usize)
    }

    fn read_value(&mut self) -> Result<Value, Error> {
        match self.read_tag()? {
            TAG_NONE => Ok(Value::None),
            TAG_BOOLEAN => Ok(Value::Boolean(self.take_u8()? != 0)),
            TAG_INT64 => self.read_i64_le().map(Value::Int64),
            TAG_STRING => self.read_str().map(Value::String),
            TAG_LIST => {
                let count = self.read_count()?;
                // every value takes at least its tag byte
                let mut items = Vec::with_capacity(count.min(self.remaining()));
                for i in 0..count {
                    items.push(self.read_value().map_err(|e| e.at_index(i))?);
                }
                Ok(Value::List(items))
            }
            TAG_DICTIONARY => {
                let count = self.read_count()?;
                let mut entries = Vec::with_capacity(count.min(self.remaining()));
                for i in 0..count {
                    let key = self.read_str().map_err(|e| e.at_index(i))?;
                    let item = match self.read_value() {
                        Ok(item) => item,
                        Err(e) => return Err(e.at_key(key)),
                    };
                    entries.push((key, item));
                }
                // repeated keys collapse here, keeping the last
                Ok(Value::Dictionary(Dictionary::from(entries)))
            }
            unknown => {
                debug!(tag = unknown, "unhandled tag");
                Err(ErrorKind::UnhandledTag(unknown).into())
            }
        }
    }
}
