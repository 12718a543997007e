//! The dynamic value model.
//!
//! A [`Value`] is what the [dynamic codec](crate::dynamic) reads and writes when
//! nothing about the shape of the data is known ahead of time: every node carries its
//! own tag.
//!
//! # Example
//!
//! ```
//! use vellum::prelude::*;
//!
//! let mut dict = Dictionary::new();
//! dict.insert("name".to_string(), Value::from("vellum"));
//! dict.insert("tags".to_string(), Value::from(vec!["fast", "small"]));
//! dict.insert("stars".to_string(), Value::from(42));
//!
//! let v = Value::from(dict);
//!
//! assert_eq!(v.kind(), ValueKind::Dictionary);
//! assert_eq!(v.get("stars").and_then(|s| s.as_i64().ok()), Some(42));
//! ```

use crate::{dynamic::constants::*, errors::Error, vecmap::VecMap};
use std::{convert::TryFrom, fmt};

/// A string-keyed map of [`Value`]s, kept sorted by key.
pub type Dictionary = VecMap<String, Value>;

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// A self-describing value and its variants.
pub enum Value {
    /// Absence of a value.
    None,
    /// Boolean.
    Boolean(bool),
    /// Signed 64-bit integer.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// // any integer type that fits losslessly converts into `Int64`
    /// assert_eq!(Value::from(7u16), Value::Int64(7));
    /// ```
    Int64(i64),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// String-keyed map of values.
    Dictionary(Dictionary),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// The category of a [`Value`], without its payload.
pub enum ValueKind {
    /// [`Value::None`]
    None,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Int64`]
    Int64,
    /// [`Value::String`]
    String,
    /// [`Value::Dictionary`]
    Dictionary,
    /// [`Value::List`]
    List,
}

impl ValueKind {
    /// The tag byte that introduces a value of this kind on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// assert_eq!(ValueKind::Dictionary.tag(), 4);
    /// assert_eq!(ValueKind::List.tag(), 5);
    /// ```
    pub fn tag(self) -> u8 {
        match self {
            ValueKind::None => TAG_NONE,
            ValueKind::Boolean => TAG_BOOLEAN,
            ValueKind::Int64 => TAG_INT64,
            ValueKind::String => TAG_STRING,
            ValueKind::Dictionary => TAG_DICTIONARY,
            ValueKind::List => TAG_LIST,
        }
    }

    /// The kind introduced by `tag`, if it is a known tag.
    pub fn from_tag(tag: u8) -> Option<ValueKind> {
        match tag {
            TAG_NONE => Some(ValueKind::None),
            TAG_BOOLEAN => Some(ValueKind::Boolean),
            TAG_INT64 => Some(ValueKind::Int64),
            TAG_STRING => Some(ValueKind::String),
            TAG_DICTIONARY => Some(ValueKind::Dictionary),
            TAG_LIST => Some(ValueKind::List),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::None => "none",
            ValueKind::Boolean => "boolean",
            ValueKind::Int64 => "int64",
            ValueKind::String => "string",
            ValueKind::Dictionary => "dictionary",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

fn mismatch(expected: ValueKind, found: &Value) -> Error {
    Error::type_mismatch(format!("expected {}, found {}", expected, found.kind()))
}

impl Value {
    /// The category of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Int64(_) => ValueKind::Int64,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Dictionary(_) => ValueKind::Dictionary,
        }
    }

    /// Indicates whether a value is [`Value::None`].
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// assert!(Value::None.is_none());
    /// assert!(Value::from(None::<i64>).is_none());
    /// ```
    pub fn is_none(&self) -> bool {
        match self {
            Value::None => true,
            _ => false,
        }
    }

    /// Tries to read a value as a [`bool`].
    /// This will return an [`Error`] if the value is not a [`Value::Boolean`].
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// assert!(Value::from(true).as_bool().unwrap());
    /// assert!(Value::from(1).as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(mismatch(ValueKind::Boolean, other)),
        }
    }

    /// Tries to read a value as an [`i64`].
    pub fn as_i64(&self) -> Result<i64, Error> {
        match self {
            Value::Int64(i) => Ok(*i),
            other => Err(mismatch(ValueKind::Int64, other)),
        }
    }

    /// Tries to read a value as a string slice.
    pub fn as_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(mismatch(ValueKind::String, other)),
        }
    }

    /// Tries to read a value as a list.
    pub fn as_list(&self) -> Result<&[Value], Error> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(mismatch(ValueKind::List, other)),
        }
    }

    /// Tries to read a value as a [`Dictionary`].
    pub fn as_dictionary(&self) -> Result<&Dictionary, Error> {
        match self {
            Value::Dictionary(d) => Ok(d),
            other => Err(mismatch(ValueKind::Dictionary, other)),
        }
    }

    /// Looks up `key` when this value is a dictionary.
    ///
    /// Returns [`None`] both for a missing key and for values that are not
    /// dictionaries.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Dictionary(d) => d.get(key),
            _ => None,
        }
    }

    /// Consumes a [`Value`], converting it to a value of type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// let s: String = Value::from("hi").into_rep().unwrap();
    /// assert_eq!(s, "hi");
    /// ```
    pub fn into_rep<T: TryFrom<Value, Error = Error>>(self) -> Result<T, Error> {
        T::try_from(self)
    }
}

fn fmt_dictionary(d: &Dictionary, indent: usize, f: &mut fmt::Formatter) -> fmt::Result {
    if d.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{")?;
    for (i, (k, v)) in d.iter().enumerate() {
        if i != 0 {
            f.write_str(",")?;
        }
        write!(f, "\n{:indent$}{:?}: ", "", k, indent = indent + 2)?;
        fmt_helper(v, indent + 2, f)?;
    }
    write!(f, "\n{:indent$}}}", "", indent = indent)
}

fn fmt_helper(v: &Value, indent: usize, f: &mut fmt::Formatter) -> fmt::Result {
    match v {
        Value::None => f.write_str("none"),
        Value::Boolean(b) => write!(f, "{}", b),
        Value::Int64(i) => write!(f, "{}", i),
        Value::String(s) => write!(f, "{:?}", s),
        Value::List(l) => {
            f.write_str("[")?;
            for (i, item) in l.iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                fmt_helper(item, indent, f)?;
            }
            f.write_str("]")
        }
        Value::Dictionary(d) => fmt_dictionary(d, indent, f),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt_helper(self, 0, f) }
}

impl Default for Value {
    fn default() -> Self { Value::None }
}

from_fn!(Value, bool, Value::Boolean);
from_fn!(Value, i64, Value::Int64);
from_fn!(Value, String, Value::String);
from_fn!(Value, Dictionary, Value::Dictionary);
from_as!(Value, i64, i8, i16, i32, u8, u16, u32);

impl From<&str> for Value {
    fn from(s: &str) -> Value { Value::String(s.to_owned()) }
}

impl From<()> for Value {
    fn from(_: ()) -> Value { Value::None }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Value { o.map_or(Value::None, T::into) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value { Value::List(v.into_iter().map(T::into).collect()) }
}

impl<T: Into<Value>> std::iter::FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Value {
        Value::List(iter.into_iter().map(T::into).collect())
    }
}

try_from_ctor!(Value, bool, Boolean, ValueKind::Boolean);
try_from_ctor!(Value, i64, Int64, ValueKind::Int64);
try_from_ctor!(Value, String, String, ValueKind::String);
try_from_ctor!(Value, Vec<Value>, List, ValueKind::List);
try_from_ctor!(Value, Dictionary, Dictionary, ValueKind::Dictionary);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn trivial_tests() {
        assert!(Value::None.is_none());
        assert_eq!(Value::from(5).as_i64().unwrap(), 5);
        assert!(Value::from(true).as_bool().unwrap());
        assert_eq!(Value::from("word").as_str().unwrap(), "word");
        assert_eq!(Value::from(Some(3u8)), Value::Int64(3));
        assert_eq!(Value::from(()), Value::None);
    }

    #[test]
    fn from_vec() {
        let v: Vec<i64> = vec![0, 1, 2, 3, 4];
        let list: Vec<Value> = Value::from(v.clone()).into_rep().unwrap();
        assert_eq!(list, v.into_iter().map(Value::Int64).collect::<Vec<_>>());
    }

    #[test]
    fn wrong_kind_is_a_type_mismatch() {
        let err = i64::try_from(Value::from("7")).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::TypeMismatch("expected int64, found string".to_string())
        );
    }

    #[test]
    fn tags_round_trip() {
        for tag in 0..=255u8 {
            match ValueKind::from_tag(tag) {
                Some(kind) => assert_eq!(kind.tag(), tag),
                None => assert!(tag > TAG_LIST),
            }
        }
    }

    #[test]
    fn display() {
        let v: Value = vec![Value::from(1), Value::from("a"), Value::None].into();
        assert_eq!(v.to_string(), "[1, \"a\", none]");

        let mut d = Dictionary::new();
        d.insert("k".to_string(), Value::from(false));
        assert_eq!(Value::from(d).to_string(), "{\n  \"k\": false\n}");
        assert_eq!(Value::from(Dictionary::new()).to_string(), "{}");
    }
}
