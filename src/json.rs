//! Bridge between parsed JSON documents and the [dynamic codec](crate::dynamic).
//!
//! JSON has no integer type of its own, so only numbers that are exactly representable
//! as an `i64` carry over; floats and larger integers are rejected with
//! [`ErrorKind::TypeMismatch`](crate::errors::ErrorKind::TypeMismatch).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vellum::{json::encode_json, prelude::*};
//!
//! let doc = json!({ "id": 7, "tags": ["a", "b"], "parent": null });
//!
//! let out = &mut Vec::new();
//! encode_json(&doc, out).unwrap();
//!
//! let v = decode_value_full(out).unwrap();
//! assert_eq!(serde_json::Value::from(v), doc);
//!
//! // floats have no counterpart
//! assert!(encode_json(&json!([1.5]), &mut Vec::<u8>::new()).is_err());
//! ```

use crate::{
    dynamic::{constants::*, ser::str_len, ValueSerializerExt},
    errors::Error,
    sink::Serializer,
    value::{Dictionary, Value},
};
use serde_json::{Map, Number, Value as Json};
use std::convert::TryFrom;

fn int_of(n: &Number) -> Result<i64, Error> {
    n.as_i64()
        .ok_or_else(|| Error::type_mismatch(format!("number {} does not fit in int64", n)))
}

fn sorted(map: &Map<String, Json>) -> Vec<(&String, &Json)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Encodes a JSON document in the dynamic format without building a [`Value`] first.
///
/// Object members are written in key order, so the output is the same as encoding the
/// document's [`Value`] form.
///
/// # Errors
///
/// Fails with [`ErrorKind::TypeMismatch`](crate::errors::ErrorKind::TypeMismatch) on
/// numbers that are not `i64`, with the path to the offending node.
pub fn encode_json<S: Serializer>(j: &Json, out: &mut S) -> Result<(), Error> {
    match j {
        Json::Null => out.put_tag(TAG_NONE),
        Json::Bool(b) => {
            out.put_tag(TAG_BOOLEAN)?;
            out.put_u8(*b as u8)
        }
        Json::Number(n) => {
            let i = int_of(n)?;
            out.put_tag(TAG_INT64)?;
            out.put_i64_le(i)
        }
        Json::String(s) => {
            str_len(s)?;
            out.put_tag(TAG_STRING)?;
            out.put_str(s)
        }
        Json::Array(a) => {
            out.put_tag(TAG_LIST)?;
            out.put_count(a.len())?;
            for (i, item) in a.iter().enumerate() {
                encode_json(item, out).map_err(|e| e.at_index(i))?;
            }
            Ok(())
        }
        Json::Object(m) => {
            out.put_tag(TAG_DICTIONARY)?;
            out.put_count(m.len())?;
            for (k, item) in sorted(m) {
                out.put_str(k).map_err(|e| e.at_key(k.as_str()))?;
                encode_json(item, out).map_err(|e| e.at_key(k.as_str()))?;
            }
            Ok(())
        }
    }
}

impl TryFrom<Json> for Value {
    type Error = Error;

    fn try_from(j: Json) -> Result<Value, Error> {
        Ok(match j {
            Json::Null => Value::None,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => Value::Int64(int_of(&n)?),
            Json::String(s) => Value::String(s),
            Json::Array(a) => Value::List(
                a.into_iter()
                    .enumerate()
                    .map(|(i, item)| Value::try_from(item).map_err(|e| e.at_index(i)))
                    .collect::<Result<_, _>>()?,
            ),
            Json::Object(m) => {
                let mut d = Dictionary::new();
                for (k, item) in m {
                    match Value::try_from(item) {
                        Ok(v) => {
                            d.insert(k, v);
                        }
                        Err(e) => return Err(e.at_key(k)),
                    }
                }
                Value::Dictionary(d)
            }
        })
    }
}

impl From<Value> for Json {
    fn from(v: Value) -> Json {
        match v {
            Value::None => Json::Null,
            Value::Boolean(b) => Json::Bool(b),
            Value::Int64(i) => Json::Number(i.into()),
            Value::String(s) => Json::String(s),
            Value::List(l) => Json::Array(l.into_iter().map(Json::from).collect()),
            Value::Dictionary(d) => {
                Json::Object(d.into_iter().map(|(k, v)| (k, Json::from(v))).collect())
            }
        }
    }
}
