pub use crate::{
    dynamic::{
        decode_value, decode_value_full, encode_value, encode_value_full, ValueDeserializerExt,
        ValueSerializerExt,
    },
    errors::{Error, ErrorKind, Segment},
    limits::Limits,
    sink::{Serializer, SliceWriter},
    source::{Deserializer, Reader},
    structural::{
        decode, decode_exact, decode_full, decode_into, encode, encode_full, De,
        DeserializerExt, Ser, SerializerExt,
    },
    value::{Dictionary, Value, ValueKind},
    vecmap::VecMap,
    Wire,
};
pub use std::convert::TryFrom;
