//! proptest strategies for `vellum` values.

use proptest::prelude::*;
use vellum::value::{Dictionary, Value};

/// arbitrary dictionary key for use with proptest
pub fn arb_key() -> impl Strategy<Value = String> { ".{0,12}" }

/// arbitrary scalar (non-collection) `Value` for use with proptest
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Boolean),
        any::<String>().prop_map(Value::String),
        // integers
        any::<i64>().prop_map(Value::Int64),
        any::<i32>().prop_map(Value::from),
        any::<u8>().prop_map(Value::from),
        // edges
        Just(Value::Int64(i64::min_value())),
        Just(Value::Int64(i64::max_value())),
        Just(Value::Int64(-1)),
    ]
}

/// arbitrary `Value` for use with proptest
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(
        8,  // max depth
        64, // max nodes
        10, // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Value::List),
                prop::collection::btree_map(arb_key(), inner, 0..10)
                    .prop_map(|m| Value::Dictionary(Dictionary::from(m)))
            ]
        },
    )
}
