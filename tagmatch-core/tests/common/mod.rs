// Test utilities and generators for tagmatch property-based testing

#![allow(dead_code)]

use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Generate discriminant tags
pub fn arb_tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

/// Generate payload field names
pub fn arb_field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

/// Generate scalar payload field values
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
    ]
}

/// Generate payload maps, before any discriminant field is added
pub fn arb_payload() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(arb_field_name(), arb_scalar(), 0..5)
        .prop_map(|fields| fields.into_iter().collect())
}

/// Generate well-formed tagged unions for the given discriminant key
pub fn arb_union(discriminant: &str) -> impl Strategy<Value = Value> {
    let discriminant = discriminant.to_owned();
    (arb_tag(), arb_payload()).prop_map(move |(tag, mut fields)| {
        fields.insert(discriminant.clone(), Value::String(tag));
        Value::Object(fields)
    })
}

/// Generate values that must fail the validity predicate for the given key
pub fn arb_non_union(discriminant: &str) -> impl Strategy<Value = Value> {
    let missing_key = discriminant.to_owned();
    let numeric_key = discriminant.to_owned();
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec(arb_scalar(), 0..4).prop_map(Value::Array),
        // object without the discriminant field
        arb_payload().prop_map(move |mut fields| {
            fields.remove(&missing_key);
            Value::Object(fields)
        }),
        // object with a numeric discriminant
        (arb_payload(), any::<i64>()).prop_map(move |(mut fields, n)| {
            fields.insert(numeric_key.clone(), json!(n));
            Value::Object(fields)
        }),
    ]
}
