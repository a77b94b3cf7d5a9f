//! Encoding then decoding gives back the same envelope, and decoding survives
//! whatever it is handed.

use consolebridge_envelope::{
    EXCEPTION_KEY, LOG_LEVEL_KEY, LogEnvelope, LogLevel, PAYLOAD_KEY, Payload, TYPE_KEY, decode,
    encode, select_channel,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        4 => (0_u64..6).prop_map(LogLevel::from_ordinal),
        1 => any::<u64>().prop_map(LogLevel::from_ordinal),
    ]
}

fn value_tree(leaf: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

// Floats are left out: JSON text does not promise bit-exact float round trips.
fn json_value() -> impl Strategy<Value = Value> {
    value_tree(
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<u64>().prop_map(Value::from),
            ".*".prop_map(Value::String),
        ]
        .boxed(),
    )
}

// Anything JSON can hold, weighted towards values near the wire ordinals.
fn any_json_value() -> impl Strategy<Value = Value> {
    value_tree(
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (0_u64..8).prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<u64>().prop_map(Value::from),
            any::<f64>().prop_map(Value::from),
            ".*".prop_map(Value::String),
        ]
        .boxed(),
    )
}

fn wire_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(TYPE_KEY.to_string()),
        Just(LOG_LEVEL_KEY.to_string()),
        Just(PAYLOAD_KEY.to_string()),
        Just(EXCEPTION_KEY.to_string()),
        "[A-Za-z]{1,8}",
    ]
}

fn wire_object() -> impl Strategy<Value = String> {
    prop::collection::btree_map(wire_key(), any_json_value(), 0..6).prop_map(|fields| {
        Value::Object(fields.into_iter().collect::<Map<_, _>>()).to_string()
    })
}

fn payload() -> impl Strategy<Value = Payload> {
    prop_oneof![
        json_value().prop_map(Payload::Scalar),
        prop::collection::vec(json_value(), 0..5).prop_map(Payload::Tabular),
    ]
}

fn envelope() -> impl Strategy<Value = LogEnvelope> {
    (level(), payload(), prop::option::of(".*")).prop_map(|(level, payload, exception)| {
        LogEnvelope {
            level,
            payload,
            exception,
        }
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(envelope in envelope()) {
        let encoded = encode(&envelope).unwrap();
        let decoded = decode(Some(&encoded)).unwrap();

        prop_assert_eq!(&decoded, &envelope);
        prop_assert_eq!(
            decoded.channel(),
            select_channel(envelope.kind(), envelope.level)
        );
    }

    #[test]
    fn decode_never_panics(raw in prop::option::of(".*")) {
        let _ = decode(raw.as_deref());
    }

    #[test]
    fn decode_never_panics_on_wire_shaped_objects(raw in wire_object()) {
        let _ = decode(Some(&raw));
    }
}
