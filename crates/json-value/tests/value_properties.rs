use json_value::{walk, Number, Value};
use proptest::prelude::*;

fn number_literal() -> impl Strategy<Value = Number> {
    (
        any::<bool>(),
        0u64..1_000_000,
        proptest::option::of(0u32..100_000),
        proptest::option::of((
            prop_oneof![Just('e'), Just('E')],
            prop_oneof![Just(""), Just("+"), Just("-")],
            0u32..400,
        )),
    )
        .prop_map(|(negative, int, frac, exp)| {
            let mut text = String::new();
            if negative {
                text.push('-');
            }
            text.push_str(&int.to_string());
            if let Some(frac) = frac {
                text.push('.');
                text.push_str(&frac.to_string());
            }
            if let Some((marker, sign, digits)) = exp {
                text.push(marker);
                text.push_str(sign);
                text.push_str(&digits.to_string());
            }
            text.parse::<Number>().unwrap()
        })
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::boolean),
        any::<i64>().prop_map(|n| Value::number(n)),
        any::<u64>().prop_map(|n| Value::number(n)),
        (-1.0e9f64..1.0e9).prop_map(Value::float),
        number_literal().prop_map(|n| Value::number(n)),
        "\\PC{0,12}".prop_map(|s| Value::string(s)),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|elements| Value::array(elements)),
            prop::collection::vec(("[a-z]{0,4}", inner), 0..6)
                .prop_map(|members| Value::object(members)),
        ]
    })
}

fn count_nodes(value: &Value) -> usize {
    match value {
        Value::Array(elements) => 1 + elements.iter().map(count_nodes).sum::<usize>(),
        Value::Object(props) => 1 + props.values().map(count_nodes).sum::<usize>(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn encode_decode_round_trip(value in arb_value()) {
        let text = value.marshal_json().unwrap();
        let decoded = Value::from_json_str(&text).unwrap();
        prop_assert_eq!(&decoded, &value);
        prop_assert_eq!(decoded.marshal_json().unwrap(), text);
    }

    #[test]
    fn clone_is_independent(value in arb_value()) {
        let original = value.clone();
        let mut copy = value.clone();
        walk_mut_all(&mut copy);
        prop_assert_eq!(&value, &original);
    }

    #[test]
    fn walk_visits_every_node_once(value in arb_value()) {
        let mut visits = 0usize;
        let mut first_is_root = None;
        walk(&value, |path, _| {
            if first_is_root.is_none() {
                first_is_root = Some(path.is_empty());
            }
            visits += 1;
            Ok::<_, ()>(())
        })
        .unwrap();
        prop_assert_eq!(visits, count_nodes(&value));
        prop_assert_eq!(first_is_root, Some(true));
    }

    #[test]
    fn number_text_survives_round_trip(number in number_literal()) {
        let text = Value::number(number.clone()).marshal_json().unwrap();
        let decoded = Value::from_json_str(&text).unwrap();
        prop_assert_eq!(decoded.number_get().as_str(), number.as_str());
    }
}

/// Overwrites every scalar and grows every container of `value`.
fn walk_mut_all(value: &mut Value) {
    match value {
        Value::Array(elements) => {
            elements.iter_mut().for_each(walk_mut_all);
            elements.push(Value::string("added"));
        }
        Value::Object(props) => {
            props.values_mut().for_each(walk_mut_all);
            props.insert("added".to_string(), Value::null());
        }
        scalar => scalar.assign(&Value::string("mutated")),
    }
}
