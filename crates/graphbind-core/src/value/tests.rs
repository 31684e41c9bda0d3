use super::*;
use serde_json::json;

#[test]
fn integers_prefer_signed_storage() {
    let value: Value = serde_json::from_str("[1, -2, 18446744073709551615, 2.5]").unwrap();

    assert_eq!(
        value,
        Value::List(vec![
            Value::Int(1),
            Value::Int(-2),
            Value::Uint(u64::MAX),
            Value::Float(2.5),
        ])
    );
}

#[test]
fn object_members_keep_wire_order() {
    let value: Value = serde_json::from_str(r#"{"b":1,"a":2,"c":{"z":null}}"#).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();

    assert_eq!(keys, ["b", "a", "c"]);
    assert_eq!(value.get("c").and_then(|c| c.get("z")), Some(&Value::Null));
}

#[test]
fn repeated_keys_keep_last_value() {
    let value: Value = serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    let members = value.as_object().unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members.get_index(0), Some((&"a".to_string(), &Value::Int(3))));
}

#[test]
fn serializes_back_to_the_same_json() {
    let doc = json!({
        "displayName": "Finance",
        "count": 3,
        "ratio": 0.5,
        "tags": ["x", null, true],
        "nested": {"k": "v"}
    });
    let value = Value::from(doc.clone());

    assert_eq!(serde_json::to_value(&value).unwrap(), doc);
}

#[test]
fn numeric_views() {
    assert_eq!(Value::Int(7).as_f64(), Some(7.0));
    assert_eq!(Value::Float(7.0).as_i64(), None);
    assert_eq!(Value::Uint(u64::MAX).as_i64(), None);
    assert_eq!(Value::from(5u64), Value::Int(5));
}

#[test]
fn tags_report_labels() {
    assert_eq!(Value::Null.tag(), ValueTag::Null);
    assert_eq!(Value::from("x").tag().label(), "Text");
    assert!(Value::Uint(1).tag().is_number());
    assert!(!Value::list(["a"]).tag().is_number());
}

#[test]
fn nesting_counts_container_levels() {
    let value = Value::from(json!({"a": [1, {"b": []}], "c": "flat"}));

    assert_eq!(Value::from(7).nesting(), 0);
    assert_eq!(Value::list(Vec::<Value>::new()).nesting(), 1);
    assert_eq!(value.nesting(), 4);
}
