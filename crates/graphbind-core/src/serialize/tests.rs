use super::*;
use crate::error::{DecodeErrorKind, EncodeErrorKind};
use serde_json::json;

fn keys(node: &dyn ParseNode) -> Vec<String> {
    node.object_entries()
        .map(|entries| entries.map(|(k, _)| k.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn json_and_value_nodes_agree() {
    let doc = json!({"id": "a", "n": 3, "big": 18_446_744_073_709_551_615_u64, "f": 1.5, "xs": [1, null]});
    let tree = Value::from(doc.clone());

    for node in [&doc as &dyn ParseNode, &tree as &dyn ParseNode] {
        assert_eq!(node.tag(), ValueTag::Object);
        assert_eq!(keys(node), ["id", "n", "big", "f", "xs"]);
        assert_eq!(node.child_node("id").and_then(|n| n.as_str()), Some("a"));
        assert_eq!(node.child_node("n").and_then(|n| n.as_i64()), Some(3));
        assert_eq!(node.child_node("big").map(|n| n.tag()), Some(ValueTag::Uint));
        assert_eq!(node.child_node("big").and_then(|n| n.as_i64()), None);
        assert_eq!(node.child_node("f").and_then(|n| n.as_f64()), Some(1.5));
        assert!(node.child_node("missing").is_none());

        let xs: Vec<_> = node
            .child_node("xs")
            .and_then(|n| n.collection_nodes())
            .map(|items| items.map(|n| n.tag()).collect())
            .unwrap_or_default();
        assert_eq!(xs, [ValueTag::Int, ValueTag::Null]);
        assert_eq!(node.to_value(), tree);
    }
}

#[test]
fn writer_builds_nested_tree() {
    let mut w = ValueWriter::new();
    w.start_object(None).unwrap();
    w.write_str(Some("displayName"), "Finance").unwrap();
    w.start_collection(Some("roles")).unwrap();
    w.start_object(None).unwrap();
    w.write_i64(Some("n"), 1).unwrap();
    w.end_object().unwrap();
    w.write_null(None).unwrap();
    w.end_collection().unwrap();
    w.write_bool(Some("ok"), true).unwrap();
    w.end_object().unwrap();

    let tree = w.into_value().unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"displayName": "Finance", "roles": [{"n": 1}, null], "ok": true})
    );
}

#[test]
fn writer_rejects_duplicate_keys() {
    let mut w = ValueWriter::new();
    w.start_object(None).unwrap();
    w.write_str(Some("id"), "a").unwrap();

    let err = w.write_str(Some("id"), "b").unwrap_err();
    assert_eq!(err.kind(), EncodeErrorKind::DuplicateKey);
}

#[test]
fn writer_rejects_non_finite_numbers() {
    let mut w = ValueWriter::new();
    w.start_object(None).unwrap();

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = w.write_f64(Some("amount"), bad).unwrap_err();
        assert_eq!(err.kind(), EncodeErrorKind::NonFiniteNumber);
    }
}

#[test]
fn writer_rejects_unbalanced_calls() {
    let mut w = ValueWriter::new();
    assert!(w.end_object().is_err());
    assert!(w.write_str(Some("k"), "v").is_err());

    w.start_collection(None).unwrap();
    assert!(w.write_str(Some("k"), "v").is_err());
    assert!(w.end_object().is_err());
    assert_eq!(
        w.into_value().unwrap_err().kind(),
        EncodeErrorKind::InvalidState
    );
}

#[test]
fn writer_rejects_second_root() {
    let mut w = ValueWriter::new();
    w.write_str(None, "first").unwrap();

    assert!(w.write_str(None, "second").is_err());
    assert_eq!(w.into_value().unwrap(), Value::from("first"));
}

#[test]
fn write_value_round_trips_untyped_trees() {
    let tree = Value::from(json!({"a": [1, {"b": null}], "c": "d"}));
    let mut w = ValueWriter::new();
    w.write_value(None, &tree).unwrap();

    assert_eq!(w.into_value().unwrap(), tree);
}

#[test]
fn context_bounds_nesting_depth() {
    let config = CodecConfig {
        max_depth: 2,
        ..CodecConfig::default()
    };
    let mut cx = CodecContext::new(&config);

    let reached: Result<usize, DecodeError> =
        cx.nested(|cx| cx.nested(|cx| Ok(cx.depth())));
    assert_eq!(reached.unwrap(), 2);
    assert_eq!(cx.depth(), 0);

    let err: Result<(), DecodeError> =
        cx.nested(|cx| cx.nested(|cx| cx.nested(|_| Ok(()))));
    assert_eq!(err.unwrap_err().kind(), DecodeErrorKind::DepthLimitExceeded);
    assert_eq!(cx.depth(), 0);
}

#[test]
fn null_root_is_rejected() {
    let err = deserialize::<String>(&Value::Null, &CodecConfig::default()).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Malformed);
}

#[test]
fn json_size_limit_applies_before_parsing() {
    let config = CodecConfig {
        max_document_bytes: 8,
        ..CodecConfig::default()
    };

    let err = json::from_str_with::<String>(r#""far too long""#, &config).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::SizeLimitExceeded { len: 14, max_bytes: 8 }
    ));
}

#[test]
fn malformed_json_is_reported() {
    let err = json::from_str::<String>("{not json").unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Malformed);
}
