use super::*;
use crate::{
    config::CodecConfig,
    error::{DecodeErrorKind, EncodeErrorKind},
    obs::sink::{CodecEvent, CodecSink, with_sink},
    serialize::ValueWriter,
    types::{Blob, Date, IsoDuration, TimeOfDay, Timestamp, Uuid},
    value::Value,
};
use proptest::prelude::*;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};

crate::graph_enum! {
    enum Shade {
        Light => "light",
        Dark => "dark",
        HighContrast => "highContrast",
    }
}

fn decode<T: FieldCodec>(doc: &serde_json::Value) -> Result<Option<T>, DecodeError> {
    let config = CodecConfig::default();
    let mut cx = CodecContext::new(&config);

    T::decode(doc, &mut cx)
}

fn encode<T: FieldCodec>(value: &T) -> Value {
    let config = CodecConfig::default();
    let mut cx = CodecContext::new(&config);
    let mut writer = ValueWriter::new();
    value.encode(None, &mut writer, &mut cx).unwrap();

    writer.into_value().unwrap()
}

fn kind_of<T: FieldCodec + std::fmt::Debug>(doc: &serde_json::Value) -> DecodeErrorKind {
    decode::<T>(doc).unwrap_err().kind()
}

#[derive(Default)]
struct Tokens(RefCell<Vec<String>>);

impl CodecSink for Tokens {
    fn record(&self, event: &CodecEvent<'_>) {
        if let CodecEvent::UnknownEnumToken { token, .. } = event {
            self.0.borrow_mut().push((*token).to_string());
        }
    }
}

#[test]
fn null_decodes_to_none_for_every_scalar() {
    let null = json!(null);

    assert_eq!(decode::<String>(&null).unwrap(), None);
    assert_eq!(decode::<bool>(&null).unwrap(), None);
    assert_eq!(decode::<i32>(&null).unwrap(), None);
    assert_eq!(decode::<f64>(&null).unwrap(), None);
    assert_eq!(decode::<Timestamp>(&null).unwrap(), None);
    assert_eq!(decode::<Blob>(&null).unwrap(), None);
    assert_eq!(decode::<Shade>(&null).unwrap(), None);
    assert_eq!(decode::<Value>(&null).unwrap(), None);
}

#[test]
fn wrong_json_type_is_a_type_mismatch() {
    assert_eq!(kind_of::<String>(&json!(5)), DecodeErrorKind::TypeMismatch);
    assert_eq!(kind_of::<bool>(&json!("true")), DecodeErrorKind::TypeMismatch);
    assert_eq!(kind_of::<i64>(&json!("30")), DecodeErrorKind::TypeMismatch);
    assert_eq!(kind_of::<f64>(&json!([1.0])), DecodeErrorKind::TypeMismatch);
    assert_eq!(kind_of::<Date>(&json!(20_240_101)), DecodeErrorKind::TypeMismatch);
    assert_eq!(kind_of::<Shade>(&json!(1)), DecodeErrorKind::TypeMismatch);
}

#[test]
fn integers_reject_fractions_and_overflow() {
    assert_eq!(decode::<i32>(&json!(30)).unwrap(), Some(30));
    assert_eq!(kind_of::<i32>(&json!(30.5)), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<i32>(&json!(4_294_967_296_i64)), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<i64>(&json!(u64::MAX)), DecodeErrorKind::InvalidScalar);
    assert_eq!(decode::<i64>(&json!(i64::MIN)).unwrap(), Some(i64::MIN));
}

#[test]
fn floats_accept_any_number() {
    assert_eq!(decode::<f64>(&json!(3)).unwrap(), Some(3.0));
    assert_eq!(decode::<f64>(&json!(-0.25)).unwrap(), Some(-0.25));
}

#[test]
fn malformed_text_scalars_are_invalid() {
    assert_eq!(kind_of::<Timestamp>(&json!("yesterday")), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<Date>(&json!("2023-02-30")), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<TimeOfDay>(&json!("25:00:00")), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<IsoDuration>(&json!("P1Q")), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<Uuid>(&json!("not-a-uuid")), DecodeErrorKind::InvalidScalar);
    assert_eq!(kind_of::<Blob>(&json!("%%%")), DecodeErrorKind::InvalidScalar);
}

#[test]
fn text_scalars_write_canonical_strings() {
    let ts: Timestamp = "2014-01-01T00:00:00Z".parse().unwrap();
    let id = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);

    assert_eq!(encode(&ts), Value::from("2014-01-01T00:00:00Z"));
    assert_eq!(encode(&id), Value::from("01234567-89ab-cdef-0123-456789abcdef"));
    assert_eq!(encode(&IsoDuration::from_minutes(90)), Value::from("PT90M"));
    assert_eq!(encode(&Blob::from(b"hi")), Value::from("aGk="));
    assert_eq!(encode(&Shade::HighContrast), Value::from("highContrast"));
}

#[test]
fn timestamps_past_year_9999_refuse_to_encode() {
    let config = CodecConfig::default();
    let mut cx = CodecContext::new(&config);
    let far = Timestamp::new(chrono::DateTime::from_timestamp(253_402_300_800, 0).unwrap());

    let err = far
        .encode(None, &mut ValueWriter::new(), &mut cx)
        .unwrap_err();
    assert_eq!(err.kind(), EncodeErrorKind::OutOfRange);

    let last = Timestamp::from_unix_seconds(253_402_300_799).unwrap();
    assert_eq!(encode(&last), Value::from("9999-12-31T23:59:59Z"));
}

#[test]
fn unknown_enum_token_decodes_to_none_and_is_reported() {
    let sink = Rc::new(Tokens::default());

    let decoded = with_sink(sink.clone(), || decode::<Shade>(&json!("sepia")));

    assert_eq!(decoded.unwrap(), None);
    assert_eq!(*sink.0.borrow(), ["sepia"]);
}

#[test]
fn enum_tokens_are_case_sensitive() {
    assert_eq!(decode::<Shade>(&json!("dark")).unwrap(), Some(Shade::Dark));
    assert_eq!(decode::<Shade>(&json!("Dark")).unwrap(), None);
    assert_eq!("highContrast".parse::<Shade>(), Ok(Shade::HighContrast));
    assert!("HIGHCONTRAST".parse::<Shade>().is_err());
    assert_eq!(Shade::Light.to_string(), "light");
    assert_eq!(<Shade as EnumValue>::VARIANTS.len(), 3);
}

#[test]
fn collections_drop_nulls_and_unknown_tokens() {
    let config = CodecConfig::default();
    let mut cx = CodecContext::new(&config);

    let shades =
        decode_collection::<Shade>(&json!(["dark", null, "sepia", "light"]), &mut cx).unwrap();
    assert_eq!(shades, Some(vec![Shade::Dark, Shade::Light]));

    let names = decode_collection::<String>(&json!(["a", null, "b"]), &mut cx).unwrap();
    assert_eq!(names, Some(vec!["a".to_string(), "b".to_string()]));

    assert_eq!(decode_collection::<String>(&json!(null), &mut cx).unwrap(), None);
}

#[test]
fn collection_errors_carry_the_index() {
    let config = CodecConfig::default();
    let mut cx = CodecContext::new(&config);

    let err = decode_collection::<i32>(&json!([1, 2, "three"]), &mut cx).unwrap_err();
    assert_eq!(err.path(), Some("[2]"));
    assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);

    let err = decode_collection::<i32>(&json!({"a": 1}), &mut cx).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
}

#[test]
fn untyped_values_pass_through() {
    let doc = json!({"nested": [1, "two", {"three": 3.5}]});
    let value = decode::<Value>(&doc).unwrap().unwrap();

    assert_eq!(value, Value::from(doc));
    assert_eq!(encode(&value), value);
}

proptest! {
    #[test]
    fn text_and_integers_survive_encode_decode(text in ".*", n in any::<i64>()) {
        let text_value = encode(&text);
        let int_value = encode(&n);

        prop_assert_eq!(decode::<String>(&serde_json::to_value(&text_value).unwrap()).unwrap(), Some(text));
        prop_assert_eq!(decode::<i64>(&serde_json::to_value(&int_value).unwrap()).unwrap(), Some(n));
    }

    #[test]
    fn timestamps_survive_encode_decode(secs in -62_135_596_800_i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
        let dt = chrono::DateTime::from_timestamp(secs, nanos).unwrap();
        let ts = Timestamp::from(dt);
        let doc = serde_json::to_value(encode(&ts)).unwrap();

        prop_assert_eq!(decode::<Timestamp>(&doc).unwrap(), Some(ts));
    }
}
