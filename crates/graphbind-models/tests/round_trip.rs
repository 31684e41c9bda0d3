use graphbind_core::{
    config::{CodecConfig, DiscriminatorPolicy, EmptyCollectionPolicy},
    error::DecodeErrorKind,
    serialize::json,
};
use graphbind_models::prelude::*;
use proptest::prelude::*;

fn customer_payment() -> impl Strategy<Value = CustomerPayment> {
    (
        proptest::option::of(-1.0e9..1.0e9f64),
        proptest::option::of(any::<u128>()),
        proptest::option::of("[A-Za-z0-9 -]{0,16}"),
        proptest::option::of((1900i32..2100, 1u32..=12, 1u32..=28)),
        proptest::option::of(any::<i32>()),
        proptest::option::of(0i64..4_000_000_000),
    )
        .prop_map(|(amount, invoice, comment, posted, line, modified)| {
            let mut payment = CustomerPayment::new();
            payment.set_amount(amount);
            payment.set_applies_to_invoice_id(invoice.map(Uuid::from_u128));
            payment.set_comment(comment);
            payment.set_posting_date(posted.and_then(|(y, m, d)| Date::new_checked(y, m, d)));
            payment.set_line_number(line);
            payment.set_last_modified_date_time(modified.and_then(Timestamp::from_unix_seconds));
            payment
        })
}

proptest! {
    #[test]
    fn customer_payments_round_trip(payment in customer_payment()) {
        let text = json::to_string(&payment).unwrap();
        let back: CustomerPayment = json::from_str(&text).unwrap();

        prop_assert_eq!(back, payment);
    }

    #[test]
    fn skip_keys_keep_document_order(keys in proptest::collection::vec("[A-Za-z]{1,10}", 0..8)) {
        let profile = DepEnrollmentBaseProfile::new().with_enabled_skip_keys(keys.clone());

        let text = json::to_string(&profile).unwrap();
        let back: DepEnrollmentBaseProfile = json::from_str(&text).unwrap();

        prop_assert_eq!(back.enabled_skip_keys(), Some(keys.as_slice()));
    }
}

#[test]
fn amounts_keep_every_bit() {
    for amount in [95_293_709.596_347_17, 0.1 + 0.2, -1.0e-300, f64::MAX] {
        let payment = CustomerPayment::new().with_amount(amount);

        let back: CustomerPayment = json::from_str(&json::to_string(&payment).unwrap()).unwrap();

        assert_eq!(back.amount().map(f64::to_bits), Some(amount.to_bits()), "{amount:e}");
    }
}

#[test]
fn any_entity_dispatches_on_the_document_tag() {
    let cases = [
        ("#microsoft.graph.accessPackage", "AccessPackage"),
        ("#microsoft.graph.accessPackageCatalog", "AccessPackageCatalog"),
        ("#microsoft.graph.customerPayment", "CustomerPayment"),
        ("#microsoft.graph.depIOSEnrollmentProfile", "DepIosEnrollmentProfile"),
        ("#microsoft.graph.deviceShellScript", "DeviceShellScript"),
        ("#microsoft.graph.microsoftTunnelSite", "MicrosoftTunnelSite"),
        ("#microsoft.graph.entity", "Entity"),
    ];

    for (tag, type_name) in cases {
        let text = format!(r#"{{"@odata.type":"{tag}","id":"x"}}"#);
        let any: AnyEntity = json::from_str(&text).unwrap();

        assert_eq!(any.type_name(), type_name, "tag {tag}");
        assert_eq!(any.odata_type(), Some(tag));
        assert_eq!(any.entity().id(), Some("x"));
    }
}

#[test]
fn any_entity_keeps_unmodelled_documents() {
    let text = r##"{"@odata.type":"#microsoft.graph.user","id":"u-1","userPrincipalName":"ada@contoso.com"}"##;
    let any: AnyEntity = json::from_str(text).unwrap();

    let AnyEntity::Entity(entity) = &any else {
        panic!("expected a bare entity, got {}", any.type_name());
    };
    assert_eq!(entity.odata_type(), Some("#microsoft.graph.user"));
    assert_eq!(
        entity.additional_data().get("userPrincipalName"),
        Some(&Value::from("ada@contoso.com"))
    );

    let back: serde_json::Value = serde_json::from_str(&json::to_string(&any).unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(back, original);
}

#[test]
fn toml_config_drives_decoding_and_encoding() {
    let config = CodecConfig::from_toml_str(
        r#"
        discriminator = "strict"
        empty_collections = "omit"
        preserve_additional_data = false
        max_depth = 8
        "#,
    )
    .unwrap();

    assert_eq!(config.discriminator, DiscriminatorPolicy::Strict);
    assert_eq!(config.empty_collections, EmptyCollectionPolicy::Omit);

    let err = json::from_str_with::<AnyEntity>(
        r##"{"@odata.type":"#microsoft.graph.user"}"##,
        &config,
    )
    .unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::UnresolvedDiscriminator);

    let site = MicrosoftTunnelSite::new()
        .with_display_name("Edge")
        .with_role_scope_tag_ids(Vec::<String>::new());
    let text = json::to_string_with(&site, &config).unwrap();
    assert_eq!(text, r#"{"displayName":"Edge"}"#);
}

#[test]
fn depth_limit_applies_to_nested_models() {
    let config = CodecConfig::default().with_max_depth(2);
    let text = r#"{"accessPackageCatalog":{"accessPackages":[{"displayName":"deep"}]}}"#;

    let err = json::from_str_with::<AccessPackage>(text, &config).unwrap_err();

    assert_eq!(err.kind(), DecodeErrorKind::DepthLimitExceeded);
    assert_eq!(err.path(), Some("accessPackageCatalog.accessPackages[0]"));
}

#[test]
fn oversized_documents_are_rejected_before_parsing() {
    let config = CodecConfig {
        max_document_bytes: 16,
        ..CodecConfig::default()
    };

    let err = json::from_str_with::<CustomerPayment>(r#"{"comment":"far too long"}"#, &config)
        .unwrap_err();

    assert_eq!(err.kind(), DecodeErrorKind::SizeLimitExceeded);
}
