use graphbind_core::{
    config::{CodecConfig, EmptyCollectionPolicy},
    error::DecodeErrorKind,
    serialize::json,
};
use graphbind_models::prelude::*;
use serde_json::json as doc;

fn timestamp(text: &str) -> Timestamp {
    Timestamp::parse_rfc3339(text).unwrap()
}

fn reparse(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn catalog_serializes_scalars_and_empty_roles() {
    let mut catalog = AccessPackageCatalog::new()
        .with_display_name("Finance Catalog")
        .with_is_externally_visible(true);
    catalog.set_access_package_resource_roles(Some(Vec::new()));

    let text = json::to_string(&catalog).unwrap();

    assert!(text.contains(r#""displayName":"Finance Catalog""#));
    assert!(text.contains(r#""isExternallyVisible":true"#));
    assert!(text.contains(r#""accessPackageResourceRoles":[]"#));
    assert!(!text.contains("null"));
    assert!(!text.contains("accessPackageResourceScopes"));
}

#[test]
fn empty_roles_can_be_omitted() {
    let mut catalog = AccessPackageCatalog::new().with_display_name("Finance Catalog");
    catalog.set_access_package_resource_roles(Some(Vec::new()));

    let config = CodecConfig::default().with_empty_collections(EmptyCollectionPolicy::Omit);
    let text = json::to_string_with(&catalog, &config).unwrap();

    assert_eq!(reparse(&text), doc!({ "displayName": "Finance Catalog" }));
}

#[test]
fn policy_decodes_only_the_present_fields() {
    let policy: AccessPackageAssignmentPolicy =
        json::from_str(r#"{"durationInDays": 30, "canExtend": false}"#).unwrap();

    assert_eq!(policy.duration_in_days(), Some(30));
    assert_eq!(policy.can_extend(), Some(false));
    assert_eq!(policy.id(), None);
    assert_eq!(policy.display_name(), None);
    assert_eq!(policy.access_package(), None);
    assert_eq!(policy.expiration_date_time(), None);
    assert!(policy.additional_data().is_empty());

    let expected = AccessPackageAssignmentPolicy::new()
        .with_duration_in_days(30)
        .with_can_extend(false);
    assert_eq!(policy, expected);
}

#[test]
fn empty_document_is_a_valid_partial() {
    let resource: AccessPackageResource = json::from_str("{}").unwrap();
    assert_eq!(resource, AccessPackageResource::new());
}

#[test]
fn nested_failures_report_the_wire_path() {
    let input = doc!({
        "displayName": "Finance Catalog",
        "accessPackageResources": [
            { "displayName": "Payroll", "addedOn": "2024-01-02T03:04:05Z" },
            { "displayName": "Ledger", "addedOn": "yesterday" },
        ],
    });

    let err = json::from_str::<AccessPackageCatalog>(&input.to_string()).unwrap_err();

    assert_eq!(err.path(), Some("accessPackageResources[1].addedOn"));
    assert_eq!(err.kind(), DecodeErrorKind::InvalidScalar);
}

#[test]
fn wrong_scalar_type_is_a_mismatch() {
    let err = json::from_str::<AccessPackageAssignmentPolicy>(r#"{"durationInDays":"thirty"}"#)
        .unwrap_err();

    assert_eq!(err.path(), Some("durationInDays"));
    assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
}

#[test]
fn nested_graph_round_trips() {
    let role = AccessPackageResourceRole::new()
        .with_display_name("Reader")
        .with_origin_id("Reader_7f3e")
        .with_origin_system("SharePointOnline");

    let resource = AccessPackageResource::new()
        .with_display_name("Finance site")
        .with_added_on(timestamp("2024-02-29T23:59:59.250Z"))
        .with_resource_type("SharePoint Online Site")
        .with_access_package_resource_roles(vec![role.clone()]);

    let catalog = AccessPackageCatalog::new()
        .with_display_name("Finance Catalog")
        .with_is_externally_visible(false)
        .with_access_package_resources(vec![resource])
        .with_access_package_resource_roles(vec![role]);

    let mut package = AccessPackage::new()
        .with_display_name("Quarter close")
        .with_is_hidden(false)
        .with_created_date_time(timestamp("2024-03-01T09:00:00Z"))
        .with_access_package_catalog(catalog);
    package.set_id(Some("0b6e7c3a-5d49-4f6c-8f8e-2a0b7a3c1d11".to_string()));

    let policy = AccessPackageAssignmentPolicy::new()
        .with_display_name("Employees")
        .with_duration_in_days(365)
        .with_can_extend(true)
        .with_access_package(package.clone());

    let package = package.with_access_package_assignment_policies(vec![policy]);

    let text = json::to_string(&package).unwrap();
    let back: AccessPackage = json::from_str(&text).unwrap();

    assert_eq!(back, package);
    assert_eq!(json::to_string(&back).unwrap(), text);
}

#[test]
fn unknown_members_survive_a_round_trip() {
    let input = doc!({
        "id": "c-1",
        "@odata.etag": "W/\"1\"",
        "displayName": "Finance Catalog",
        "extensionAttributes": { "costCenter": [101, 202], "owner": null },
    });

    let catalog: AccessPackageCatalog = json::from_str(&input.to_string()).unwrap();

    let extra: Vec<_> = catalog.additional_data().keys().map(String::as_str).collect();
    assert_eq!(extra, ["@odata.etag", "extensionAttributes"]);
    assert_eq!(
        catalog.additional_data().get("@odata.etag"),
        Some(&Value::from("W/\"1\""))
    );

    let text = json::to_string(&catalog).unwrap();
    assert_eq!(reparse(&text), input);
}

#[test]
fn unknown_members_can_be_dropped() {
    let config = CodecConfig::default().with_preserve_additional_data(false);
    let catalog: AccessPackageCatalog =
        json::from_str_with(r#"{"displayName":"X","@odata.etag":"W/1"}"#, &config).unwrap();

    assert_eq!(catalog.display_name(), Some("X"));
    assert!(catalog.additional_data().is_empty());
}

#[test]
fn unmodelled_policy_settings_round_trip_as_additional_data() {
    let input = doc!({
        "displayName": "Employees",
        "requestorSettings": { "scopeType": "AllExistingDirectoryMemberUsers", "acceptRequests": true },
        "questions": [{ "isRequired": true, "text": { "defaultText": "Why?" } }],
    });

    let policy: AccessPackageAssignmentPolicy = json::from_str(&input.to_string()).unwrap();

    let extra: Vec<_> = policy.additional_data().keys().map(String::as_str).collect();
    assert_eq!(extra, ["requestorSettings", "questions"]);
    assert_eq!(reparse(&json::to_string(&policy).unwrap()), input);
}
