use super::types::{DepTokenType, ITunesPairingMode};
use graphbind_core::{model_family, prelude::*};

///
/// EnrollmentProfile
///
/// Root of the enrollment profile hierarchy. Every level stamps its own
/// `@odata.type` on construction.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.enrollmentProfile", polymorphic)]
pub struct EnrollmentProfile {
    #[model(base)]
    entity: Entity,
    configuration_endpoint_url: Option<String>,
    description: Option<String>,
    display_name: Option<String>,
    enable_authentication_via_company_portal: Option<bool>,
    require_company_portal_on_setup_assistant_enrolled_devices: Option<bool>,
    requires_user_authentication: Option<bool>,
}

///
/// DepEnrollmentProfile
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.depEnrollmentProfile", polymorphic)]
pub struct DepEnrollmentProfile {
    #[model(base)]
    profile: EnrollmentProfile,
    apple_id_disabled: Option<bool>,
    apple_pay_disabled: Option<bool>,
    await_device_configured_confirmation: Option<bool>,
    diagnostics_disabled: Option<bool>,
    #[model(rename = "enableSharedIPad")]
    enable_shared_ipad: Option<bool>,
    is_default: Option<bool>,
    is_mandatory: Option<bool>,
    #[model(copy)]
    i_tunes_pairing_mode: Option<ITunesPairingMode>,
    location_disabled: Option<bool>,
    #[model(rename = "macOSFileVaultDisabled")]
    mac_os_file_vault_disabled: Option<bool>,
    #[model(rename = "macOSRegistrationDisabled")]
    mac_os_registration_disabled: Option<bool>,
    pass_code_disabled: Option<bool>,
    profile_removal_disabled: Option<bool>,
    restore_blocked: Option<bool>,
    restore_from_android_disabled: Option<bool>,
    #[model(rename = "sharedIPadMaximumUserCount")]
    shared_ipad_maximum_user_count: Option<i32>,
    siri_disabled: Option<bool>,
    supervised_mode_enabled: Option<bool>,
    support_department: Option<String>,
    support_phone_number: Option<String>,
    terms_and_conditions_disabled: Option<bool>,
    touch_id_disabled: Option<bool>,
    zoom_disabled: Option<bool>,
}

///
/// DepEnrollmentBaseProfile
///
/// Settings shared by the iOS and macOS DEP profiles.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.depEnrollmentBaseProfile", polymorphic)]
pub struct DepEnrollmentBaseProfile {
    #[model(base)]
    profile: EnrollmentProfile,
    apple_id_disabled: Option<bool>,
    apple_pay_disabled: Option<bool>,
    configuration_web_url: Option<bool>,
    device_name_template: Option<String>,
    diagnostics_disabled: Option<bool>,
    display_tone_setup_disabled: Option<bool>,
    enabled_skip_keys: Option<Vec<String>>,
    is_default: Option<bool>,
    is_mandatory: Option<bool>,
    location_disabled: Option<bool>,
    privacy_pane_disabled: Option<bool>,
    profile_removal_disabled: Option<bool>,
    restore_blocked: Option<bool>,
    screen_time_screen_disabled: Option<bool>,
    siri_disabled: Option<bool>,
    supervised_mode_enabled: Option<bool>,
    support_department: Option<String>,
    support_phone_number: Option<String>,
    terms_and_conditions_disabled: Option<bool>,
    touch_id_disabled: Option<bool>,
}

///
/// DepIosEnrollmentProfile
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.depIOSEnrollmentProfile", polymorphic)]
pub struct DepIosEnrollmentProfile {
    #[model(base)]
    base: DepEnrollmentBaseProfile,
    appearance_screen_disabled: Option<bool>,
    await_device_configured_confirmation: Option<bool>,
    carrier_activation_url: Option<String>,
    company_portal_vpp_token_id: Option<String>,
    device_to_device_migration_disabled: Option<bool>,
    #[model(rename = "enableSharedIPad")]
    enable_shared_ipad: Option<bool>,
    enable_single_app_enrollment_mode: Option<bool>,
    express_language_screen_disabled: Option<bool>,
    force_temporary_session: Option<bool>,
    home_button_screen_disabled: Option<bool>,
    i_message_and_face_time_screen_disabled: Option<bool>,
    #[model(copy)]
    i_tunes_pairing_mode: Option<ITunesPairingMode>,
    on_boarding_screen_disabled: Option<bool>,
    pass_code_disabled: Option<bool>,
    passcode_lock_grace_period_in_seconds: Option<i32>,
    preferred_language_screen_disabled: Option<bool>,
    restore_completed_screen_disabled: Option<bool>,
    restore_from_android_disabled: Option<bool>,
    #[model(rename = "sharedIPadMaximumUserCount")]
    shared_ipad_maximum_user_count: Option<i32>,
    sim_setup_screen_disabled: Option<bool>,
    software_update_screen_disabled: Option<bool>,
    temporary_session_timeout_in_seconds: Option<i32>,
    update_complete_screen_disabled: Option<bool>,
    user_session_timeout_in_seconds: Option<i32>,
    userless_shared_aad_mode_enabled: Option<bool>,
    watch_migration_screen_disabled: Option<bool>,
    welcome_screen_disabled: Option<bool>,
    zoom_disabled: Option<bool>,
}

///
/// DepMacOsEnrollmentProfile
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.depMacOSEnrollmentProfile", polymorphic)]
pub struct DepMacOsEnrollmentProfile {
    #[model(base)]
    base: DepEnrollmentBaseProfile,
    accessibility_screen_disabled: Option<bool>,
    auto_unlock_with_watch_disabled: Option<bool>,
    choose_your_lock_screen_disabled: Option<bool>,
    dont_auto_populate_primary_account_info: Option<bool>,
    enable_restrict_editing: Option<bool>,
    file_vault_disabled: Option<bool>,
    i_cloud_diagnostics_disabled: Option<bool>,
    i_cloud_storage_disabled: Option<bool>,
    is_local_primary_account: Option<bool>,
    is_primary_user: Option<bool>,
    lock_primary_account_info: Option<bool>,
    managed_local_user_short_name: Option<String>,
    pass_code_disabled: Option<bool>,
    prefill_account_info: Option<bool>,
    primary_account_full_name: Option<String>,
    primary_account_user_name: Option<String>,
    registration_disabled: Option<bool>,
    request_requires_network_tether: Option<bool>,
    set_primary_setup_account_as_regular_user: Option<bool>,
    skip_primary_setup_account_creation: Option<bool>,
    zoom_disabled: Option<bool>,
}

model_family! {
    /// Any enrollment profile, resolved from its `@odata.type`.
    pub enum EnrollmentProfileKind: Base(EnrollmentProfile) {
        DepEnrollmentProfile(DepEnrollmentProfile),
        DepEnrollmentBaseProfile(DepEnrollmentBaseProfile),
        DepIosEnrollmentProfile(DepIosEnrollmentProfile),
        DepMacOsEnrollmentProfile(DepMacOsEnrollmentProfile),
    }
}

model_family! {
    pub enum DepEnrollmentBaseProfileKind: Base(DepEnrollmentBaseProfile) {
        DepIosEnrollmentProfile(DepIosEnrollmentProfile),
        DepMacOsEnrollmentProfile(DepMacOsEnrollmentProfile),
    }
}

///
/// DepOnboardingSetting
///
/// An Apple DEP token and the profiles synced through it.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.depOnboardingSetting")]
pub struct DepOnboardingSetting {
    #[model(base)]
    entity: Entity,
    apple_identifier: Option<String>,
    data_sharing_consent_granted: Option<bool>,
    default_ios_enrollment_profile: Option<DepIosEnrollmentProfile>,
    default_mac_os_enrollment_profile: Option<DepMacOsEnrollmentProfile>,
    enrollment_profiles: Option<Vec<EnrollmentProfileKind>>,
    last_modified_date_time: Option<Timestamp>,
    last_successful_sync_date_time: Option<Timestamp>,
    last_sync_error_code: Option<i32>,
    last_sync_triggered_date_time: Option<Timestamp>,
    role_scope_tag_ids: Option<Vec<String>>,
    share_token_with_school_data_sync_service: Option<bool>,
    synced_device_count: Option<i32>,
    token_expiration_date_time: Option<Timestamp>,
    token_name: Option<String>,
    #[model(copy)]
    token_type: Option<DepTokenType>,
}
