//! Entitlement management: access packages, their catalogs, resources and
//! assignment policies.

use graphbind_core::prelude::*;

///
/// AccessPackage
///
/// A bundle of resource roles that users request together.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackage")]
pub struct AccessPackage {
    #[model(base)]
    entity: Entity,
    access_package_assignment_policies: Option<Vec<AccessPackageAssignmentPolicy>>,
    access_package_catalog: Option<AccessPackageCatalog>,
    access_package_resource_role_scopes: Option<Vec<AccessPackageResourceRoleScope>>,
    access_packages_incompatible_with: Option<Vec<AccessPackage>>,
    catalog_id: Option<String>,
    created_by: Option<String>,
    created_date_time: Option<Timestamp>,
    description: Option<String>,
    display_name: Option<String>,
    incompatible_access_packages: Option<Vec<AccessPackage>>,
    is_hidden: Option<bool>,
    is_role_scopes_visible: Option<bool>,
    modified_by: Option<String>,
    modified_date_time: Option<Timestamp>,
}

///
/// AccessPackageCatalog
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageCatalog")]
pub struct AccessPackageCatalog {
    #[model(base)]
    entity: Entity,
    access_package_resource_roles: Option<Vec<AccessPackageResourceRole>>,
    access_package_resource_scopes: Option<Vec<AccessPackageResourceScope>>,
    access_package_resources: Option<Vec<AccessPackageResource>>,
    access_packages: Option<Vec<AccessPackage>>,
    catalog_status: Option<String>,
    catalog_type: Option<String>,
    created_by: Option<String>,
    created_date_time: Option<Timestamp>,
    description: Option<String>,
    display_name: Option<String>,
    is_externally_visible: Option<bool>,
    modified_by: Option<String>,
    modified_date_time: Option<Timestamp>,
}

///
/// AccessPackageResource
///
/// A group, application or site added to a catalog.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageResource")]
pub struct AccessPackageResource {
    #[model(base)]
    entity: Entity,
    access_package_resource_environment: Option<AccessPackageResourceEnvironment>,
    access_package_resource_roles: Option<Vec<AccessPackageResourceRole>>,
    access_package_resource_scopes: Option<Vec<AccessPackageResourceScope>>,
    added_by: Option<String>,
    added_on: Option<Timestamp>,
    description: Option<String>,
    display_name: Option<String>,
    is_pending_onboarding: Option<bool>,
    origin_id: Option<String>,
    origin_system: Option<String>,
    resource_type: Option<String>,
    url: Option<String>,
}

///
/// AccessPackageResourceEnvironment
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageResourceEnvironment")]
pub struct AccessPackageResourceEnvironment {
    #[model(base)]
    entity: Entity,
    access_package_resources: Option<Vec<AccessPackageResource>>,
    created_by: Option<String>,
    created_date_time: Option<Timestamp>,
    description: Option<String>,
    display_name: Option<String>,
    is_default_environment: Option<bool>,
    modified_by: Option<String>,
    modified_date_time: Option<Timestamp>,
    origin_id: Option<String>,
    origin_system: Option<String>,
}

///
/// AccessPackageResourceRole
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageResourceRole")]
pub struct AccessPackageResourceRole {
    #[model(base)]
    entity: Entity,
    access_package_resource: Option<AccessPackageResource>,
    description: Option<String>,
    display_name: Option<String>,
    origin_id: Option<String>,
    origin_system: Option<String>,
}

///
/// AccessPackageResourceScope
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageResourceScope")]
pub struct AccessPackageResourceScope {
    #[model(base)]
    entity: Entity,
    access_package_resource: Option<AccessPackageResource>,
    description: Option<String>,
    display_name: Option<String>,
    is_root_scope: Option<bool>,
    origin_id: Option<String>,
    origin_system: Option<String>,
    role_origin_id: Option<String>,
    url: Option<String>,
}

///
/// AccessPackageResourceRoleScope
///
/// Pairs a resource role with the scope it applies to.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageResourceRoleScope")]
pub struct AccessPackageResourceRoleScope {
    #[model(base)]
    entity: Entity,
    access_package_resource_role: Option<AccessPackageResourceRole>,
    access_package_resource_scope: Option<AccessPackageResourceScope>,
    created_by: Option<String>,
    created_date_time: Option<Timestamp>,
    modified_by: Option<String>,
    modified_date_time: Option<Timestamp>,
}

///
/// AccessPackageAssignmentPolicy
///
/// Who may request an access package, for how long, and whether the
/// assignment can be extended.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.accessPackageAssignmentPolicy")]
pub struct AccessPackageAssignmentPolicy {
    #[model(base)]
    entity: Entity,
    access_package: Option<AccessPackage>,
    access_package_catalog: Option<AccessPackageCatalog>,
    access_package_id: Option<String>,
    can_extend: Option<bool>,
    created_by: Option<String>,
    created_date_time: Option<Timestamp>,
    description: Option<String>,
    display_name: Option<String>,
    duration_in_days: Option<i32>,
    expiration_date_time: Option<Timestamp>,
    modified_by: Option<String>,
    modified_date_time: Option<Timestamp>,
}
