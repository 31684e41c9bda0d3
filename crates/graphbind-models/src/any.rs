use crate::{
    access_package::{
        AccessPackage, AccessPackageAssignmentPolicy, AccessPackageCatalog, AccessPackageResource,
        AccessPackageResourceEnvironment, AccessPackageResourceRole,
        AccessPackageResourceRoleScope, AccessPackageResourceScope,
    },
    device_management::{
        DepEnrollmentBaseProfile, DepEnrollmentProfile, DepIosEnrollmentProfile,
        DepMacOsEnrollmentProfile, DepOnboardingSetting, DeviceShellScript, EnrollmentProfile,
        MicrosoftTunnelSite,
    },
    financials::CustomerPayment,
};
use graphbind_core::{entity::Entity, model_family};

model_family! {
    /// Top-level document family. A document whose tag names no model in
    /// this crate decodes as a bare [`Entity`] (lenient policy) with every
    /// member kept as additional data.
    pub enum AnyEntity: Entity(Entity) {
        AccessPackage(AccessPackage),
        AccessPackageAssignmentPolicy(AccessPackageAssignmentPolicy),
        AccessPackageCatalog(AccessPackageCatalog),
        AccessPackageResource(AccessPackageResource),
        AccessPackageResourceEnvironment(AccessPackageResourceEnvironment),
        AccessPackageResourceRole(AccessPackageResourceRole),
        AccessPackageResourceRoleScope(AccessPackageResourceRoleScope),
        AccessPackageResourceScope(AccessPackageResourceScope),
        CustomerPayment(CustomerPayment),
        DepEnrollmentBaseProfile(DepEnrollmentBaseProfile),
        DepEnrollmentProfile(DepEnrollmentProfile),
        DepIosEnrollmentProfile(DepIosEnrollmentProfile),
        DepMacOsEnrollmentProfile(DepMacOsEnrollmentProfile),
        DepOnboardingSetting(DepOnboardingSetting),
        DeviceShellScript(DeviceShellScript),
        EnrollmentProfile(EnrollmentProfile),
        MicrosoftTunnelSite(MicrosoftTunnelSite),
    }
}
