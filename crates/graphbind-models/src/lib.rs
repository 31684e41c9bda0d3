//! Concrete entity schemas for the graph API.
//!
//! Every model embeds [`Entity`](graphbind_core::entity::Entity) (directly or
//! through its parent) and gets its field table from `#[derive(Model)]`.
//! Polymorphic roots come with a family enum; [`AnyEntity`] covers every
//! model in this crate.

pub mod access_package;
pub mod any;
pub mod device_management;
pub mod financials;

pub use any::AnyEntity;

///
/// PRELUDE
///

pub mod prelude {
    pub use crate::{
        access_package::{
            AccessPackage, AccessPackageAssignmentPolicy, AccessPackageCatalog,
            AccessPackageResource, AccessPackageResourceEnvironment, AccessPackageResourceRole,
            AccessPackageResourceRoleScope, AccessPackageResourceScope,
        },
        any::AnyEntity,
        device_management::{
            DepEnrollmentBaseProfile, DepEnrollmentBaseProfileKind, DepEnrollmentProfile,
            DepIosEnrollmentProfile, DepMacOsEnrollmentProfile, DepOnboardingSetting,
            DepTokenType, DeviceShellScript, EnrollmentProfile, EnrollmentProfileKind,
            ITunesPairingMode, MicrosoftTunnelSite, RunAsAccountType,
        },
        financials::CustomerPayment,
    };
    pub use graphbind_core::prelude::*;
}
