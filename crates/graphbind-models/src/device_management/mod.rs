//! Device management: Apple enrollment (DEP) profiles and onboarding,
//! tunnel sites and shell scripts.

mod enrollment;
mod script;
mod tunnel;
mod types;

pub use enrollment::{
    DepEnrollmentBaseProfile, DepEnrollmentBaseProfileKind, DepEnrollmentProfile,
    DepIosEnrollmentProfile, DepMacOsEnrollmentProfile, DepOnboardingSetting, EnrollmentProfile,
    EnrollmentProfileKind,
};
pub use script::DeviceShellScript;
pub use tunnel::MicrosoftTunnelSite;
pub use types::{DepTokenType, ITunesPairingMode, RunAsAccountType};
