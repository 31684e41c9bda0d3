use graphbind_core::graph_enum;

graph_enum! {
    /// Kind of Apple token backing a DEP onboarding setting.
    pub enum DepTokenType {
        None => "none",
        Dep => "dep",
        AppleSchoolManager => "appleSchoolManager",
    }
}

graph_enum! {
    /// Whether a device may pair with iTunes during setup.
    pub enum ITunesPairingMode {
        Disallow => "disallow",
        Allow => "allow",
        RequiresCertificate => "requiresCertificate",
    }
}

graph_enum! {
    pub enum RunAsAccountType {
        System => "system",
        User => "user",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbind_core::codec::EnumValue;

    #[test]
    fn tokens_round_trip_through_from_str() {
        for mode in ITunesPairingMode::VARIANTS {
            assert_eq!(mode.as_str().parse::<ITunesPairingMode>().ok(), Some(*mode));
        }
        assert_eq!(DepTokenType::AppleSchoolManager.to_string(), "appleSchoolManager");
    }

    #[test]
    fn unknown_token_names_the_enum() {
        let err = "root".parse::<RunAsAccountType>().unwrap_err();
        assert!(err.to_string().contains("RunAsAccountType"));
    }
}
