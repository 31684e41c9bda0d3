use graphbind_core::prelude::*;

///
/// MicrosoftTunnelSite
///
/// A group of tunnel gateway servers sharing one public address and one
/// upgrade window. The window bounds are times of day in the site's
/// local offset.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.microsoftTunnelSite")]
pub struct MicrosoftTunnelSite {
    #[model(base)]
    entity: Entity,
    description: Option<String>,
    display_name: Option<String>,
    internal_network_probe_url: Option<String>,
    public_address: Option<String>,
    role_scope_tag_ids: Option<Vec<String>>,
    upgrade_automatically: Option<bool>,
    upgrade_available: Option<bool>,
    upgrade_window_end_time: Option<TimeOfDay>,
    upgrade_window_start_time: Option<TimeOfDay>,
    upgrade_window_utc_offset_in_minutes: Option<i32>,
}

impl MicrosoftTunnelSite {
    /// Whether `time` falls inside the upgrade window. Windows that wrap
    /// past midnight are handled; an unset bound means no window.
    #[must_use]
    pub fn in_upgrade_window(&self, time: TimeOfDay) -> bool {
        match (self.upgrade_window_start_time, self.upgrade_window_end_time) {
            (Some(start), Some(end)) if start <= end => start <= time && time < end,
            (Some(start), Some(end)) => time >= start || time < end,
            _ => false,
        }
    }
}
