use super::types::RunAsAccountType;
use graphbind_core::prelude::*;

///
/// DeviceShellScript
///
/// A shell script pushed to managed macOS devices. The script body is
/// carried as base64 on the wire and held as raw bytes here.
///

#[derive(Clone, Debug, Default, Model, PartialEq)]
#[model(odata_type = "#microsoft.graph.deviceShellScript")]
pub struct DeviceShellScript {
    #[model(base)]
    entity: Entity,
    block_execution_notifications: Option<bool>,
    created_date_time: Option<Timestamp>,
    description: Option<String>,
    display_name: Option<String>,
    execution_frequency: Option<IsoDuration>,
    file_name: Option<String>,
    last_modified_date_time: Option<Timestamp>,
    retry_count: Option<i32>,
    role_scope_tag_ids: Option<Vec<String>>,
    #[model(copy)]
    run_as_account: Option<RunAsAccountType>,
    script_content: Option<Blob>,
}

impl DeviceShellScript {
    /// Script body as UTF-8 text, if it is set and valid UTF-8.
    #[must_use]
    pub fn script_text(&self) -> Option<&str> {
        self.script_content
            .as_ref()
            .and_then(|blob| std::str::from_utf8(blob.as_bytes()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphbind_core::model::FieldKind;

    #[test]
    fn script_text_decodes_utf8_bodies() {
        let script = DeviceShellScript::new().with_script_content(b"#!/bin/sh\necho ok\n");
        assert_eq!(script.script_text(), Some("#!/bin/sh\necho ok\n"));

        let binary = DeviceShellScript::new().with_script_content(vec![0xff, 0xfe]);
        assert_eq!(binary.script_text(), None);
        assert_eq!(DeviceShellScript::new().script_text(), None);
    }

    #[test]
    fn kinds_cover_duration_and_bytes() {
        let table = DeviceShellScript::field_table();

        assert_eq!(
            table.get("executionFrequency").map(|f| f.kind()),
            Some(FieldKind::Duration)
        );
        assert_eq!(
            table.get("scriptContent").map(|f| f.kind()),
            Some(FieldKind::Blob)
        );
        assert_eq!(
            table.get("runAsAccount").map(|f| f.kind()),
            Some(FieldKind::Enum("RunAsAccountType"))
        );
    }
}
