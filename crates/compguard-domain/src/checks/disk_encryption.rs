use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

pub struct DiskEncryption;

impl Check for DiskEncryption {
    fn id(&self) -> &'static str {
        ids::CHECK_DISK_ENCRYPTION
    }

    fn name(&self) -> &'static str {
        "Disk encryption"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let result = match &model.encrypted_volumes {
            Fact::Known(0) => utils::result(
                self.id(),
                self.name(),
                Outcome::Fail,
                policy,
                "no encrypted block devices found".to_string(),
                json!({ "encrypted_volumes": 0 }),
            ),
            Fact::Known(count) => utils::result(
                self.id(),
                self.name(),
                Outcome::Pass,
                policy,
                format!("{count} encrypted volume(s) present"),
                json!({ "encrypted_volumes": count }),
            ),
            Fact::ToolMissing { tool } => {
                utils::tool_missing(self.id(), self.name(), policy, tool)
            }
            Fact::Error { detail } => utils::probe_error(self.id(), self.name(), policy, detail),
        };

        Ok(vec![result])
    }
}
