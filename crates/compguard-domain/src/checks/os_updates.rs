use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

pub struct OsUpdates;

impl Check for OsUpdates {
    fn id(&self) -> &'static str {
        ids::CHECK_OS_UPDATES
    }

    fn name(&self) -> &'static str {
        "OS updates"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let result = match &model.pending_updates {
            Fact::Known(0) => utils::result(
                self.id(),
                self.name(),
                Outcome::Pass,
                policy,
                "package index reports no pending updates".to_string(),
                json!({ "pending": 0 }),
            ),
            Fact::Known(count) => utils::result(
                self.id(),
                self.name(),
                Outcome::Fail,
                policy,
                format!("{count} package update(s) pending"),
                json!({ "pending": count }),
            ),
            Fact::ToolMissing { tool } => {
                utils::tool_missing(self.id(), self.name(), policy, tool)
            }
            Fact::Error { detail } => utils::probe_error(self.id(), self.name(), policy, detail),
        };

        Ok(vec![result])
    }
}
