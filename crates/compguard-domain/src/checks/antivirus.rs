use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

pub struct Antivirus;

impl Check for Antivirus {
    fn id(&self) -> &'static str {
        ids::CHECK_ANTIVIRUS
    }

    fn name(&self) -> &'static str {
        "Malware scanner"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let result = match &model.antivirus_scanner {
            Fact::Known(Some(tool)) => utils::result(
                self.id(),
                self.name(),
                Outcome::Pass,
                policy,
                format!("{tool} is installed"),
                json!({ "scanner": tool }),
            ),
            Fact::Known(None) => utils::result(
                self.id(),
                self.name(),
                Outcome::Fail,
                policy,
                "no malware scanner found on PATH".to_string(),
                json!({ "scanner": null }),
            ),
            Fact::ToolMissing { tool } => {
                utils::tool_missing(self.id(), self.name(), policy, tool)
            }
            Fact::Error { detail } => utils::probe_error(self.id(), self.name(), policy, detail),
        };

        Ok(vec![result])
    }
}
