use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel, ServiceState};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

pub struct AuditDaemon;

impl Check for AuditDaemon {
    fn id(&self) -> &'static str {
        ids::CHECK_AUDIT_DAEMON
    }

    fn name(&self) -> &'static str {
        "Audit daemon"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let states = match &model.services {
            Fact::Known(states) => states,
            Fact::ToolMissing { tool } => {
                return Ok(vec![utils::tool_missing(self.id(), self.name(), policy, tool)]);
            }
            Fact::Error { detail } => {
                return Ok(vec![utils::probe_error(self.id(), self.name(), policy, detail)]);
            }
        };

        let (outcome, details) = match states.get("auditd") {
            Some(ServiceState::Active) => (Outcome::Pass, "auditd is active".to_string()),
            Some(ServiceState::Inactive) => {
                (Outcome::Fail, "auditd is installed but not active".to_string())
            }
            Some(ServiceState::NotFound) | None => {
                (Outcome::Fail, "auditd is not installed".to_string())
            }
        };

        Ok(vec![utils::result(
            self.id(),
            self.name(),
            outcome,
            policy,
            details,
            json!({ "service": "auditd" }),
        )])
    }
}
