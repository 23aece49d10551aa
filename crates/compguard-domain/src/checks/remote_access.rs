use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

pub struct RemoteAccess;

impl Check for RemoteAccess {
    fn id(&self) -> &'static str {
        ids::CHECK_REMOTE_ACCESS
    }

    fn name(&self) -> &'static str {
        "Remote access hardening"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let text = match &model.sshd_config {
            Fact::Known(Some(text)) => text,
            Fact::Known(None) => {
                return Ok(vec![utils::unverifiable(
                    self.id(),
                    self.name(),
                    policy,
                    "sshd_config not found",
                )]);
            }
            Fact::ToolMissing { tool } => {
                return Ok(vec![utils::tool_missing(self.id(), self.name(), policy, tool)]);
            }
            Fact::Error { detail } => {
                return Ok(vec![utils::probe_error(self.id(), self.name(), policy, detail)]);
            }
        };

        Ok(vec![
            self.must_be_no(text, policy, "Root login over SSH", "PermitRootLogin", ids::CODE_ROOT_LOGIN),
            self.must_be_no(
                text,
                policy,
                "SSH password authentication",
                "PasswordAuthentication",
                ids::CODE_PASSWORD_AUTH,
            ),
        ])
    }
}

impl RemoteAccess {
    fn must_be_no(
        &self,
        text: &str,
        policy: &CheckPolicy,
        name: &str,
        directive: &str,
        code: &str,
    ) -> CheckResult {
        let (outcome, details) = match utils::kv_lookup(text, directive) {
            Some(value) if value.eq_ignore_ascii_case("no") => {
                (Outcome::Pass, format!("{directive} no"))
            }
            Some(value) => (
                Outcome::Fail,
                format!("{directive} {value} (must be 'no')"),
            ),
            None => (
                Outcome::Fail,
                format!("{directive} is not set (compiled default applies)"),
            ),
        };

        utils::result(
            self.id(),
            name,
            outcome,
            policy,
            details,
            json!({ "code": code, "directive": directive }),
        )
    }
}
