use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

const MAX_AGE_DAYS: u32 = 90;
const MIN_LENGTH: u32 = 12;
const MIN_AGE_DAYS: u32 = 1;

pub struct PasswordPolicy;

impl Check for PasswordPolicy {
    fn id(&self) -> &'static str {
        ids::CHECK_PASSWORD_POLICY
    }

    fn name(&self) -> &'static str {
        "Password policy"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let text = match &model.login_defs {
            Fact::Known(Some(text)) => text,
            Fact::Known(None) => {
                return Ok(vec![utils::unverifiable(
                    self.id(),
                    self.name(),
                    policy,
                    "login.defs not found",
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
            self.directive(
                text,
                policy,
                "Password max age",
                "PASS_MAX_DAYS",
                ids::CODE_MAX_AGE,
                |v| v <= MAX_AGE_DAYS,
                &format!("must be {MAX_AGE_DAYS} or less"),
            )?,
            self.directive(
                text,
                policy,
                "Password min length",
                "PASS_MIN_LEN",
                ids::CODE_MIN_LEN,
                |v| v >= MIN_LENGTH,
                &format!("must be {MIN_LENGTH} or more"),
            )?,
            self.directive(
                text,
                policy,
                "Password min age",
                "PASS_MIN_DAYS",
                ids::CODE_MIN_AGE,
                |v| v >= MIN_AGE_DAYS,
                &format!("must be {MIN_AGE_DAYS} or more"),
            )?,
        ])
    }
}

impl PasswordPolicy {
    #[allow(clippy::too_many_arguments)]
    fn directive(
        &self,
        text: &str,
        policy: &CheckPolicy,
        name: &str,
        directive: &str,
        code: &str,
        satisfied: impl Fn(u32) -> bool,
        requirement: &str,
    ) -> Result<CheckResult, CheckError> {
        let Some(raw) = utils::kv_lookup(text, directive) else {
            return Ok(utils::result(
                self.id(),
                name,
                Outcome::Fail,
                policy,
                format!("{directive} is not set"),
                json!({ "code": code }),
            ));
        };

        let value: u32 = raw.parse().map_err(|_| CheckError::MalformedValue {
            directive: directive.to_string(),
            value: raw.clone(),
        })?;

        let (outcome, details) = if satisfied(value) {
            (Outcome::Pass, format!("{directive}={value}"))
        } else {
            (Outcome::Fail, format!("{directive}={value} ({requirement})"))
        };

        Ok(utils::result(
            self.id(),
            name,
            outcome,
            policy,
            details,
            json!({ "code": code, "directive": directive, "value": value }),
        ))
    }
}
