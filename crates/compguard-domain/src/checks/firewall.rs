use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel, ServiceState};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

const FIREWALL_UNITS: &[&str] = &["firewalld", "ufw", "nftables"];

pub struct Firewall;

impl Check for Firewall {
    fn id(&self) -> &'static str {
        ids::CHECK_FIREWALL
    }

    fn name(&self) -> &'static str {
        "Firewall"
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

        let active = FIREWALL_UNITS
            .iter()
            .find(|unit| states.get(**unit) == Some(&ServiceState::Active));

        let result = match active {
            Some(unit) => utils::result(
                self.id(),
                self.name(),
                Outcome::Pass,
                policy,
                format!("{unit} is active"),
                json!({ "service": unit }),
            ),
            None => utils::result(
                self.id(),
                self.name(),
                Outcome::Fail,
                policy,
                format!(
                    "no active firewall service (checked {})",
                    FIREWALL_UNITS.join(", ")
                ),
                json!({ "checked": FIREWALL_UNITS }),
            ),
        };

        Ok(vec![result])
    }
}
