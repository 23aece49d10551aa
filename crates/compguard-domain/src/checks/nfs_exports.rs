use super::utils;
use super::{Check, CheckError};
use crate::model::{Fact, HostModel};
use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

pub struct NfsExports;

impl Check for NfsExports {
    fn id(&self) -> &'static str {
        ids::CHECK_NFS_EXPORTS
    }

    fn name(&self) -> &'static str {
        "NFS exports"
    }

    fn evaluate(
        &self,
        model: &HostModel,
        policy: &CheckPolicy,
    ) -> Result<Vec<CheckResult>, CheckError> {
        let result = match &model.exports {
            // Absence satisfies this check: nothing is shared.
            Fact::Known(None) => utils::result(
                self.id(),
                self.name(),
                Outcome::Pass,
                policy,
                "no NFS exports configured".to_string(),
                json!({ "exports": 0 }),
            ),
            Fact::Known(Some(text)) => {
                let open = world_open_exports(text);
                if open.is_empty() {
                    utils::result(
                        self.id(),
                        self.name(),
                        Outcome::Pass,
                        policy,
                        "all exports are restricted to named hosts".to_string(),
                        json!({ "world_open": [] }),
                    )
                } else {
                    utils::result(
                        self.id(),
                        self.name(),
                        Outcome::Fail,
                        policy,
                        format!("world-open export(s): {}", open.join(", ")),
                        json!({ "world_open": open }),
                    )
                }
            }
            Fact::ToolMissing { tool } => {
                utils::tool_missing(self.id(), self.name(), policy, tool)
            }
            Fact::Error { detail } => utils::probe_error(self.id(), self.name(), policy, detail),
        };

        Ok(vec![result])
    }
}

/// Export paths shared with any host: a `*` client spec, or no client
/// spec at all (exports defaults to everyone).
fn world_open_exports(text: &str) -> Vec<String> {
    let mut open = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(path) = tokens.next() else { continue };
        let clients: Vec<&str> = tokens.collect();
        if clients.is_empty() || clients.iter().any(|c| c.starts_with('*')) {
            open.push(path.to_string());
        }
    }
    open
}
