use crate::checks;
use crate::model::HostModel;
use crate::policy::EffectiveConfig;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::json;

/// Run the battery in registry order and capture every result.
///
/// One check's failure never aborts the run: an error escaping a check is
/// caught here, converted into a FAIL result carrying the error text, and
/// execution continues with the next check. The observer sees each result
/// as it is produced, in order, so callers can print live progress and
/// append audit-log lines without waiting for the battery to finish.
pub fn execute(
    model: &HostModel,
    cfg: &EffectiveConfig,
    observer: &mut dyn FnMut(&CheckResult),
) -> Vec<CheckResult> {
    let mut results: Vec<CheckResult> = Vec::new();

    for check in checks::registry() {
        let Some(policy) = cfg.check_policy(check.id()) else {
            continue;
        };

        match check.evaluate(model, policy) {
            Ok(batch) => {
                for r in batch {
                    observer(&r);
                    results.push(r);
                }
            }
            Err(err) => {
                let r = CheckResult {
                    check_id: check.id().to_string(),
                    name: check.name().to_string(),
                    outcome: Outcome::Fail,
                    critical: policy.critical,
                    details: format!("check failed to evaluate: {err}"),
                    data: json!({ "code": ids::CODE_CHECK_ERROR }),
                };
                observer(&r);
                results.push(r);
            }
        }
    }

    results
}
