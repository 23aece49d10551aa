use crate::policy::CheckPolicy;
use compguard_types::{ids, CheckResult, Outcome};
use serde_json::{json, Value as JsonValue};

/// Look up a `KEY value` directive in a config file body.
///
/// Works for both `login.defs` and `sshd_config`: keys are matched
/// case-insensitively, `#` comments and blank lines are skipped, and the
/// first occurrence wins (sshd semantics).
pub(crate) fn kv_lookup(text: &str, key: &str) -> Option<String> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else { continue };
        if first.eq_ignore_ascii_case(key) {
            let value = tokens.collect::<Vec<_>>().join(" ");
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

pub(crate) fn result(
    check_id: &str,
    name: &str,
    outcome: Outcome,
    policy: &CheckPolicy,
    details: String,
    data: JsonValue,
) -> CheckResult {
    CheckResult {
        check_id: check_id.to_string(),
        name: name.to_string(),
        outcome,
        critical: policy.critical,
        details,
        data,
    }
}

pub(crate) fn tool_missing(
    check_id: &str,
    name: &str,
    policy: &CheckPolicy,
    tool: &str,
) -> CheckResult {
    result(
        check_id,
        name,
        Outcome::Warn,
        policy,
        format!("inspection tool '{tool}' is not available"),
        json!({ "code": ids::CODE_TOOL_MISSING, "tool": tool }),
    )
}

pub(crate) fn unverifiable(
    check_id: &str,
    name: &str,
    policy: &CheckPolicy,
    what: &str,
) -> CheckResult {
    result(
        check_id,
        name,
        Outcome::Warn,
        policy,
        format!("cannot verify: {what}"),
        json!({ "code": ids::CODE_UNVERIFIABLE }),
    )
}

pub(crate) fn probe_error(
    check_id: &str,
    name: &str,
    policy: &CheckPolicy,
    detail: &str,
) -> CheckResult {
    result(
        check_id,
        name,
        Outcome::Fail,
        policy,
        format!("probe failed: {detail}"),
        json!({ "code": ids::CODE_PROBE_ERROR }),
    )
}
