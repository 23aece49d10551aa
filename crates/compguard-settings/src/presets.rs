use compguard_domain::policy::{CheckPolicy, EffectiveConfig};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything host-specific should go into
/// repo config overrides.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "baseline" => Some(baseline_profile()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

fn baseline_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "baseline".to_string(),
        checks: default_checks(&[
            compguard_types::ids::CHECK_REMOTE_ACCESS,
            compguard_types::ids::CHECK_FIREWALL,
            compguard_types::ids::CHECK_DISK_ENCRYPTION,
        ]),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        checks: default_checks(&[
            compguard_types::ids::CHECK_REMOTE_ACCESS,
            compguard_types::ids::CHECK_FIREWALL,
            compguard_types::ids::CHECK_DISK_ENCRYPTION,
            compguard_types::ids::CHECK_AUDIT_DAEMON,
            compguard_types::ids::CHECK_OS_UPDATES,
        ]),
    }
}

fn default_checks(critical: &[&str]) -> BTreeMap<String, CheckPolicy> {
    use compguard_types::ids::*;

    let mut m = BTreeMap::new();
    for check_id in [
        CHECK_PASSWORD_POLICY,
        CHECK_REMOTE_ACCESS,
        CHECK_FIREWALL,
        CHECK_AUDIT_DAEMON,
        CHECK_DISK_ENCRYPTION,
        CHECK_ANTIVIRUS,
        CHECK_OS_UPDATES,
        CHECK_NFS_EXPORTS,
    ] {
        m.insert(
            check_id.to_string(),
            CheckPolicy::enabled(critical.contains(&check_id)),
        );
    }
    m
}
