use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,

    /// A FAIL on a critical check drives the run to the `critical` status
    /// and exit code 2, regardless of the nominal score.
    pub critical: bool,
}

impl CheckPolicy {
    pub fn enabled(critical: bool) -> Self {
        Self {
            enabled: true,
            critical,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            critical: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
