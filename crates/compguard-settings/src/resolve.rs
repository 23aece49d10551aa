use crate::{model::CompguardConfigV1, presets};
use anyhow::Context;
use compguard_domain::policy::EffectiveConfig;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn parse_config_toml(text: &str) -> anyhow::Result<CompguardConfigV1> {
    toml::from_str(text).context("parse compguard.toml")
}

pub fn resolve_config(
    cfg: CompguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| "baseline".to_string());

    let mut effective = presets::preset(&profile)
        .with_context(|| format!("unknown profile: {profile} (expected 'baseline' or 'strict')"))?;

    // Per-check overrides. Unknown ids are rejected so typos do not
    // silently leave a check on its preset policy.
    for (check_id, cc) in cfg.checks.iter() {
        let Some(entry) = effective.checks.get_mut(check_id) else {
            anyhow::bail!("unknown check id in config: {check_id}");
        };
        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(critical) = cc.critical {
            entry.critical = critical;
        }
    }

    Ok(ResolvedConfig { effective })
}
