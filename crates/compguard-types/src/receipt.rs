use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for compguard reports.
pub const SCHEMA_REPORT_V1: &str = "compguard.report.v1";

/// Outcome is intentionally small: it maps cleanly to automation signals.
///
/// WARN is informational: it counts toward the run total but never toward
/// `passed` or `failed`, and never changes the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Warn,
    Fail,
}

/// One named result from a compliance check.
///
/// A logical check may emit several of these (password policy emits one per
/// directive it inspects). Results are immutable once produced: the executor
/// appends them in order and the aggregator and exporters only read them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    pub check_id: String,
    pub name: String,
    pub outcome: Outcome,

    /// Whether the owning check is policy-critical. A FAIL on a critical
    /// check drives the run to the `critical` status.
    pub critical: bool,

    pub details: String,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Compliance tier derived from the integer score percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    /// Band thresholds compare the integer percent: >=90 excellent, >=75 good.
    pub fn from_percent(score_percent: u32) -> Self {
        if score_percent >= 90 {
            ScoreBand::Excellent
        } else if score_percent >= 75 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }
}

/// Three-way run status for automation pipelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Clean,
    Degraded,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub warned: u32,
    pub critical_failures: u32,
    pub score_percent: u32,
    pub band: ScoreBand,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HostMeta {
    pub hostname: String,
    pub profile: String,
}

/// The emitted report: a stable outer shape over one compliance run.
///
/// All artifacts (scorecard, CSV, HTML) are derived views over this envelope;
/// none of them is a source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub host: HostMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: RunStatus,
    pub score: ScoreSummary,
    /// Results in the order checks executed.
    pub results: Vec<CheckResult>,
}
