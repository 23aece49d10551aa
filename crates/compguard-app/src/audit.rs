//! The audit use case: probe the host, run the battery, produce the envelope.

use anyhow::Context;
use camino::Utf8Path;
use compguard_domain::report::ComplianceRun;
use compguard_settings::ResolvedConfig;
use compguard_types::{
    CheckResult, HostMeta, ReportEnvelope, RunStatus, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Exit code for configuration/usage errors (nothing executed).
pub const EXIT_USAGE: i32 = 64;

/// Exit code for fatal runtime errors (empty run, artifact write failure).
pub const EXIT_RUNTIME: i32 = 70;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Host root the probe reads under (`/` in production).
    pub host_root: &'a Utf8Path,
    /// Config already resolved by the caller; resolution failures are
    /// usage errors and must be rejected before anything executes.
    pub resolved: &'a ResolvedConfig,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub envelope: ReportEnvelope,
}

/// Run the audit: probe the host, execute the battery, aggregate, envelope.
///
/// The observer sees each result as it is produced; the CLI uses it for
/// live progress and audit-log lines. The only error here is the empty-run
/// aggregation error (every check disabled): a run with zero results has
/// no meaningful score and must not produce a scorecard claiming one.
pub fn run_audit(
    input: AuditInput<'_>,
    observer: &mut dyn FnMut(&CheckResult),
) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    let model = compguard_probe::build_host_model(input.host_root);
    let results = compguard_domain::execute(&model, &input.resolved.effective, observer);
    let run = ComplianceRun::aggregate(results).context("aggregate check results")?;

    let finished_at = OffsetDateTime::now_utc();

    let envelope = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "compguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        host: HostMeta {
            hostname: model.hostname,
            profile: input.resolved.effective.profile.clone(),
        },
        started_at,
        finished_at,
        status: run.status(),
        score: run.summary(),
        results: run.into_results(),
    };

    Ok(AuditOutput { envelope })
}

/// Map run status to the contractual exit code: 0 clean, 1 degraded, 2 critical.
pub fn status_exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Clean => 0,
        RunStatus::Degraded => 1,
        RunStatus::Critical => 2,
    }
}
