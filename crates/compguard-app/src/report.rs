use anyhow::Context;
use compguard_render::{
    RenderableBand, RenderableOutcome, RenderableResult, RenderableRun, RenderableScore,
    RenderableStatus,
};
use compguard_types::{
    format_stamp, CheckResult, Outcome, ReportEnvelope, RunStatus, ScoreBand, SCHEMA_REPORT_V1,
};

pub fn serialize_report(envelope: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(envelope).context("serialize report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let envelope: ReportEnvelope = serde_json::from_str(text).context("parse report json")?;
    if envelope.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unknown report schema: {} (expected {})",
            envelope.schema,
            SCHEMA_REPORT_V1
        );
    }
    Ok(envelope)
}

pub fn to_renderable(envelope: &ReportEnvelope) -> RenderableRun {
    RenderableRun {
        generated: format_stamp(envelope.finished_at),
        hostname: envelope.host.hostname.clone(),
        profile: envelope.host.profile.clone(),
        status: match envelope.status {
            RunStatus::Clean => RenderableStatus::Clean,
            RunStatus::Degraded => RenderableStatus::Degraded,
            RunStatus::Critical => RenderableStatus::Critical,
        },
        score: RenderableScore {
            total: envelope.score.total,
            passed: envelope.score.passed,
            failed: envelope.score.failed,
            warned: envelope.score.warned,
            critical_failures: envelope.score.critical_failures,
            score_percent: envelope.score.score_percent,
            band: match envelope.score.band {
                ScoreBand::Excellent => RenderableBand::Excellent,
                ScoreBand::Good => RenderableBand::Good,
                ScoreBand::NeedsImprovement => RenderableBand::NeedsImprovement,
            },
        },
        results: envelope.results.iter().map(renderable_result).collect(),
    }
}

pub fn renderable_result(r: &CheckResult) -> RenderableResult {
    RenderableResult {
        check_id: r.check_id.clone(),
        name: r.name.clone(),
        outcome: match r.outcome {
            Outcome::Pass => RenderableOutcome::Pass,
            Outcome::Warn => RenderableOutcome::Warn,
            Outcome::Fail => RenderableOutcome::Fail,
        },
        critical: r.critical,
        details: r.details.clone(),
    }
}
