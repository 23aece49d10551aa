use crate::{RenderableOutcome, RenderableRun};

const RULE: &str =
    "================================================================================";
const THIN_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Fixed remediation guidance appended whenever the run has failures.
const RECOMMENDATIONS: &[&str] = &[
    "Remediate the failed checks above before the next audit cycle.",
    "Escalate critical findings to the security owner immediately.",
    "Re-run compguard after remediation to refresh the scorecard.",
];

/// Console decoration for check outcomes.
///
/// Presentation only: the engine and the renderers below never depend on
/// whether output is colored.
pub trait Decor {
    fn outcome_tag(&self, outcome: RenderableOutcome) -> String;
}

/// Plain tags for pipes, logs, and dumb terminals.
pub struct PlainDecor;

impl Decor for PlainDecor {
    fn outcome_tag(&self, outcome: RenderableOutcome) -> String {
        match outcome {
            RenderableOutcome::Pass => "[PASS]".to_string(),
            RenderableOutcome::Warn => "[WARN]".to_string(),
            RenderableOutcome::Fail => "[FAIL]".to_string(),
        }
    }
}

/// ANSI color + symbol tags for interactive terminals.
pub struct AnsiDecor;

impl Decor for AnsiDecor {
    fn outcome_tag(&self, outcome: RenderableOutcome) -> String {
        match outcome {
            RenderableOutcome::Pass => "\x1b[32m\u{2713} PASS\x1b[0m".to_string(),
            RenderableOutcome::Warn => "\x1b[33m\u{26a0} WARN\x1b[0m".to_string(),
            RenderableOutcome::Fail => "\x1b[31m\u{2717} FAIL\x1b[0m".to_string(),
        }
    }
}

/// One live-progress line, printed as each check completes.
pub fn render_progress_line(
    name: &str,
    outcome: RenderableOutcome,
    details: &str,
    decor: &dyn Decor,
) -> String {
    format!("{} {} - {}", decor.outcome_tag(outcome), name, details)
}

/// The scorecard artifact. Always plain text; decoration is a console
/// concern, not a report concern.
pub fn render_scorecard(run: &RenderableRun) -> String {
    let decor = PlainDecor;
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(" HOST COMPLIANCE SCORECARD\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Generated : {}\n", run.generated));
    out.push_str(&format!("Host      : {}\n", run.hostname));
    out.push_str(&format!("Profile   : {}\n", run.profile));
    out.push('\n');

    for r in &run.results {
        out.push_str(&format!(
            "{} {} - {}\n",
            decor.outcome_tag(r.outcome),
            r.name,
            r.details
        ));
    }

    let s = &run.score;
    out.push('\n');
    out.push_str(THIN_RULE);
    out.push('\n');
    out.push_str(&format!(
        "Score   : {}/{} checks passed ({}%) - {}\n",
        s.passed,
        s.total,
        s.score_percent,
        s.band.label()
    ));
    out.push_str(&format!("Verdict : {}\n", s.band.verdict()));
    out.push_str(&format!(
        "Totals  : passed={} failed={} warnings={} critical={}\n",
        s.passed, s.failed, s.warned, s.critical_failures
    ));
    out.push_str(&format!("Status  : {}\n", run.status.label()));

    if s.critical_failures > 0 {
        out.push('\n');
        out.push_str("CRITICAL FINDINGS:\n");
        for r in run
            .results
            .iter()
            .filter(|r| r.critical && r.outcome == RenderableOutcome::Fail)
        {
            out.push_str(&format!("  ! {} - {}\n", r.name, r.details));
        }
    }

    if s.failed > 0 {
        out.push('\n');
        out.push_str("RECOMMENDATIONS:\n");
        for line in RECOMMENDATIONS {
            out.push_str(&format!("  - {line}\n"));
        }
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableBand, RenderableResult, RenderableScore, RenderableStatus};

    fn sample_run(failed: u32, critical_failures: u32) -> RenderableRun {
        let mut results = vec![RenderableResult {
            check_id: "host.password_policy".to_string(),
            name: "Password max age".to_string(),
            outcome: RenderableOutcome::Pass,
            critical: false,
            details: "PASS_MAX_DAYS=90".to_string(),
        }];
        if failed > 0 {
            results.push(RenderableResult {
                check_id: "host.firewall".to_string(),
                name: "Firewall".to_string(),
                outcome: RenderableOutcome::Fail,
                critical: critical_failures > 0,
                details: "no active firewall service".to_string(),
            });
        }

        let total = results.len() as u32;
        let passed = total - failed;
        RenderableRun {
            generated: "2026-02-05 15:10:13".to_string(),
            hostname: "web01".to_string(),
            profile: "baseline".to_string(),
            status: if critical_failures > 0 {
                RenderableStatus::Critical
            } else if failed > 0 {
                RenderableStatus::Degraded
            } else {
                RenderableStatus::Clean
            },
            score: RenderableScore {
                total,
                passed,
                failed,
                warned: 0,
                critical_failures,
                score_percent: passed * 100 / total,
                band: RenderableBand::NeedsImprovement,
            },
            results,
        }
    }

    #[test]
    fn scorecard_header_carries_stamp_and_host() {
        let text = render_scorecard(&sample_run(0, 0));
        assert!(text.contains("HOST COMPLIANCE SCORECARD"));
        assert!(text.contains("Generated : 2026-02-05 15:10:13"));
        assert!(text.contains("Host      : web01"));
        assert!(text.contains("Profile   : baseline"));
    }

    #[test]
    fn clean_run_has_no_critical_or_recommendation_blocks() {
        let text = render_scorecard(&sample_run(0, 0));
        assert!(!text.contains("CRITICAL FINDINGS"));
        assert!(!text.contains("RECOMMENDATIONS"));
        assert!(text.contains("Status  : CLEAN"));
    }

    #[test]
    fn failures_append_the_fixed_recommendations() {
        let text = render_scorecard(&sample_run(1, 0));
        assert!(text.contains("RECOMMENDATIONS:"));
        assert!(text.contains("Remediate the failed checks"));
        assert!(!text.contains("CRITICAL FINDINGS"));
    }

    #[test]
    fn critical_failures_get_their_own_block() {
        let text = render_scorecard(&sample_run(1, 1));
        assert!(text.contains("CRITICAL FINDINGS:"));
        assert!(text.contains("! Firewall - no active firewall service"));
        assert!(text.contains("Status  : CRITICAL"));
    }

    #[test]
    fn scorecard_is_plain_text() {
        let text = render_scorecard(&sample_run(1, 1));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn ansi_decor_colors_plain_decor_does_not() {
        let ansi = AnsiDecor.outcome_tag(RenderableOutcome::Fail);
        assert!(ansi.contains("\x1b[31m"));
        assert!(ansi.ends_with("\x1b[0m"));

        let plain = PlainDecor.outcome_tag(RenderableOutcome::Fail);
        assert_eq!(plain, "[FAIL]");
    }

    #[test]
    fn progress_line_uses_the_given_decor() {
        let line =
            render_progress_line("Firewall", RenderableOutcome::Pass, "ufw is active", &PlainDecor);
        assert_eq!(line, "[PASS] Firewall - ufw is active");
    }
}
