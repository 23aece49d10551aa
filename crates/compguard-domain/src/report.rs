use compguard_types::{CheckResult, Outcome, RunStatus, ScoreBand, ScoreSummary};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no check results to aggregate; scoring is undefined for an empty run")]
    EmptyRun,
}

/// The scored aggregate over one invocation's ordered results.
///
/// Counts are derived by folding over `results` at construction and cannot
/// be set independently, so they can never drift from the result sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceRun {
    results: Vec<CheckResult>,
    total: u32,
    passed: u32,
    failed: u32,
    warned: u32,
    critical_failures: u32,
}

impl ComplianceRun {
    pub fn aggregate(results: Vec<CheckResult>) -> Result<Self, AggregateError> {
        if results.is_empty() {
            return Err(AggregateError::EmptyRun);
        }

        let mut run = ComplianceRun {
            results,
            total: 0,
            passed: 0,
            failed: 0,
            warned: 0,
            critical_failures: 0,
        };
        for r in &run.results {
            run.total += 1;
            match r.outcome {
                Outcome::Pass => run.passed += 1,
                Outcome::Warn => run.warned += 1,
                Outcome::Fail => {
                    run.failed += 1;
                    if r.critical {
                        run.critical_failures += 1;
                    }
                }
            }
        }
        Ok(run)
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<CheckResult> {
        self.results
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    pub fn warned(&self) -> u32 {
        self.warned
    }

    pub fn critical_failures(&self) -> u32 {
        self.critical_failures
    }

    /// Integer percent, matching the reference behavior: `passed * 100 / total`.
    pub fn score_percent(&self) -> u32 {
        self.passed * 100 / self.total
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percent(self.score_percent())
    }

    pub fn status(&self) -> RunStatus {
        if self.critical_failures > 0 {
            RunStatus::Critical
        } else if self.failed > 0 {
            RunStatus::Degraded
        } else {
            RunStatus::Clean
        }
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            total: self.total,
            passed: self.passed,
            failed: self.failed,
            warned: self.warned,
            critical_failures: self.critical_failures,
            score_percent: self.score_percent(),
            band: self.band(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: Outcome, critical: bool) -> CheckResult {
        CheckResult {
            check_id: "host.test".to_string(),
            name: "Test".to_string(),
            outcome,
            critical,
            details: String::new(),
            data: serde_json::Value::Null,
        }
    }

    #[test]
    fn empty_run_is_an_error_not_a_zero_score() {
        assert_eq!(
            ComplianceRun::aggregate(Vec::new()),
            Err(AggregateError::EmptyRun)
        );
    }

    #[test]
    fn counts_fold_over_results() {
        let mut results = vec![result(Outcome::Pass, false); 8];
        results.push(result(Outcome::Warn, false));
        results.push(result(Outcome::Fail, false));

        let run = ComplianceRun::aggregate(results).expect("aggregate");
        assert_eq!(run.total(), 10);
        assert_eq!(run.passed(), 8);
        assert_eq!(run.failed(), 1);
        assert_eq!(run.warned(), 1);
        assert_eq!(run.critical_failures(), 0);
        assert_eq!(run.score_percent(), 80);
        assert_eq!(run.band(), ScoreBand::Good);
        assert_eq!(run.status(), RunStatus::Degraded);
    }

    #[test]
    fn all_pass_is_excellent_and_clean() {
        let run = ComplianceRun::aggregate(vec![result(Outcome::Pass, true); 5]).expect("aggregate");
        assert_eq!(run.score_percent(), 100);
        assert_eq!(run.band(), ScoreBand::Excellent);
        assert_eq!(run.status(), RunStatus::Clean);
    }

    #[test]
    fn critical_failure_wins_regardless_of_score() {
        let mut results = vec![result(Outcome::Pass, false); 3];
        results.push(result(Outcome::Fail, true));

        let run = ComplianceRun::aggregate(results).expect("aggregate");
        assert_eq!(run.score_percent(), 75);
        assert_eq!(run.critical_failures(), 1);
        assert_eq!(run.status(), RunStatus::Critical);
    }

    #[test]
    fn critical_flag_on_non_fail_results_does_not_count() {
        let results = vec![result(Outcome::Pass, true), result(Outcome::Warn, true)];
        let run = ComplianceRun::aggregate(results).expect("aggregate");
        assert_eq!(run.critical_failures(), 0);
        assert_eq!(run.status(), RunStatus::Clean);
    }

    #[test]
    fn warn_counts_toward_total_only() {
        let results = vec![result(Outcome::Pass, false), result(Outcome::Warn, false)];
        let run = ComplianceRun::aggregate(results).expect("aggregate");
        assert_eq!(run.total(), 2);
        assert_eq!(run.passed(), 1);
        assert_eq!(run.failed(), 0);
        assert_eq!(run.status(), RunStatus::Clean);
        // Integer division: 1 * 100 / 2.
        assert_eq!(run.score_percent(), 50);
    }
}
