//! Property-based tests for the aggregator and scoring.
//!
//! These tests use proptest to verify invariants around:
//! - Count identities over arbitrary result sequences
//! - Score banding monotonicity
//! - Run status mapping

use crate::report::{AggregateError, ComplianceRun};
use compguard_types::{ids, CheckResult, Outcome, RunStatus, ScoreBand};
// `::` needed: this module shadows the crate name in use paths.
use ::proptest::prelude::*;

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Pass),
        Just(Outcome::Warn),
        Just(Outcome::Fail),
    ]
}

fn arb_check_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(ids::CHECK_PASSWORD_POLICY),
        Just(ids::CHECK_REMOTE_ACCESS),
        Just(ids::CHECK_FIREWALL),
        Just(ids::CHECK_AUDIT_DAEMON),
        Just(ids::CHECK_DISK_ENCRYPTION),
        Just(ids::CHECK_ANTIVIRUS),
        Just(ids::CHECK_OS_UPDATES),
        Just(ids::CHECK_NFS_EXPORTS),
    ]
}

fn arb_result() -> impl Strategy<Value = CheckResult> {
    (
        arb_check_id(),
        arb_outcome(),
        any::<bool>(),
        "[a-z ]{0,40}",
    )
        .prop_map(|(check_id, outcome, critical, details)| CheckResult {
            check_id: check_id.to_string(),
            name: check_id.to_string(),
            outcome,
            critical,
            details,
            data: serde_json::Value::Null,
        })
}

fn band_rank(band: ScoreBand) -> u8 {
    match band {
        ScoreBand::NeedsImprovement => 0,
        ScoreBand::Good => 1,
        ScoreBand::Excellent => 2,
    }
}

proptest! {
    /// total == passed + failed + warned, always.
    #[test]
    fn counts_partition_the_total(results in prop::collection::vec(arb_result(), 1..50)) {
        let run = ComplianceRun::aggregate(results).expect("non-empty");
        prop_assert_eq!(run.total(), run.passed() + run.failed() + run.warned());
        prop_assert_eq!(run.total() as usize, run.results().len());
    }

    /// Critical failures are a subset of failures.
    #[test]
    fn critical_failures_never_exceed_failures(results in prop::collection::vec(arb_result(), 1..50)) {
        let run = ComplianceRun::aggregate(results).expect("non-empty");
        prop_assert!(run.critical_failures() <= run.failed());
    }

    /// Integer score matches the reference formula exactly.
    #[test]
    fn score_is_integer_division(results in prop::collection::vec(arb_result(), 1..50)) {
        let run = ComplianceRun::aggregate(results).expect("non-empty");
        prop_assert_eq!(run.score_percent(), run.passed() * 100 / run.total());
        prop_assert!(run.score_percent() <= 100);
    }

    /// Raising `passed` at a fixed total never lowers the band.
    #[test]
    fn band_is_monotonic_in_passed(total in 1u32..40, passed in 0u32..40) {
        let passed = passed.min(total);

        let build = |passed: u32, total: u32| {
            let mut results = vec![
                CheckResult {
                    check_id: ids::CHECK_FIREWALL.to_string(),
                    name: "Firewall".to_string(),
                    outcome: Outcome::Pass,
                    critical: false,
                    details: String::new(),
                    data: serde_json::Value::Null,
                };
                passed as usize
            ];
            results.resize(
                total as usize,
                CheckResult {
                    check_id: ids::CHECK_FIREWALL.to_string(),
                    name: "Firewall".to_string(),
                    outcome: Outcome::Fail,
                    critical: false,
                    details: String::new(),
                    data: serde_json::Value::Null,
                },
            );
            ComplianceRun::aggregate(results).expect("non-empty")
        };

        let run = build(passed, total);
        if passed < total {
            let improved = build(passed + 1, total);
            prop_assert!(band_rank(improved.band()) >= band_rank(run.band()));
        }
    }

    /// Status mapping: critical beats degraded beats clean, driven only by
    /// FAIL results; WARN never changes the status.
    #[test]
    fn status_follows_failure_counts(results in prop::collection::vec(arb_result(), 1..50)) {
        let run = ComplianceRun::aggregate(results).expect("non-empty");
        let expected = if run.critical_failures() > 0 {
            RunStatus::Critical
        } else if run.failed() > 0 {
            RunStatus::Degraded
        } else {
            RunStatus::Clean
        };
        prop_assert_eq!(run.status(), expected);
    }

    /// Appending WARN results changes total and warned, nothing else.
    #[test]
    fn warns_are_informational(
        results in prop::collection::vec(arb_result(), 1..30),
        extra_warns in 1usize..10,
    ) {
        let baseline = ComplianceRun::aggregate(results.clone()).expect("non-empty");

        let mut padded = results;
        for _ in 0..extra_warns {
            padded.push(CheckResult {
                check_id: ids::CHECK_OS_UPDATES.to_string(),
                name: "OS updates".to_string(),
                outcome: Outcome::Warn,
                critical: true,
                details: "tool unavailable".to_string(),
                data: serde_json::Value::Null,
            });
        }
        let run = ComplianceRun::aggregate(padded).expect("non-empty");

        prop_assert_eq!(run.passed(), baseline.passed());
        prop_assert_eq!(run.failed(), baseline.failed());
        prop_assert_eq!(run.critical_failures(), baseline.critical_failures());
        prop_assert_eq!(run.warned(), baseline.warned() + extra_warns as u32);
        prop_assert_eq!(run.status(), baseline.status());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn empty_aggregate_is_refused() {
        assert_eq!(
            ComplianceRun::aggregate(Vec::new()),
            Err(AggregateError::EmptyRun)
        );
    }
}
