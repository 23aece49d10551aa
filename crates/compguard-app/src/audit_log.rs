use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use compguard_types::{format_stamp, CheckResult, Outcome};
use std::io::Write;
use time::OffsetDateTime;

/// Append-only audit log: one timestamped line per check outcome and per
/// lifecycle event.
///
/// The file is opened in append/create mode for every line and written with
/// a single call, so concurrent runs interleave whole lines instead of
/// clobbering each other. Nothing ever reads the log back.
pub struct AuditLog {
    path: Utf8PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn append(&self, level: &str, message: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create directory: {parent}"))?;
            }
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open audit log: {}", self.path))?;

        let stamp = format_stamp(OffsetDateTime::now_utc());
        writeln!(file, "{stamp} [{level}] {message}")
            .with_context(|| format!("append audit log: {}", self.path))
    }

    pub fn append_result(&self, result: &CheckResult) -> anyhow::Result<()> {
        let (level, outcome) = match result.outcome {
            Outcome::Pass => ("INFO", "PASS"),
            Outcome::Warn => ("WARNING", "WARN"),
            Outcome::Fail => ("ERROR", "FAIL"),
        };
        self.append(
            level,
            &format!("check {}: {} - {}", result.check_id, outcome, result.details),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_in_tempdir() -> (tempfile::TempDir, AuditLog) {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("logs/compguard.log"))
            .expect("utf8 path");
        (tmp, AuditLog::new(path))
    }

    #[test]
    fn lines_accumulate_and_are_stamped() {
        let (_tmp, log) = log_in_tempdir();
        log.append("INFO", "compliance run started").expect("append");
        log.append("INFO", "compliance run finished").expect("append");

        let text = std::fs::read_to_string(log.path()).expect("read log");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            // `YYYY-MM-DD HH:MM:SS` is 19 chars, then ` [LEVEL] `.
            assert_eq!(&line[19..27], " [INFO] ");
            assert!(line[..4].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(&line[4..5], "-");
        }
        assert!(lines[0].ends_with("compliance run started"));
        assert!(lines[1].ends_with("compliance run finished"));
    }

    #[test]
    fn result_lines_map_outcome_to_level() {
        let (_tmp, log) = log_in_tempdir();
        log.append_result(&CheckResult {
            check_id: "host.firewall".to_string(),
            name: "Firewall".to_string(),
            outcome: Outcome::Fail,
            critical: true,
            details: "no active firewall service".to_string(),
            data: serde_json::Value::Null,
        })
        .expect("append");

        let text = std::fs::read_to_string(log.path()).expect("read log");
        assert!(text.contains("[ERROR] check host.firewall: FAIL - no active firewall service"));
    }

    #[test]
    fn parent_directories_are_created() {
        let (_tmp, log) = log_in_tempdir();
        log.append("INFO", "first line").expect("append");
        assert!(log.path().exists());
    }
}
