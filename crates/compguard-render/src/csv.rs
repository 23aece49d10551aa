//! CSV export renderer.
//!
//! One row per check result, in execution order, WARN rows included.
//! CSV follows RFC 4180 for proper escaping. The header is contractual:
//! downstream analysis tooling keys on these column names.

use crate::{RenderableOutcome, RenderableRun};

/// CSV header row.
pub const CSV_HEADER: &str = "Check,Result,Details";

pub fn render_csv(run: &RenderableRun) -> String {
    let mut out = String::new();

    out.push_str(CSV_HEADER);
    out.push('\n');

    for r in &run.results {
        let outcome = match r.outcome {
            RenderableOutcome::Pass => "PASS",
            RenderableOutcome::Warn => "WARN",
            RenderableOutcome::Fail => "FAIL",
        };
        out.push_str(&format!(
            "{},{},{}\n",
            escape_csv_field(&r.name),
            outcome,
            escape_csv_field(&r.details)
        ));
    }

    out
}

/// Escapes a field for CSV according to RFC 4180.
///
/// Fields containing commas, double quotes, or newlines are quoted.
/// Double quotes within the field are escaped by doubling them.
fn escape_csv_field(s: &str) -> String {
    let needs_quoting = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');

    if needs_quoting {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
