use crate::{RenderableOutcome, RenderableRun};

/// Standalone HTML scorecard for management surfaces.
///
/// Same content as the text scorecard: header, per-check rows, score
/// summary with verdict, critical block only when present, fixed
/// recommendations only when something failed.
pub fn render_html(run: &RenderableRun) -> String {
    let s = &run.score;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Compliance scorecard - {}</title>\n",
        escape_html(&run.hostname)
    ));
    out.push_str("<style>\n");
    out.push_str("body { font-family: sans-serif; margin: 2em; color: #222; }\n");
    out.push_str("h1 { border-bottom: 2px solid #444; padding-bottom: 0.3em; }\n");
    out.push_str("table { border-collapse: collapse; width: 100%; margin: 1em 0; }\n");
    out.push_str("th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; }\n");
    out.push_str("th { background: #f0f0f0; }\n");
    out.push_str(".pass { color: #1a7f37; font-weight: bold; }\n");
    out.push_str(".warn { color: #9a6700; font-weight: bold; }\n");
    out.push_str(".fail { color: #cf222e; font-weight: bold; }\n");
    out.push_str(".critical { background: #ffebe9; }\n");
    out.push_str("</style>\n</head>\n<body>\n");

    out.push_str("<h1>Host Compliance Scorecard</h1>\n");
    out.push_str(&format!(
        "<p>Generated {} on <strong>{}</strong> (profile: {})</p>\n",
        escape_html(&run.generated),
        escape_html(&run.hostname),
        escape_html(&run.profile)
    ));

    out.push_str(&format!(
        "<p>Score: <strong>{}/{} ({}%)</strong> &mdash; {} &mdash; verdict: <strong>{}</strong></p>\n",
        s.passed,
        s.total,
        s.score_percent,
        s.band.label(),
        s.band.verdict()
    ));
    out.push_str(&format!(
        "<p>passed={} failed={} warnings={} critical={} &mdash; status: {}</p>\n",
        s.passed,
        s.failed,
        s.warned,
        s.critical_failures,
        run.status.label()
    ));

    out.push_str("<table>\n<tr><th>Check</th><th>Result</th><th>Details</th></tr>\n");
    for r in &run.results {
        let (class, label) = match r.outcome {
            RenderableOutcome::Pass => ("pass", "PASS"),
            RenderableOutcome::Warn => ("warn", "WARN"),
            RenderableOutcome::Fail => ("fail", "FAIL"),
        };
        let row_class = if r.critical && r.outcome == RenderableOutcome::Fail {
            " class=\"critical\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<tr{}><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>\n",
            row_class,
            escape_html(&r.name),
            class,
            label,
            escape_html(&r.details)
        ));
    }
    out.push_str("</table>\n");

    if s.critical_failures > 0 {
        out.push_str("<h2>Critical findings</h2>\n<ul>\n");
        for r in run
            .results
            .iter()
            .filter(|r| r.critical && r.outcome == RenderableOutcome::Fail)
        {
            out.push_str(&format!(
                "<li><strong>{}</strong>: {}</li>\n",
                escape_html(&r.name),
                escape_html(&r.details)
            ));
        }
        out.push_str("</ul>\n");
    }

    if s.failed > 0 {
        out.push_str("<h2>Recommendations</h2>\n<ul>\n");
        out.push_str("<li>Remediate the failed checks above before the next audit cycle.</li>\n");
        out.push_str("<li>Escalate critical findings to the security owner immediately.</li>\n");
        out.push_str("<li>Re-run compguard after remediation to refresh the scorecard.</li>\n");
        out.push_str("</ul>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
