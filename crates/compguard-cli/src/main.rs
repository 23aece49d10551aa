//! CLI entry point for compguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `compguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use compguard_app::{
    parse_report_json, renderable_result, run_audit, serialize_report, status_exit_code,
    to_renderable, AuditInput, AuditLog, EXIT_RUNTIME, EXIT_USAGE,
};
use compguard_render::{
    render_csv, render_html, render_progress_line, render_scorecard, AnsiDecor, Decor, PlainDecor,
};
use compguard_settings::{
    parse_config_toml, resolve_config, CompguardConfigV1, Overrides, ResolvedConfig,
};
use compguard_types::{format_file_stamp, CheckResult, RunStatus};
use std::io::IsTerminal;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "compguard",
    version,
    about = "Host compliance scorecard for CI and fleet automation"
)]
struct Cli {
    /// Host root to inspect (override for chroots and tests).
    #[arg(long, default_value = "/")]
    host_root: Utf8PathBuf,

    /// Path to compguard config TOML.
    #[arg(long, default_value = "compguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (baseline|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Verbose diagnostics on stderr.
    #[arg(long, short)]
    verbose: bool,

    /// Debug diagnostics on stderr.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Html,
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    Text,
    Html,
    Csv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the check battery and write scorecard artifacts.
    Check {
        /// Artifact format(s) to write; repeatable. Defaults to text + csv.
        #[arg(long = "report", value_enum)]
        report: Vec<ReportFormat>,

        /// Directory for default (timestamped) artifact paths.
        #[arg(long, default_value = "reports")]
        out_dir: Utf8PathBuf,

        /// Exact path for the text scorecard (overrides the default).
        #[arg(long)]
        text_out: Option<Utf8PathBuf>,

        /// Exact path for the HTML scorecard.
        #[arg(long)]
        html_out: Option<Utf8PathBuf>,

        /// Exact path for the CSV export.
        #[arg(long)]
        csv_out: Option<Utf8PathBuf>,

        /// Exact path for the JSON report.
        #[arg(long)]
        json_out: Option<Utf8PathBuf>,

        /// Append-only audit log.
        #[arg(long, default_value = "compguard.log")]
        log_file: Utf8PathBuf,
    },

    /// Re-render artifacts from an existing JSON report.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: RenderFormat,

        /// Where to write the output (stdout if not given).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

struct CheckArgs {
    report: Vec<ReportFormat>,
    out_dir: Utf8PathBuf,
    text_out: Option<Utf8PathBuf>,
    html_out: Option<Utf8PathBuf>,
    csv_out: Option<Utf8PathBuf>,
    json_out: Option<Utf8PathBuf>,
    log_file: Utf8PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage/help text; only real parse errors
            // get the usage exit code (help and version exit 0).
            let is_usage = err.use_stderr();
            let _ = err.print();
            std::process::exit(if is_usage { EXIT_USAGE } else { 0 });
        }
    };

    init_logging(cli.verbose, cli.debug);

    let code = match cli.cmd {
        Commands::Check {
            report,
            out_dir,
            text_out,
            html_out,
            csv_out,
            json_out,
            log_file,
        } => cmd_check(
            &cli.host_root,
            &cli.config,
            cli.profile.clone(),
            CheckArgs {
                report,
                out_dir,
                text_out,
                html_out,
                csv_out,
                json_out,
                log_file,
            },
        ),
        Commands::Render {
            report,
            format,
            output,
        } => cmd_render(&report, format, output),
    };

    if code != 0 {
        std::process::exit(code);
    }
}

/// Initialize tracing based on CLI flags. Diagnostics go to stderr so they
/// never mix with progress output or piped artifacts.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}

fn cmd_check(
    host_root: &Utf8Path,
    config_path: &Utf8Path,
    profile: Option<String>,
    args: CheckArgs,
) -> i32 {
    // Configuration phase: rejected before any check runs.
    let resolved = match load_config(config_path, profile) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("compguard: configuration error: {err:#}");
            return EXIT_USAGE;
        }
    };

    let formats = if args.report.is_empty() {
        vec![ReportFormat::Text, ReportFormat::Csv]
    } else {
        args.report.clone()
    };

    let log = AuditLog::new(args.log_file.clone());
    let decor: Box<dyn Decor> = if std::io::stdout().is_terminal() {
        Box::new(AnsiDecor)
    } else {
        Box::new(PlainDecor)
    };

    let result = (|| -> anyhow::Result<i32> {
        log.append(
            "INFO",
            &format!(
                "compliance run started (profile={}, host_root={})",
                resolved.effective.profile, host_root
            ),
        )?;

        let mut log_err: Option<anyhow::Error> = None;
        let output = {
            let mut observer = |r: &CheckResult| {
                let rr = renderable_result(r);
                println!(
                    "{}",
                    render_progress_line(&rr.name, rr.outcome, &rr.details, decor.as_ref())
                );
                if log_err.is_none() {
                    if let Err(e) = log.append_result(r) {
                        log_err = Some(e);
                    }
                }
            };
            run_audit(
                AuditInput {
                    host_root,
                    resolved: &resolved,
                },
                &mut observer,
            )?
        };
        if let Some(e) = log_err {
            return Err(e);
        }

        let envelope = output.envelope;
        let stamp = format_file_stamp(envelope.started_at);
        let renderable = to_renderable(&envelope);

        for format in &formats {
            let path = artifact_path(*format, &args, &stamp);
            match format {
                ReportFormat::Text => {
                    compguard_app::write_text(&path, &render_scorecard(&renderable))?
                }
                ReportFormat::Html => compguard_app::write_text(&path, &render_html(&renderable))?,
                ReportFormat::Csv => compguard_app::write_text(&path, &render_csv(&renderable))?,
                ReportFormat::Json => {
                    compguard_app::write_bytes(&path, &serialize_report(&envelope)?)?
                }
            }
            info!("artifact written: {path}");
            log.append("INFO", &format!("artifact written: {path}"))?;
        }

        let score = &envelope.score;
        log.append(
            "INFO",
            &format!(
                "compliance run finished: status={} score={}% ({}/{} passed, {} failed, {} critical)",
                status_label(envelope.status),
                score.score_percent,
                score.passed,
                score.total,
                score.failed,
                score.critical_failures
            ),
        )?;

        Ok(status_exit_code(envelope.status))
    })();

    match result {
        Ok(code) => code,
        Err(err) => {
            let _ = log.append("ERROR", &format!("fatal: {err:#}"));
            eprintln!("compguard error: {err:#}");
            EXIT_RUNTIME
        }
    }
}

fn artifact_path(format: ReportFormat, args: &CheckArgs, stamp: &str) -> Utf8PathBuf {
    let default = |ext: &str| args.out_dir.join(format!("compguard-{stamp}.{ext}"));
    match format {
        ReportFormat::Text => args.text_out.clone().unwrap_or_else(|| default("txt")),
        ReportFormat::Html => args.html_out.clone().unwrap_or_else(|| default("html")),
        ReportFormat::Csv => args.csv_out.clone().unwrap_or_else(|| default("csv")),
        ReportFormat::Json => args.json_out.clone().unwrap_or_else(|| default("json")),
    }
}

fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Clean => "clean",
        RunStatus::Degraded => "degraded",
        RunStatus::Critical => "critical",
    }
}

/// Load and resolve config. A missing file is allowed (defaults apply);
/// anything else wrong here is a configuration error.
fn load_config(config_path: &Utf8Path, profile: Option<String>) -> anyhow::Result<ResolvedConfig> {
    let cfg_text = match std::fs::read_to_string(config_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e).with_context(|| format!("read config: {config_path}")),
    };

    let cfg = if cfg_text.trim().is_empty() {
        CompguardConfigV1::default()
    } else {
        parse_config_toml(&cfg_text)?
    };

    resolve_config(cfg, Overrides { profile })
}

fn cmd_render(report_path: &Utf8Path, format: RenderFormat, output: Option<Utf8PathBuf>) -> i32 {
    let result = (|| -> anyhow::Result<()> {
        let text = std::fs::read_to_string(report_path)
            .with_context(|| format!("read report: {report_path}"))?;
        let envelope = parse_report_json(&text)?;
        let renderable = to_renderable(&envelope);

        let rendered = match format {
            RenderFormat::Text => render_scorecard(&renderable),
            RenderFormat::Html => render_html(&renderable),
            RenderFormat::Csv => render_csv(&renderable),
        };

        match output {
            Some(path) => compguard_app::write_text(&path, &rendered)?,
            None => print!("{rendered}"),
        }
        Ok(())
    })();

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("compguard error: {err:#}");
            EXIT_RUNTIME
        }
    }
}
