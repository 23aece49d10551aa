//! Use case orchestration for compguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! probe, domain, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod artifacts;
mod audit;
mod audit_log;
mod report;

pub use artifacts::{write_bytes, write_text};
pub use audit::{run_audit, status_exit_code, AuditInput, AuditOutput, EXIT_RUNTIME, EXIT_USAGE};
pub use audit_log::AuditLog;
pub use report::{parse_report_json, renderable_result, serialize_report, to_renderable};
