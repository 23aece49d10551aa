//! Host state inspection.
//!
//! Builds the `HostModel` consumed by the evaluation engine. Probing never
//! aborts a run: missing files, missing inspection tools, and failed
//! commands all degrade into facts that the checks classify.

#![forbid(unsafe_code)]

mod inspect;

pub use inspect::{build_host_model, SystemInspector};
