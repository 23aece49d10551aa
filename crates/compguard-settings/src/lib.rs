//! User-facing configuration for compguard.
//!
//! `compguard.toml` is parsed into a permissive schema, merged with a
//! profile preset, and resolved into the domain's effective config.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, CompguardConfigV1};
pub use presets::preset;
pub use resolve::{parse_config_toml, resolve_config, Overrides, ResolvedConfig};
