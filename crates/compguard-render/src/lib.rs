//! Rendering for human and machine surfaces (text scorecard, HTML, CSV).
//!
//! Renderers are pure reads over the renderable model; console decoration
//! is isolated behind the `Decor` trait so the engine has no output-format
//! dependency.

#![forbid(unsafe_code)]

mod csv;
mod html;
mod model;
mod text;

pub use csv::{render_csv, CSV_HEADER};
pub use html::render_html;
pub use model::{
    RenderableBand, RenderableOutcome, RenderableResult, RenderableRun, RenderableScore,
    RenderableStatus,
};
pub use text::{render_progress_line, render_scorecard, AnsiDecor, Decor, PlainDecor};
