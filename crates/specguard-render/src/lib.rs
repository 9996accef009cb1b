//! Rendering for evaluation reports (terminal text and Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableCase, RenderableReport, RenderableResult, RenderableVerdict};
pub use text::render_text;
