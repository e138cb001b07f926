//! Rendering utilities for CI surfaces (plain text, GitHub annotations, Markdown, JSON).

#![forbid(unsafe_code)]

mod gha;
mod json;
mod markdown;
mod text;

pub use gha::render_github_annotation;
pub use json::render_json;
pub use markdown::render_markdown;
pub use text::render_text_line;
