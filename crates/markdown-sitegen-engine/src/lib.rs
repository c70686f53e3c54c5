//! # markdown-sitegen-engine
//!
//! Turns a markdown page into an HTML fragment for a static site.
//!
//! ```text
//! document ─► split_blocks ─► classify ─► tokenize ─► HtmlNode tree ─► to_html
//! ```
//!
//! The whole pipeline is a pure function of its input: no I/O, no shared
//! mutable state, safe to call from many threads at once.
//!
//! Supported syntax is deliberately small: ATX headings, fenced code,
//! quotes, flat `- ` and `1. ` lists, paragraphs, and non-nesting inline
//! `**bold**`, `_italic_`, `` `code` ``, images and links. Output text is not
//! entity-escaped.

pub mod builder;
pub mod error;
pub mod html;
pub mod parsing;
pub mod title;

pub use builder::markdown_to_html_node;
pub use error::{ParseError, RenderError, StructureError, TitleError};
pub use html::{Attributes, HtmlNode};
pub use parsing::{BlockType, SpanKind, TextSpan};
pub use title::extract_title;

/// Renders a markdown document to an HTML string wrapped in `<div>`.
///
/// # Errors
/// [`RenderError::Parse`] for unterminated inline markup. Nothing is
/// rendered in that case.
pub fn render_document(markdown: &str) -> Result<String, RenderError> {
    let node = markdown_to_html_node(markdown)
        .inspect_err(|e| log::debug!("document render aborted: {e}"))?;
    Ok(node.to_html()?)
}
