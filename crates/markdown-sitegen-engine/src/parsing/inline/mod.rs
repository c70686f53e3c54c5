//! # Inline Tokenizing
//!
//! Turns the text of one block into a flat list of [`TextSpan`]s.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: delimiters and url patterns owned by each inline construct
//! - **`parser`**: `tokenize()` plus the individual passes it chains
//!
//! ## Pass Order
//!
//! `**bold**` → `_italic_` → `` `code` `` → `![alt](url)` → `[text](url)`.
//!
//! Every pass only splits plain spans. Whatever an earlier pass claimed is
//! never looked at again, so inline markup does not nest: in `**_x_**` the
//! underscores stay literal inside the bold span. Images are split before
//! links so the `!` of an image is not left behind as text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{extract_images, extract_links, split_delimiter, split_images, split_links, tokenize};
pub use types::{SpanKind, TextSpan};
