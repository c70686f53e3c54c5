pub mod blocks;
pub mod inline;

pub use blocks::{BlockType, classify, split_blocks};
pub use inline::{SpanKind, TextSpan, tokenize};
