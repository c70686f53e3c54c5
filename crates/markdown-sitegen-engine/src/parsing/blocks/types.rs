use serde::Serialize;

/// The kind of a block, decided by [`classify`](super::classify::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    /// Default when nothing else matches, including malformed quotes and
    /// lists.
    Paragraph,
    /// ATX heading with its level, 1 to 6.
    Heading(u8),
    /// Fenced code block.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines start with `1. `, `2. `, ... in order.
    OrderedList,
}
