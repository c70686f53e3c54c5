use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies one block.
///
/// Checked in order: heading, fenced code, quote, unordered list, ordered
/// list. Quote and list markers must be on every line; a block where only
/// some lines carry one is a [`BlockType::Paragraph`].
pub fn classify(block: &str) -> BlockType {
    if let Some((level, _)) = Heading::parse(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.lines().collect();
    if lines.is_empty() {
        return BlockType::Paragraph;
    }
    if lines.iter().all(|l| BlockQuote::is_quote_line(l)) {
        return BlockType::Quote;
    }
    if lines.iter().all(|l| UnorderedList::is_item(l)) {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, l)| OrderedList::is_item(l, i + 1))
    {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}
