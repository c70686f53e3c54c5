//! Assembles the HTML tree for a whole document.
//!
//! Every block becomes one child of a top-level `<div>`. Nesting stops at
//! two levels below a block: list items and the inline spans inside them.

use crate::{
    error::ParseError,
    html::{HtmlNode, spans_to_nodes},
    parsing::{
        blocks::{
            BlockType, classify,
            kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
            split_blocks,
        },
        inline::tokenize,
    },
};

/// Builds the `<div>` tree for `document`.
///
/// A document without blocks still produces a renderable tree:
/// `<div><p></p></div>`.
///
/// # Errors
/// The first [`ParseError`] raised by any block; no partial tree is
/// returned.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ParseError> {
    let blocks = split_blocks(document);
    log::debug!("segmented document into {} blocks", blocks.len());

    if blocks.is_empty() {
        return Ok(empty_document());
    }

    let children = blocks
        .iter()
        .map(|b| block_to_node(b))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Builds the node for a single block.
pub fn block_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let block_type = classify(block);
    log::trace!("block classified as {block_type:?}");

    match block_type {
        BlockType::Paragraph => paragraph_to_node(block),
        BlockType::Heading(level) => heading_to_node(block, level),
        BlockType::Code => Ok(code_to_node(block)),
        BlockType::Quote => quote_to_node(block),
        BlockType::UnorderedList => list_to_node(block, "ul", UnorderedList::strip_marker),
        BlockType::OrderedList => list_to_node(block, "ol", OrderedList::strip_marker),
    }
}

fn empty_document() -> HtmlNode {
    HtmlNode::parent("div", vec![HtmlNode::parent("p", vec![HtmlNode::text("")])])
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(spans_to_nodes(&tokenize(text)?))
}

fn join_lines(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    Ok(HtmlNode::parent("p", inline_children(&join_lines(block))?))
}

fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, ParseError> {
    let text = Heading::parse(block)
        .map(|(_, text)| join_lines(text))
        .unwrap_or_default();
    Ok(HtmlNode::parent(Heading::tag(level), inline_children(&text)?))
}

fn code_to_node(block: &str) -> HtmlNode {
    let code = HtmlNode::parent("code", vec![HtmlNode::text(CodeFence::body(block))]);
    HtmlNode::parent("pre", vec![code])
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block
        .lines()
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

fn list_to_node(
    block: &str,
    tag: &str,
    strip_marker: fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let items = block
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(HtmlNode::parent("li", inline_children(strip_marker(line))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        markdown_to_html_node(md).unwrap().to_html().unwrap()
    }

    #[test]
    fn empty_document_is_empty_paragraph() {
        assert_eq!(
            markdown_to_html_node("").unwrap(),
            HtmlNode::parent("div", vec![HtmlNode::parent("p", vec![HtmlNode::text("")])])
        );
        assert_eq!(render("\n\n   \n"), "<div><p></p></div>");
    }

    #[test]
    fn paragraph_lines_are_joined_with_spaces() {
        assert_eq!(
            render("This is **bolded** paragraph\ntext in a p\ntag here"),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p></div>"
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(render("# One"), "<div><h1>One</h1></div>");
        assert_eq!(render("### Three _it_"), "<div><h3>Three <i>it</i></h3></div>");
        assert_eq!(render("###### Six"), "<div><h6>Six</h6></div>");
    }

    #[test]
    fn heading_without_text_is_empty() {
        assert_eq!(
            block_to_node("## ").unwrap(),
            HtmlNode::parent("h2", vec![HtmlNode::text("")])
        );
    }

    #[test]
    fn code_block_is_not_tokenized() {
        assert_eq!(
            render("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
            "<div><pre><code>This is text that _should_ remain\n\
             the **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn unbalanced_markup_in_code_is_fine() {
        assert_eq!(
            render("```\nlet x = a ** b;\n```"),
            "<div><pre><code>let x = a ** b;\n</code></pre></div>"
        );
    }

    #[test]
    fn quote_keeps_newlines_between_lines() {
        assert_eq!(
            render("> first **line**\n>second line"),
            "<div><blockquote>first <b>line</b>\nsecond line</blockquote></div>"
        );
    }

    #[test]
    fn unordered_list_items() {
        assert_eq!(
            render("- a\n- `b`\n- [c](/c)"),
            r#"<div><ul><li>a</li><li><code>b</code></li><li><a href="/c">c</a></li></ul></div>"#
        );
    }

    #[test]
    fn ordered_list_items() {
        assert_eq!(
            render("1. first\n2. second\n3. third"),
            "<div><ol><li>first</li><li>second</li><li>third</li></ol></div>"
        );
    }

    #[test]
    fn malformed_list_renders_as_paragraph() {
        assert_eq!(render("- a\nb"), "<div><p>- a b</p></div>");
    }

    #[test]
    fn blocks_stay_in_document_order() {
        let md = "# Title\n\n> quote\n\n- item\n\n1. one\n\n```\ncode\n```\n\nend";
        let node = markdown_to_html_node(md).unwrap();
        let tags: Vec<_> = node.children().iter().filter_map(HtmlNode::tag).collect();
        assert_eq!(tags, vec!["h1", "blockquote", "ul", "ol", "pre", "p"]);
    }

    #[test]
    fn parse_error_in_any_block_fails_document() {
        assert_eq!(
            markdown_to_html_node("fine\n\n- ok\n- `broken"),
            Err(ParseError::UnterminatedDelimiter("`"))
        );
    }
}
