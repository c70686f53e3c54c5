use crate::parsing::inline::{SpanKind, TextSpan};

use super::node::HtmlNode;

/// Converts one span to its leaf node.
///
/// | kind   | node                                   |
/// |--------|----------------------------------------|
/// | Plain  | raw text                               |
/// | Bold   | `<b>`                                  |
/// | Italic | `<i>`                                  |
/// | Code   | `<code>`                               |
/// | Link   | `<a href="url">`                       |
/// | Image  | `<img src="url" alt="content">` (empty) |
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    let content = span.content();
    let url = span.url().unwrap_or_default();
    match span.kind() {
        SpanKind::Plain => HtmlNode::text(content),
        SpanKind::Bold => HtmlNode::leaf("b", content),
        SpanKind::Italic => HtmlNode::leaf("i", content),
        SpanKind::Code => HtmlNode::leaf("code", content),
        SpanKind::Link => HtmlNode::leaf("a", content).with_attribute("href", url),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", content),
    }
}

pub fn spans_to_nodes(spans: &[TextSpan]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_node).collect()
}
