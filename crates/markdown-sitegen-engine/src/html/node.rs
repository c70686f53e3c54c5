use serde::Serialize;

use crate::error::StructureError;

use super::attributes::Attributes;

/// A node of the rendered HTML tree.
///
/// Build nodes with [`HtmlNode::text`], [`HtmlNode::leaf`] and
/// [`HtmlNode::parent`]. The invariants of a `Parent` (a non-blank tag and
/// at least one child) are checked when rendering, not when constructing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HtmlNode {
    /// A node without children. With no tag, the value is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// A node whose content is the concatenation of its children.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Raw text: a tagless leaf.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Adds (or replaces) one attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key, value);
        self
    }

    /// Builds a node from loosely specified parts.
    ///
    /// Children make a `Parent`, which needs a tag and at least one child.
    /// Otherwise a `Leaf` is built, which needs a value.
    ///
    /// # Errors
    /// [`StructureError::MissingTag`], [`StructureError::EmptyChildren`] or
    /// [`StructureError::MissingValue`] when the parts can't form a node.
    pub fn from_parts(
        tag: Option<String>,
        value: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    ) -> Result<Self, StructureError> {
        if let Some(children) = children {
            let tag = match tag {
                Some(tag) if !tag.trim().is_empty() => tag,
                _ => return Err(StructureError::MissingTag),
            };
            if children.is_empty() {
                return Err(StructureError::EmptyChildren { tag });
            }
            return Ok(HtmlNode::Parent {
                tag,
                children,
                attributes,
            });
        }

        let value = value.ok_or(StructureError::MissingValue)?;
        Ok(HtmlNode::Leaf {
            tag,
            value,
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    /// Children of a `Parent`; empty for a `Leaf`.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children.as_slice(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Renders the subtree to an HTML string. Text is not entity-escaped.
    ///
    /// # Errors
    /// [`StructureError::MissingTag`] for a parent with a blank tag and
    /// [`StructureError::EmptyChildren`] for a parent without children,
    /// anywhere in the subtree.
    pub fn to_html(&self) -> Result<String, StructureError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), StructureError> {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                push_open(out, tag, attributes);
                out.push_str(value);
                push_close(out, tag);
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.trim().is_empty() {
                    return Err(StructureError::MissingTag);
                }
                if children.is_empty() {
                    return Err(StructureError::EmptyChildren { tag: tag.clone() });
                }
                push_open(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                push_close(out, tag);
            }
        }
        Ok(())
    }
}

fn push_open(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.to_html());
    out.push('>');
}

fn push_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
