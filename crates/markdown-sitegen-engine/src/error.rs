use thiserror::Error;

/// Inline markup that could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("closing delimiter not found: {0}")]
    UnterminatedDelimiter(&'static str),
}

/// Violations of the [`HtmlNode`](crate::html::HtmlNode) invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("parent node <{tag}> has no children")]
    EmptyChildren { tag: String },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("leaf node has no value")]
    MissingValue,
}

/// Any failure while turning a markdown document into an HTML string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid node structure: {0}")]
    Structure(#[from] StructureError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("no level-1 heading found")]
    NoTitleFound,
}
