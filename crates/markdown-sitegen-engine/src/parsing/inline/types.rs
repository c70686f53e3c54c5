use serde::Serialize;

/// The markup kind of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    /// Text outside any markup.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a url.
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A contiguous inline run sharing one markup kind.
///
/// `url` is present exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors are the only way to build a span,
/// so the pairing can't drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl TextSpan {
    /// Builds a url-less span.
    ///
    /// Link and image spans need a url; asking for one here downgrades the
    /// span to [`SpanKind::Plain`].
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        let kind = if kind.has_url() { SpanKind::Plain } else { kind };
        Self {
            content: content.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
