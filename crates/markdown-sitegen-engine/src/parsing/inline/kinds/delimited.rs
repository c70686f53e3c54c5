use crate::parsing::inline::types::SpanKind;

/// A span kind enclosed by the same delimiter on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub delimiter: &'static str,
    pub kind: SpanKind,
}

impl Delimited {
    pub const BOLD: Delimited = Delimited {
        delimiter: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimited = Delimited {
        delimiter: "_",
        kind: SpanKind::Italic,
    };
    pub const CODE: Delimited = Delimited {
        delimiter: "`",
        kind: SpanKind::Code,
    };

    /// Order of the delimiter passes. All of them run before the image and
    /// link passes.
    pub const PRECEDENCE: [Delimited; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}
