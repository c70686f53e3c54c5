/// Fenced code block type with owned fence constant.
///
/// Fenced code is a raw zone: its body is never tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether `block` starts with a fence and, once trimmed, ends with one.
    ///
    /// A lone fence line qualifies: its opening and closing fence are the
    /// same three backticks.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.trim_end().ends_with(Self::BACKTICKS)
    }

    /// The verbatim body between the opening fence line and the closing
    /// fence.
    ///
    /// Whatever follows the opening fence on its own line (an info string
    /// such as `rust`) is not part of the body. Internal newlines, including
    /// the one ending the last body line, are preserved. A block that is a
    /// single line has no body.
    pub fn body(block: &str) -> &str {
        let Some((_, after_open)) = block.split_once('\n') else {
            return "";
        };
        let trimmed = after_open.trim_end();
        trimmed.strip_suffix(Self::BACKTICKS).unwrap_or(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fenced_block() {
        assert!(CodeFence::is_fenced("```\ncode line\n```"));
        assert!(CodeFence::is_fenced("```rust\nfn main() {}\n```  "));
        assert!(CodeFence::is_fenced("```\n```"));
    }

    #[test]
    fn single_line_is_fenced() {
        assert!(CodeFence::is_fenced("```"));
        assert!(CodeFence::is_fenced("```inline```"));
    }

    #[test]
    fn single_line_has_empty_body() {
        assert_eq!(CodeFence::body("```"), "");
        assert_eq!(CodeFence::body("```inline```"), "");
    }

    #[test]
    fn unclosed_fence_is_not_fenced() {
        assert!(!CodeFence::is_fenced("```\ncode"));
        assert!(!CodeFence::is_fenced("text\n```"));
    }

    #[test]
    fn body_keeps_trailing_newline() {
        assert_eq!(CodeFence::body("```\ncode line\n```"), "code line\n");
    }

    #[test]
    fn body_drops_info_string_and_keeps_indent() {
        assert_eq!(
            CodeFence::body("```rust\nfn main() {\n    run();\n}\n```"),
            "fn main() {\n    run();\n}\n"
        );
    }

    #[test]
    fn empty_body() {
        assert_eq!(CodeFence::body("```\n```"), "");
    }
}
