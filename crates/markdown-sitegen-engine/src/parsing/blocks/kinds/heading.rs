/// ATX heading type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level (`######`).
    pub const MAX_LEVEL: usize = 6;

    /// Splits a heading line into `(level, text)`.
    ///
    /// The line must start with 1 to 6 markers followed by a space. Text is
    /// everything after that space, trimmed; it may be empty.
    ///
    /// Returns `None` for anything else, including `#text` and `#######`.
    pub fn parse(s: &str) -> Option<(u8, &str)> {
        let level = s.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let text = s[level..].strip_prefix(' ')?;
        Some((level as u8, text.trim()))
    }

    /// HTML tag for a heading level, `h1` through `h6`.
    pub fn tag(level: u8) -> String {
        format!("h{level}")
    }
}
