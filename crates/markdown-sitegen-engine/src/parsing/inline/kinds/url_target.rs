use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

/// One `[text](url)` or `![alt](url)` occurrence found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTargetMatch<'a> {
    /// Byte range of the whole construct, including `!`, brackets and parens.
    pub range: Range<usize>,
    /// Link text or image alt text.
    pub text: &'a str,
    pub url: &'a str,
}

/// Image syntax: `![alt](url)`.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }

    /// All images in `s`, left to right.
    pub fn find_all(s: &str) -> Vec<UrlTargetMatch<'_>> {
        captures(Self::regex(), s).collect()
    }
}

/// Link syntax: `[text](url)`, not preceded by [`Image::MARKER`].
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// All links in `s`, left to right.
    ///
    /// `regex` has no lookbehind, so the image marker is checked on the byte
    /// before each match instead.
    pub fn find_all(s: &str) -> Vec<UrlTargetMatch<'_>> {
        captures(Self::regex(), s)
            .filter(|m| !s[..m.range.start].ends_with(Image::MARKER))
            .collect()
    }
}

fn captures<'a>(re: &'static Regex, s: &'a str) -> impl Iterator<Item = UrlTargetMatch<'a>> {
    re.captures_iter(s).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(UrlTargetMatch {
            range: whole.range(),
            text: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    })
}
