use crate::error::ParseError;

use super::{
    kinds::{Delimited, Image, Link, url_target::UrlTargetMatch},
    types::{SpanKind, TextSpan},
};

/// Tokenizes one block's text into [`TextSpan`]s.
///
/// Passes run in a fixed order: bold, italic, code, images, links. Each pass
/// only rescans [`SpanKind::Plain`] spans, so markup found by an earlier pass
/// is final and constructs never nest (`**_x_**` is bold `_x_`).
///
/// The result is never empty: text without markup, including `""`, comes
/// back as a single plain span.
///
/// # Errors
/// [`ParseError::UnterminatedDelimiter`] when a `**`, `_` or `` ` `` has no
/// closing partner.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::plain(text)];
    for d in Delimited::PRECEDENCE {
        spans = split_delimiter(spans, d.delimiter, d.kind)?;
    }
    Ok(split_links(split_images(spans)))
}

/// Splits every plain span on a symmetric `delimiter`, turning each enclosed
/// run into a span of `kind`.
///
/// Spans that are not plain, or that don't contain the delimiter, pass
/// through untouched. Empty plain runs created by a split are dropped.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() || !span.content().contains(delimiter) {
            out.push(span);
            continue;
        }

        let mut rest = span.content();
        while let Some((before, inner, after)) = next_delimited(rest, delimiter)? {
            push_plain(&mut out, before);
            out.push(TextSpan::new(inner, kind));
            rest = after;
        }
        push_plain(&mut out, rest);
    }
    Ok(out)
}

/// Splits `![alt](url)` out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_url_targets(spans, Image::find_all, |alt, url| TextSpan::image(alt, url))
}

/// Splits `[text](url)` out of every plain span.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_url_targets(spans, Link::find_all, |text, url| TextSpan::link(text, url))
}

/// `(alt, url)` for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    Image::find_all(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// `(text, url)` for every link in `text`, images excluded.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    Link::find_all(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}

/// Finds the first `delimiter ... delimiter` pair in `s` and returns
/// `(prefix, inner, suffix)`.
fn next_delimited<'a>(
    s: &'a str,
    delimiter: &'static str,
) -> Result<Option<(&'a str, &'a str, &'a str)>, ParseError> {
    let Some(open) = s.find(delimiter) else {
        return Ok(None);
    };
    let inner_start = open + delimiter.len();
    let close = s[inner_start..]
        .find(delimiter)
        .map(|i| inner_start + i)
        .ok_or(ParseError::UnterminatedDelimiter(delimiter))?;

    Ok(Some((
        &s[..open],
        &s[inner_start..close],
        &s[close + delimiter.len()..],
    )))
}

fn split_url_targets(
    spans: Vec<TextSpan>,
    find_all: fn(&str) -> Vec<UrlTargetMatch<'_>>,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let text = span.content();
        let found = find_all(text);
        if found.is_empty() {
            out.push(TextSpan::plain(text));
            continue;
        }

        let mut last = 0;
        for m in found {
            push_plain(&mut out, &text[last..m.range.start]);
            out.push(make(m.text, m.url));
            last = m.range.end;
        }
        push_plain(&mut out, &text[last..]);
    }
    out
}

fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TextSpan::plain(text));
    }
}
