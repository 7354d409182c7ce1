//! Textual repair of almost-JSON.
//!
//! Language models routinely emit trailing commas and `//` comments inside
//! JSON. These are removed with two regex passes. This is not a tokenizer:
//! a `//` inside a string value (a URL, say) is stripped along with the rest
//! of its line.
//!
//! Number literals too large for an `f64` (`1e999`) make `serde_json` reject
//! the whole document; [`null_overflowing_numbers`] turns them into `null` so
//! the field falls back to its default instead.

use std::sync::LazyLock;

use regex::Regex;

static LINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//[^\n]*$").expect("line comment regex"));

static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("trailing comma regex"));

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b").expect("number literal regex")
});

/// Strip line comments, then trailing commas before `}` or `]`.
///
/// Never fails. The result is more likely, not guaranteed, to parse.
pub fn sanitize(raw: &str) -> String {
    let without_comments = LINE_COMMENT_RE.replace_all(raw, "");
    TRAILING_COMMA_RE
        .replace_all(&without_comments, "$1")
        .into_owned()
}

/// Replace number literals that overflow `f64` with `null`.
pub fn null_overflowing_numbers(raw: &str) -> String {
    NUMBER_RE
        .replace_all(raw, |caps: &regex::Captures<'_>| {
            let literal = &caps[0];
            match literal.parse::<f64>() {
                Ok(n) if !n.is_finite() => "null".to_string(),
                _ => literal.to_string(),
            }
        })
        .into_owned()
}
