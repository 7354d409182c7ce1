//! Fenced code block scanning.
//!
//! Candidate drills are found in Markdown fences. Three scans exist, from
//! most to least specific; the orchestrator runs them in order and stops at
//! the first one that yields a drill.
//!
//! Labeled fences may also sit on one line (` ```drill {...}``` `). An
//! unlabeled fence still needs a newline, since its first line could be any
//! info string.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static EXPLICIT_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```[ \t]*(?:drill-diagram|drill)(?:[ \t]*\r?\n|[ \t]+)([\s\S]*?)```")
        .expect("drill fence regex")
});

static JSON_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```[ \t]*json(?:[ \t]*\r?\n|[ \t]+)([\s\S]*?)```").expect("json fence regex")
});

static ANY_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[^\n`]*\r?\n([\s\S]*?)```").expect("any fence regex"));

/// Which fences a scan looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPass {
    /// ` ```drill-diagram ` or ` ```drill `, any case.
    Explicit,
    /// ` ```json `.
    Json,
    /// Any fence regardless of language tag.
    AnyFence,
}

impl BlockPass {
    fn regex(self) -> &'static Regex {
        match self {
            BlockPass::Explicit => &EXPLICIT_FENCE_RE,
            BlockPass::Json => &JSON_FENCE_RE,
            BlockPass::AnyFence => &ANY_FENCE_RE,
        }
    }

    /// Whether a block is removed from the display text even when it did
    /// not normalize. Only explicitly labeled drill blocks are.
    pub fn strips_failed_blocks(self) -> bool {
        matches!(self, BlockPass::Explicit)
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockPass::Explicit => "drill-fence",
            BlockPass::Json => "json-fence",
            BlockPass::AnyFence => "any-fence",
        }
    }
}

/// One fenced block found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// Byte range of the whole block, fences included.
    pub range: Range<usize>,
    /// Text between the opening fence line and the closing fence.
    pub body: &'a str,
}

/// Find every block the given pass matches, in document order.
pub fn find_blocks(text: &str, pass: BlockPass) -> Vec<FencedBlock<'_>> {
    pass.regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            Some(FencedBlock {
                range: whole.range(),
                body: body.as_str(),
            })
        })
        .collect()
}

/// Copy `text` without the given byte ranges.
///
/// Ranges must be sorted and non-overlapping, as produced by [`find_blocks`].
pub fn remove_ranges(text: &str, ranges: &[Range<usize>]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for range in ranges {
        result.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    result.push_str(&text[cursor..]);
    result
}
