//! Post-processing for model output. The prompt asks for plain text, but the
//! model does not always comply, so emphasis markers are stripped here.

use std::sync::LazyLock;

use regex::Regex;

static TRIPLE_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap());
static DOUBLE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static SINGLE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strips markdown emphasis markers and collapses whitespace runs into single
/// spaces. Pattern order matters: wrapped pairs are unwrapped from the widest
/// marker down before stray markers are removed, so leftovers of one pass
/// cannot re-pair in a later one. Multi-line input deliberately collapses to
/// a single line.
pub fn clean_explanation(text: &str) -> String {
    let text = TRIPLE_EMPHASIS.replace_all(text, "$1");
    let text = DOUBLE_EMPHASIS.replace_all(&text, "$1");
    let text = SINGLE_EMPHASIS.replace_all(&text, "$1");
    let text = text.replace('*', "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
