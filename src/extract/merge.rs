//! Adjacent-literal merging.
//!
//! C and C++ concatenate adjacent string literals at compile time, so a key
//! written as `"Hello, " "World!"` (possibly across spliced lines) is one
//! logical string. Given an anchor position, these routines collect the
//! maximal run of literals separated only by whitespace and concatenate
//! their decoded values in source order.

use std::sync::LazyLock;

use regex::Regex;

use super::literal::{STRING_LITERAL, decode_literal};

/// How far from the anchor a merge may look. A performance bound for
/// pathological files, not a semantic one; generous enough that real
/// multi-line concatenations are never truncated.
pub const MAX_LOOKAROUND: usize = 5000;

// A literal at the start of the remaining forward window, whitespace allowed
// before it.
static LEADING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"(?:[^"\\\n]|\\.)*""#).unwrap());

// What may legally follow a field-initializer run.
static RUN_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[,;}]").unwrap());

/// Merge the run of literals ending at the anchor, scanning backward.
///
/// `window` is the text immediately before the anchor. The literal nearest
/// the anchor is accepted only if nothing but whitespace separates it from
/// the anchor; each acceptance shrinks the window, and the first literal
/// with intervening non-whitespace ends the run (it belongs to unrelated
/// code). Returns `None` if no literal is directly adjacent.
pub fn merge_backward(window: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let mut remaining = window;

    while let Some(m) = STRING_LITERAL.find_iter(remaining).last() {
        if !remaining[m.end()..].chars().all(char::is_whitespace) {
            break;
        }
        parts.push(m.as_str());
        remaining = &remaining[..m.start()];
    }

    if parts.is_empty() {
        return None;
    }
    // Collected nearest-to-anchor first; flip back to source order.
    parts.reverse();
    Some(parts.into_iter().map(decode_literal).collect())
}

/// Merge the run of literals starting at the anchor, scanning forward.
///
/// Used for field initializers: the run must be followed by a comma,
/// semicolon or closing brace (whitespace aside), otherwise the whole match
/// is discarded as something other than a plain string assignment.
pub fn merge_forward(window: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let mut rest = window;

    while let Some(m) = LEADING_LITERAL.find(rest) {
        parts.push(m.as_str().trim_start());
        rest = &rest[m.end()..];
    }

    if parts.is_empty() || !RUN_TERMINATOR.is_match(rest) {
        return None;
    }
    Some(parts.into_iter().map(decode_literal).collect())
}

/// The bounded window of text before `anchor`, clamped to a char boundary.
pub fn window_before(text: &str, anchor: usize) -> &str {
    let mut start = anchor.saturating_sub(MAX_LOOKAROUND);
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..anchor]
}

/// The bounded window of text after `anchor`, clamped to a char boundary.
pub fn window_after(text: &str, anchor: usize) -> &str {
    let mut end = (anchor + MAX_LOOKAROUND).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[anchor..end]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_backward_single_literal() {
        assert_eq!(merge_backward("  \"Save\""), Some("Save".to_string()));
    }

    #[test]
    fn test_backward_merges_adjacent_run() {
        assert_eq!(
            merge_backward("x(\"Hello, \" \"World!\""),
            Some("Hello, World!".to_string())
        );
    }

    #[test]
    fn test_backward_merges_across_lines() {
        assert_eq!(
            merge_backward("\"Logs to \"\n        \"file\""),
            Some("Logs to file".to_string())
        );
    }

    #[test]
    fn test_backward_stops_at_non_whitespace() {
        // The first literal is an argument to unrelated code; only the one
        // adjacent to the anchor is taken.
        assert_eq!(merge_backward("f(\"other\"); \"key\""), Some("key".to_string()));
    }

    #[test]
    fn test_backward_rejects_detached_literal() {
        assert_eq!(merge_backward("\"key\") + x"), None);
        assert_eq!(merge_backward("int x = 3;"), None);
    }

    #[test]
    fn test_backward_decodes_fragments() {
        assert_eq!(
            merge_backward(r#""line\n" "two""#),
            Some("line\ntwo".to_string())
        );
    }

    #[test]
    fn test_forward_single_literal_with_terminator() {
        assert_eq!(merge_forward("\"Continue\","), Some("Continue".to_string()));
        assert_eq!(merge_forward(" \"Continue\" }"), Some("Continue".to_string()));
    }

    #[test]
    fn test_forward_merges_run() {
        assert_eq!(
            merge_forward("\"Part one \"\n    \"part two\";"),
            Some("Part one part two".to_string())
        );
    }

    #[test]
    fn test_forward_requires_terminator() {
        assert_eq!(merge_forward("\"Continue\" + suffix,"), None);
        assert_eq!(merge_forward("\"Continue\""), None);
    }

    #[test]
    fn test_forward_no_literal() {
        assert_eq!(merge_forward("some_variable,"), None);
    }

    #[test]
    fn test_windows_clamp_to_char_boundaries() {
        let text = "é".repeat(4000);
        let w = window_before(&text, text.len());
        assert!(w.len() <= MAX_LOOKAROUND);
        let w = window_after(&text, 0);
        assert!(w.len() <= MAX_LOOKAROUND);
    }
}
