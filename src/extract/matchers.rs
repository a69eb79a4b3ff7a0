//! The four extraction strategies.
//!
//! Each strategy scans the normalized text independently and appends every
//! key it discovers; duplicates across (or within) strategies are kept, one
//! entry per discovery.

use std::sync::LazyLock;

use regex::Regex;

use super::literal::decode_body;
use super::merge::{merge_backward, merge_forward, window_after, window_before};

// The user-defined literal suffix that marks a translatable string, as in
// `"Save"_i18n`.
static SUFFIX_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_i18n\b").unwrap());

// Explicit accessor call with a single literal argument: i18n::get("key").
static ACCESSOR_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"i18n::get\s*\(\s*"((?:[^"\\]|\\.)*)"\s*\)"#).unwrap());

// Assignments to fields whose values are translated lazily at runtime.
static FIELD_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:info|title)\s*=\s*").unwrap());

// Method definitions whose single-return body supplies a key translated at
// the call site, e.g.
//   auto GetShortTitle() const -> const char* override { return "Store"; }
static RETURN_ACCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"GetShortTitle\s*\([^)]*\)\s*(?:const)?\s*(?:->[\w\s*:]+)?\s*(?:override)?\s*\{\s*return\s+"([^"]+)"\s*;\s*\}"#,
    )
    .unwrap()
});

/// Strategy 1: for every `_i18n` suffix marker, merge the run of literals
/// ending right before it. Markers with no adjacent literal (the suffix
/// applied to a variable, say) are silently skipped.
pub fn suffix_marker(text: &str, keys: &mut Vec<String>) {
    for m in SUFFIX_MARKER.find_iter(text) {
        if let Some(key) = merge_backward(window_before(text, m.start()))
            && !key.is_empty()
        {
            keys.push(key);
        }
    }
}

/// Strategy 2: direct `i18n::get("…")` calls. Single literal argument only;
/// named constants passed to the accessor are out of scope (resolving them
/// would need data-flow analysis).
pub fn accessor_call(text: &str, keys: &mut Vec<String>) {
    for cap in ACCESSOR_CALL.captures_iter(text) {
        let key = decode_body(&cap[1]);
        if !key.is_empty() {
            keys.push(key);
        }
    }
}

/// Strategy 3: `.info` / `.title` field initializers, merged forward from
/// the assignment operator. One-character values are noise (separators,
/// placeholders) and are dropped.
pub fn annotated_field(text: &str, keys: &mut Vec<String>) {
    for m in FIELD_ASSIGN.find_iter(text) {
        if let Some(key) = merge_forward(window_after(text, m.end()))
            && key.chars().count() > 1
        {
            keys.push(key);
        }
    }
}

/// Strategy 4: the fixed-shape `GetShortTitle` accessor whose body is a
/// single literal return. The returned text is taken verbatim; the same
/// one-character noise filter applies.
pub fn return_accessor(text: &str, keys: &mut Vec<String>) {
    for cap in RETURN_ACCESSOR.captures_iter(text) {
        let key = &cap[1];
        if key.chars().count() > 1 {
            keys.push(key.to_string());
        }
    }
}
