//! Quoted-literal matching and escape decoding.

use std::sync::LazyLock;

use regex::Regex;

/// One double-quoted string literal. Escaped characters are allowed, raw
/// newlines are not (continuations have already been spliced away by the
/// normalizer, so a legal literal fits on one logical line).
pub static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\\n]|\\.)*""#).unwrap());

/// Decode a raw literal span, including its delimiting quotes, into its
/// runtime value.
pub fn decode_literal(raw: &str) -> String {
    let body = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    decode_body(body)
}

/// Resolve escape sequences in a literal body: `\n`, `\t`, `\r`, `\"`,
/// `\'` and `\\`.
///
/// Single left-to-right pass; a backslash consumed as part of `\\` never
/// re-participates in a later sequence, so `a\\nb` comes out as the four
/// characters `a`, `\`, `n`, `b` rather than a real newline. Unknown
/// escapes pass through verbatim.
pub fn decode_body(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
