//! Source text normalization.
//!
//! Two ordered passes mirror what a C preprocessor does before tokenization:
//! logical-line splicing first, comment removal second. The order matters
//! because a continued line may split a comment marker across physical lines.

use std::iter::Peekable;
use std::str::Chars;
use std::sync::LazyLock;

use regex::Regex;

// Backslash followed by an optional carriage return and a newline.
static LINE_SPLICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\\r?\n").unwrap());

/// Normalize raw file text: splice continued lines, then strip comments.
pub fn normalize(raw: &str) -> String {
    strip_comments(&LINE_SPLICE.replace_all(raw, " "))
}

/// Remove `//` and `/* */` comments with an explicit state scanner, so that
/// comment markers inside string or char literals are left untouched.
///
/// Line comments are dropped up to (not including) the newline. Block
/// comments are replaced by a single space, like the preprocessor does, so
/// `"a"/**/"b"` stays two separate tokens. An unterminated block comment
/// consumes to the end of the text.
fn strip_comments(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    while chars.peek().is_some_and(|&n| n != '\n') {
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    while let Some(n) = chars.next() {
                        if n == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            break;
                        }
                    }
                    out.push(' ');
                }
                _ => out.push('/'),
            },
            '"' | '\'' => {
                out.push(c);
                copy_literal(&mut chars, &mut out, c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Copy a quoted literal through verbatim, honoring backslash escapes.
/// A raw newline terminates the literal (it cannot legally span lines once
/// continuations have been spliced).
fn copy_literal(chars: &mut Peekable<Chars<'_>>, out: &mut String, delim: char) {
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '\n' => break,
            _ if c == delim => break,
            _ => {}
        }
    }
}
