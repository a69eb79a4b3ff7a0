//! The extraction core: normalized text in, translatable keys out.
//!
//! A file flows through the normalizer once, then each of the four matcher
//! strategies scans the normalized text and appends its discoveries. The
//! pipeline is pure, which is what lets the scanner run files in parallel.

pub mod literal;
pub mod matchers;
pub mod merge;
pub mod normalize;

pub use normalize::normalize;

/// Extract every translatable key from one file's raw text.
///
/// Keys are returned in strategy order (suffix marker, accessor call,
/// annotated fields, fixed-signature accessor), one entry per discovery.
pub fn extract_keys(raw: &str) -> Vec<String> {
    let text = normalize(raw);
    let mut keys = Vec::new();
    matchers::suffix_marker(&text, &mut keys);
    matchers::accessor_call(&text, &mut keys);
    matchers::annotated_field(&text, &mut keys);
    matchers::return_accessor(&text, &mut keys);
    keys
}
