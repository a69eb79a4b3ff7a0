/// Width used when previewing keys in reports and debug output.
pub const KEY_PREVIEW_WIDTH: usize = 70;

/// Truncate a key for display. Counts characters, not bytes, so multi-byte
/// text is never split.
pub fn preview(key: &str) -> String {
    if key.chars().count() > KEY_PREVIEW_WIDTH {
        let truncated: String = key.chars().take(KEY_PREVIEW_WIDTH).collect();
        format!("{}...", truncated)
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_short_key_unchanged() {
        assert_eq!(preview("Save"), "Save");
    }

    #[test]
    fn test_long_key_truncated() {
        let key = "x".repeat(100);
        let shown = preview(&key);
        assert_eq!(shown.chars().count(), KEY_PREVIEW_WIDTH + 3);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_multibyte_key_truncated_on_char_boundary() {
        let key = "é".repeat(100);
        let shown = preview(&key);
        assert!(shown.starts_with(&"é".repeat(KEY_PREVIEW_WIDTH)));
        assert!(shown.ends_with("..."));
    }
}
