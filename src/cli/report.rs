//! Human-readable run summaries.
//!
//! Informative only; nothing here is machine-parsed. Every printer takes a
//! writer so tests can capture output.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::aggregate::KeyIndex;
use crate::catalog::Reconciliation;
use crate::scanner::ScanOutcome;
use crate::utils::preview;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// How many missing/stale keys to list before cutting off.
const MAX_KEY_LISTING: usize = 20;

/// How many source locations to show per missing key.
const MAX_LOCATIONS: usize = 2;

pub fn print_scan_summary(outcome: &ScanOutcome) {
    print_scan_summary_to(outcome, &mut io::stdout().lock());
}

pub fn print_scan_summary_to<W: Write>(outcome: &ScanOutcome, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Found {} unique key(s) in {} file(s)",
        outcome.index.len().to_string().bold(),
        outcome.files_scanned
    );
    if outcome.files_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read and were skipped",
            "warning:".bold().yellow(),
            outcome.files_skipped
        );
    }
}

pub fn print_comparison(compare_path: &Path, index: &KeyIndex, existing_len: usize, recon: &Reconciliation) {
    print_comparison_to(compare_path, index, existing_len, recon, &mut io::stdout().lock());
}

/// Summary of the scanned key set against an existing catalog: counts plus a
/// preview of the keys that still need translations.
pub fn print_comparison_to<W: Write>(
    compare_path: &Path,
    index: &KeyIndex,
    existing_len: usize,
    recon: &Reconciliation,
    writer: &mut W,
) {
    let name = compare_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| compare_path.display().to_string());

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", format!("Comparison with {}:", name).bold());
    let _ = writeln!(writer, "  Keys in code:    {}", index.len());
    let _ = writeln!(writer, "  Keys in catalog: {}", existing_len);
    let _ = writeln!(
        writer,
        "  Missing in catalog: {}",
        colorize_count(recon.missing.len())
    );
    let _ = writeln!(
        writer,
        "  Stale in catalog:   {}",
        colorize_count(recon.filtered.len())
    );

    if !recon.missing.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "Missing keys (first {}):",
            MAX_KEY_LISTING.min(recon.missing.len())
        );
        for (i, key) in recon.missing.iter().take(MAX_KEY_LISTING).enumerate() {
            let _ = writeln!(writer, "{:3}. {}", i + 1, preview(key));
            let locations = index.locations(key);
            if !locations.is_empty() {
                let shown: Vec<&str> = locations
                    .iter()
                    .take(MAX_LOCATIONS)
                    .map(String::as_str)
                    .collect();
                let _ = writeln!(writer, "     Used in: {}", shown.join(", ").dimmed());
            }
        }
        if recon.missing.len() > MAX_KEY_LISTING {
            let _ = writeln!(writer, "  ... and {} more", recon.missing.len() - MAX_KEY_LISTING);
        }
    }
}

pub fn print_filter_summary(recon: &Reconciliation, existing_len: usize) {
    print_filter_summary_to(recon, existing_len, &mut io::stdout().lock());
}

/// What reconciliation did to the existing catalog: how many translations
/// survived and which stale keys were dropped.
pub fn print_filter_summary_to<W: Write>(
    recon: &Reconciliation,
    existing_len: usize,
    writer: &mut W,
) {
    if recon.filtered.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Filter results:".bold());
    let _ = writeln!(writer, "  Existing catalog keys:  {}", existing_len);
    let _ = writeln!(writer, "  Keys still in use:      {}", recon.catalog.len());
    let _ = writeln!(writer, "  Preserved translations: {}", recon.preserved);
    let _ = writeln!(
        writer,
        "  Dropped stale keys:     {}",
        recon.filtered.len().to_string().yellow()
    );

    let shown = recon.filtered.len().min(MAX_KEY_LISTING);
    let _ = writeln!(writer);
    let _ = writeln!(writer, "Dropped keys (first {}):", shown);
    for (i, key) in recon.filtered.iter().take(MAX_KEY_LISTING).enumerate() {
        let _ = writeln!(writer, "{:3}. {}", i + 1, preview(key));
    }
    if recon.filtered.len() > MAX_KEY_LISTING {
        let _ = writeln!(writer, "  ... and {} more", recon.filtered.len() - MAX_KEY_LISTING);
    }
}

pub fn print_export(path: &Path, key_count: usize) {
    print_export_to(path, key_count, &mut io::stdout().lock());
}

pub fn print_export_to<W: Write>(path: &Path, key_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Exported {} key(s) to {}", key_count, path.display()).green()
    );
}

fn colorize_count(count: usize) -> String {
    if count > 0 {
        count.to_string().yellow().to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{Catalog, reconcile};

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn sample_index() -> KeyIndex {
        let mut index = KeyIndex::new();
        index.record("Save".to_string(), "source/app.cpp");
        index.record("Save".to_string(), "source/menu.cpp");
        index.record("Exit".to_string(), "source/app.cpp");
        index
    }

    #[test]
    fn test_scan_summary() {
        let outcome = ScanOutcome {
            index: sample_index(),
            files_scanned: 2,
            files_skipped: 1,
        };

        let mut output = Vec::new();
        print_scan_summary_to(&outcome, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("2 unique key(s) in 2 file(s)"));
        assert!(stripped.contains("1 file(s) could not be read"));
    }

    #[test]
    fn test_comparison_lists_missing_with_locations() {
        let index = sample_index();
        let existing: Catalog = [("Save".to_string(), "Guardar".to_string())].into();
        let recon = reconcile(&index, Some(&existing));

        let mut output = Vec::new();
        print_comparison_to(Path::new("messages/en.json"), &index, existing.len(), &recon, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("Comparison with en.json:"));
        assert!(stripped.contains("Keys in code:    2"));
        assert!(stripped.contains("Keys in catalog: 1"));
        assert!(stripped.contains("Missing in catalog: 1"));
        assert!(stripped.contains("Exit"));
        assert!(stripped.contains("Used in: source/app.cpp"));
    }

    #[test]
    fn test_comparison_truncates_long_listings() {
        let mut index = KeyIndex::new();
        for i in 0..30 {
            index.record(format!("key{:02}", i), "source/app.cpp");
        }
        let existing = Catalog::new();
        let recon = reconcile(&index, Some(&existing));

        let mut output = Vec::new();
        print_comparison_to(Path::new("en.json"), &index, 0, &recon, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("Missing keys (first 20):"));
        assert!(stripped.contains("key19"));
        assert!(!stripped.contains("key20\n"));
        assert!(stripped.contains("... and 10 more"));
    }

    #[test]
    fn test_filter_summary_silent_without_stale_keys() {
        let recon = reconcile(&sample_index(), None);

        let mut output = Vec::new();
        print_filter_summary_to(&recon, 0, &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn test_filter_summary_lists_dropped_keys() {
        let existing: Catalog = [
            ("Save".to_string(), "Guardar".to_string()),
            ("Obsolete".to_string(), "Obsoleto".to_string()),
        ]
        .into();
        let recon = reconcile(&sample_index(), Some(&existing));

        let mut output = Vec::new();
        print_filter_summary_to(&recon, existing.len(), &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("Filter results:"));
        assert!(stripped.contains("Existing catalog keys:  2"));
        assert!(stripped.contains("Preserved translations: 1"));
        assert!(stripped.contains("Dropped stale keys:     1"));
        assert!(stripped.contains("Obsolete"));
    }

    #[test]
    fn test_export_message() {
        let mut output = Vec::new();
        print_export_to(Path::new("out/en.json"), 42, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert_eq!(stripped, format!("{} Exported 42 key(s) to out/en.json\n", SUCCESS_MARK));
    }
}
