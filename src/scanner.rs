//! Project traversal and per-file extraction.
//!
//! Walks the configured source directories, filters by extension, skips
//! build output, and runs every surviving file through the extraction
//! pipeline. Extraction is pure per file, so files go through rayon in
//! parallel; results are folded into the aggregator in sorted file order so
//! the outcome is deterministic.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::aggregate::KeyIndex;
use crate::config::Config;
use crate::extract::extract_keys;
use crate::utils::preview;

pub struct ScanOptions {
    pub verbose: bool,
    /// File name (e.g. `app.cpp`) whose extraction result should be traced.
    pub debug_file: Option<String>,
}

pub struct ScanOutcome {
    pub index: KeyIndex,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Collect every scannable file under the configured source directories,
/// sorted for deterministic processing order. Missing directories and
/// unreadable entries are warnings, not errors.
pub fn collect_files(project_root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for dir in &config.source_dirs {
        let root = project_root.join(dir);
        if !root.exists() {
            eprintln!(
                "{} {} not found",
                "warning:".bold().yellow(),
                root.display()
            );
            continue;
        }

        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), err);
                    continue;
                }
            };
            let path = entry.path();
            if is_skipped(path, project_root, &config.skip_dirs) {
                continue;
            }
            if entry.file_type().is_file() && has_scannable_extension(path, &config.extensions) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

/// Extract keys from every file and fold them into one index.
pub fn scan(project_root: &Path, files: &[PathBuf], options: &ScanOptions) -> ScanOutcome {
    let per_file: Vec<Option<(String, Vec<String>)>> = files
        .par_iter()
        .map(|path| scan_file(project_root, path, options))
        .collect();

    let mut outcome = ScanOutcome {
        index: KeyIndex::new(),
        files_scanned: 0,
        files_skipped: 0,
    };
    for result in per_file {
        match result {
            Some((location, keys)) => {
                outcome.files_scanned += 1;
                outcome.index.merge_file(&location, keys);
            }
            None => outcome.files_skipped += 1,
        }
    }
    outcome
}

fn scan_file(
    project_root: &Path,
    path: &Path,
    options: &ScanOptions,
) -> Option<(String, Vec<String>)> {
    let location = relative_label(project_root, path);
    let is_debug = options
        .debug_file
        .as_deref()
        .is_some_and(|name| path.file_name().is_some_and(|f| f == name));

    if options.verbose || is_debug {
        println!("Scanning: {}", location);
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!(
                "{} Cannot read {}: {}",
                "warning:".bold().yellow(),
                location,
                err
            );
            return None;
        }
    };
    // Invalid UTF-8 is tolerated; offending bytes are replaced, not fatal.
    let keys = extract_keys(&String::from_utf8_lossy(&bytes));

    if is_debug {
        println!("  Found {} key(s) in {}", keys.len(), location);
        for key in &keys {
            println!("    - {:?}", preview(key));
        }
    }

    Some((location, keys))
}

/// The path label recorded for key locations: relative to the project root,
/// with forward slashes.
fn relative_label(project_root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(project_root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

fn is_skipped(path: &Path, project_root: &Path, skip_dirs: &[String]) -> bool {
    let rel = path.strip_prefix(project_root).unwrap_or(path);
    rel.components()
        .any(|c| skip_dirs.iter().any(|skip| c.as_os_str() == skip.as_str()))
}

fn has_scannable_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
