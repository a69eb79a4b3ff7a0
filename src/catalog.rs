//! Translation catalog loading, reconciliation and writing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::KeyIndex;

/// A key → translation mapping. `BTreeMap` keeps keys lexicographically
/// sorted, which is the on-disk order.
pub type Catalog = BTreeMap<String, String>;

/// Result of reconciling the scanned key set against an existing catalog.
#[derive(Debug, Default)]
pub struct Reconciliation {
    /// The output catalog: exactly the scanned key set, preserved
    /// translations where the existing catalog had one, key-as-value
    /// otherwise.
    pub catalog: Catalog,
    /// How many translations were carried over from the existing catalog.
    pub preserved: usize,
    /// Existing-catalog keys no longer found in source, dropped from the
    /// output. Sorted.
    pub filtered: Vec<String>,
    /// Scanned keys absent from the existing catalog. Sorted.
    pub missing: Vec<String>,
}

/// Load an existing catalog. Any failure (unreadable file, invalid JSON,
/// non-string values) means reconciliation proceeds without one.
pub fn load_catalog(path: &Path) -> Option<Catalog> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Build the output catalog from the scanned keys, preserving translations
/// from `existing` for keys still in use.
///
/// The output key set always equals the scanned key set: stale existing
/// entries are dropped (reported via `filtered`), new keys default to
/// themselves (reported via `missing`).
pub fn reconcile(index: &KeyIndex, existing: Option<&Catalog>) -> Reconciliation {
    let mut recon = Reconciliation::default();

    for key in index.keys() {
        recon.catalog.insert(key.to_string(), key.to_string());
    }

    let Some(existing) = existing else {
        return recon;
    };

    for (key, translation) in existing {
        if let Some(value) = recon.catalog.get_mut(key) {
            value.clone_from(translation);
            recon.preserved += 1;
        } else {
            recon.filtered.push(key.clone());
        }
    }

    recon.missing = index
        .keys()
        .filter(|key| !existing.contains_key(*key))
        .map(str::to_string)
        .collect();

    recon
}

/// Write a catalog as pretty JSON: sorted keys, two-space indentation,
/// non-ASCII left unescaped, trailing newline. Parent directories are
/// created as needed.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
