use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lokeyrc.json";

/// Scan configuration, optionally loaded from `.lokeyrc.json` in the project
/// root. Every field has a default so a partial (or absent) file works.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Subdirectories of the project root to scan.
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,
    /// File extensions treated as scannable source.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Any path containing one of these components is skipped entirely.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

fn default_source_dirs() -> Vec<String> {
    ["source", "include"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    ["cpp", "hpp", "h", "c"].map(String::from).to_vec()
}

fn default_skip_dirs() -> Vec<String> {
    vec!["build".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

impl Config {
    /// Load the config file from `project_root` if present, defaults
    /// otherwise. A file that exists but does not parse is an error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.source_dirs, ["source", "include"]);
        assert_eq!(config.extensions, ["cpp", "hpp", "h", "c"]);
        assert_eq!(config.skip_dirs, ["build"]);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"sourceDirs": ["sphaira/source", "sphaira/include"]}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.source_dirs, ["sphaira/source", "sphaira/include"]);
        assert_eq!(config.extensions, ["cpp", "hpp", "h", "c"]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ broken").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }
}
