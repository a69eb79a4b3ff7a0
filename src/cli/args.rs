//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root directory to scan
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Source subdirectory under the project root (repeatable; overrides
    /// the config file)
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dirs: Vec<String>,

    /// Write the reconciled catalog to this JSON file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Existing catalog to compare against; its translations are preserved
    /// for keys still in use
    #[arg(long, value_name = "FILE")]
    pub compare: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Trace extraction for a single file name (e.g. app.cpp)
    #[arg(long, value_name = "NAME")]
    pub debug_file: Option<String>,
}
