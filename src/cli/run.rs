use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use super::report;
use crate::catalog::{load_catalog, reconcile, write_catalog};
use crate::config::Config;
use crate::scanner::{self, ScanOptions};

pub fn run(args: Arguments) -> Result<()> {
    let mut config = Config::load(&args.project_root)
        .with_context(|| format!("Failed to load config from {}", args.project_root.display()))?;
    if !args.source_dirs.is_empty() {
        config.source_dirs = args.source_dirs.clone();
    }

    println!("Scanning project: {}", args.project_root.display());

    let files = scanner::collect_files(&args.project_root, &config);
    let options = ScanOptions {
        verbose: args.verbose,
        debug_file: args.debug_file.clone(),
    };
    let outcome = scanner::scan(&args.project_root, &files, &options);
    report::print_scan_summary(&outcome);

    // An unloadable compare catalog is not fatal; reconciliation just runs
    // without preservation.
    let existing = args.compare.as_ref().and_then(|path| {
        let catalog = load_catalog(path);
        if catalog.is_none() {
            eprintln!(
                "{} Cannot load catalog {}; continuing without it",
                "warning:".bold().yellow(),
                path.display()
            );
        }
        catalog
    });

    let recon = reconcile(&outcome.index, existing.as_ref());

    if let (Some(compare_path), Some(existing)) = (&args.compare, &existing) {
        report::print_comparison(compare_path, &outcome.index, existing.len(), &recon);
    }

    if let Some(output) = &args.output {
        write_catalog(output, &recon.catalog)?;
        if let Some(existing) = &existing {
            report::print_filter_summary(&recon, existing.len());
        }
        report::print_export(output, recon.catalog.len());
    }

    Ok(())
}
