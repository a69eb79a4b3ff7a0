//! Lokey - i18n key extractor for C and C++ projects
//!
//! Lokey scans a C-family source tree for translatable text keys marked by
//! source-level conventions (an `_i18n` literal suffix, `i18n::get` calls,
//! annotated struct fields, and a fixed-shape accessor method) and
//! reconciles them against an existing JSON translation catalog: keys still
//! in use keep their translations, new keys default to themselves, stale
//! entries are dropped.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, reporting)
//! - `config`: Scan configuration (`.lokeyrc.json` plus defaults)
//! - `extract`: The extraction core (normalizer, decoder, merger, matchers)
//! - `scanner`: Directory traversal and parallel per-file extraction
//! - `aggregate`: Key → location accumulation across files
//! - `catalog`: Catalog loading, reconciliation and writing
//! - `utils`: Shared helpers

pub mod aggregate;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod scanner;
pub mod utils;
