//! xlsmirror
//!
//! A Rust CLI tool for recreating a spreadsheet directory hierarchy as an
//! isomorphic tree of CSV files. The traversal is a breadth-first pass over a
//! directory work queue; each workbook's first sheet is written out as
//! delimited text at the same relative path with the extension swapped.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod conversion;
pub mod error;
pub mod mirror;

// Re-export commonly used types
pub use conversion::{ConversionEngine, ConvertOutcome};
pub use error::{ConvertError, MirrorError, MirrorResult};
pub use mirror::{MirrorConfig, MirrorReport, TreeMirror};

use std::path::PathBuf;

/// Mirror `source_root` into `dest_root` with the default configuration
pub fn mirror(
    source_root: impl Into<PathBuf>,
    dest_root: impl Into<PathBuf>,
) -> MirrorResult<MirrorReport> {
    mirror_with_config(MirrorConfig::new(source_root, dest_root))
}

/// Mirror with a custom configuration
pub fn mirror_with_config(config: MirrorConfig) -> MirrorResult<MirrorReport> {
    config.validate()?;
    TreeMirror::new(config).run()
}
