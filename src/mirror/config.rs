//! Configuration options for a mirror run

use std::path::{Path, PathBuf};

use crate::error::{MirrorError, MirrorResult};

/// Source root used when none is given on the command line
pub const DEFAULT_SOURCE_ROOT: &str = "xls_file";
/// Destination root used when none is given on the command line
pub const DEFAULT_DEST_ROOT: &str = "csv_file";
/// Extensions recognized as spreadsheets by default
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["xls", "xlsx"];
/// Extension given to converted output files
pub const DEST_EXTENSION: &str = "csv";

/// Mirror run configuration
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Root of the tree holding spreadsheet files
    pub source_root: PathBuf,
    /// Root under which the mirrored tree is produced
    pub dest_root: PathBuf,
    /// File extensions treated as spreadsheets (lowercase, no dot)
    pub source_extensions: Vec<String>,
    /// Extension of converted output files (no dot)
    pub dest_extension: String,
    /// Reconvert files whose destination already exists
    pub overwrite: bool,
    /// Keep mirroring remaining files when one conversion fails
    pub continue_on_error: bool,
    /// Suppress per-file console notices
    pub quiet: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_ROOT, DEFAULT_DEST_ROOT)
    }
}

impl MirrorConfig {
    /// Create a configuration for the given roots with default behavior
    pub fn new(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            dest_extension: DEST_EXTENSION.to_string(),
            overwrite: false,
            continue_on_error: false,
            quiet: false,
        }
    }

    /// Validate the configuration before a run.
    ///
    /// The source root must exist and be a directory. The destination root is
    /// not required to exist; the walker creates it as its first step.
    pub fn validate(&self) -> MirrorResult<()> {
        if !self.source_root.is_dir() {
            return Err(MirrorError::configuration(format!(
                "source root '{}' does not exist or is not a directory",
                self.source_root.display()
            )));
        }

        if self.source_extensions.is_empty() {
            return Err(MirrorError::configuration(
                "no spreadsheet extensions configured",
            ));
        }

        if self.dest_extension.is_empty() {
            return Err(MirrorError::configuration(
                "destination extension must not be empty",
            ));
        }

        Ok(())
    }

    /// True when `path` carries one of the configured spreadsheet extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.source_extensions.iter().any(|s| *s == ext))
    }
}
