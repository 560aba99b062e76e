//! Source tree discovery helpers

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find spreadsheet files under `dir`. If recursive is true, walk the whole
/// tree; otherwise list the top-level entries only.
pub fn find_spreadsheet_files(
    dir: &Path,
    extensions: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if is_spreadsheet_file(path, extensions) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_spreadsheet_file(&path, extensions) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Return true if the path is a file carrying one of the given extensions
pub fn is_spreadsheet_file(path: &Path, extensions: &[String]) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| extensions.iter().any(|s| *s == ext))
}
