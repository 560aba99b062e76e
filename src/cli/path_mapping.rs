use std::path::{Path, PathBuf};

/// Map a source-tree file into its destination-tree path.
///
/// The path is rebuilt from the component relative to `source_root`, so a
/// root name reappearing deeper in the path is never rewritten; the file
/// extension is swapped to `extension`.
pub fn map_source_to_dest(
    source_root: &Path,
    source_file: &Path,
    dest_root: &Path,
    extension: &str,
) -> PathBuf {
    let relative = source_file.strip_prefix(source_root).unwrap_or(source_file);
    let mut out = dest_root.join(relative);
    out.set_extension(extension);
    out
}

/// Map a source-tree directory into its destination-tree path. Same relative
/// rebuild as [`map_source_to_dest`], without the extension swap.
pub fn map_source_dir_to_dest(source_root: &Path, source_dir: &Path, dest_root: &Path) -> PathBuf {
    let relative = source_dir.strip_prefix(source_root).unwrap_or(source_dir);
    dest_root.join(relative)
}
