//! Integration tests: directory tree mirroring
//!
//! Covers the full traversal behavior:
//! - Breadth-first recreation of the directory structure
//! - Relative-path mapping with extension swap
//! - Skip-if-exists idempotence across repeated runs
//! - Abort-on-error and continue-on-error handling

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use xlsmirror::{mirror_with_config, MirrorConfig, MirrorError};

/// Write a small workbook whose first row is the header
fn write_workbook(path: &Path, headers: &[&str], rows: &[&[&str]]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            sheet
                .write_string((row_idx + 1) as u32, col as u16, *value)
                .unwrap();
        }
    }
    workbook.save(path).unwrap();
}

fn quiet_config(source: &Path, dest: &Path) -> MirrorConfig {
    let mut config = MirrorConfig::new(source, dest);
    config.quiet = true;
    config
}

#[test]
fn test_mirror_nested_tree() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir_all(source.join("sub")).unwrap();
    fs::create_dir(&dest).unwrap();

    write_workbook(&source.join("a.xlsx"), &["id", "name"], &[&["1", "ada"]]);
    write_workbook(
        &source.join("sub/b.xlsx"),
        &["city"],
        &[&["london"], &["paris"]],
    );

    let report = mirror_with_config(quiet_config(&source, &dest)).unwrap();

    assert_eq!(report.converted, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);
    // The destination root pre-existed; only 'sub' was created
    assert_eq!(report.directories_created, 1);
    assert_eq!(report.rows_written, 5);

    let a = fs::read_to_string(dest.join("a.csv")).unwrap();
    assert_eq!(a, "id,name\n1,ada\n");

    let b = fs::read_to_string(dest.join("sub/b.csv")).unwrap();
    assert_eq!(b, "city\nlondon\nparis\n");
}

#[test]
fn test_destination_root_is_created_when_missing() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir(&source).unwrap();

    write_workbook(&source.join("a.xlsx"), &["id"], &[]);

    let report = mirror_with_config(quiet_config(&source, &dest)).unwrap();

    assert!(dest.is_dir());
    assert_eq!(report.converted, 1);
    assert_eq!(report.directories_created, 1);
}

#[test]
fn test_existing_destination_file_is_skipped() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir(&source).unwrap();
    fs::create_dir(&dest).unwrap();

    write_workbook(&source.join("a.xlsx"), &["id"], &[&["1"]]);
    fs::write(dest.join("a.csv"), "sentinel\n").unwrap();

    let report = mirror_with_config(quiet_config(&source, &dest)).unwrap();

    assert_eq!(report.converted, 0);
    assert_eq!(report.skipped, 1);
    // The pre-existing output was not touched
    assert_eq!(fs::read_to_string(dest.join("a.csv")).unwrap(), "sentinel\n");
}

#[test]
fn test_second_run_is_idempotent() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir_all(source.join("sub")).unwrap();

    write_workbook(&source.join("a.xlsx"), &["id"], &[&["1"]]);
    write_workbook(&source.join("sub/b.xlsx"), &["id"], &[&["2"]]);

    let first = mirror_with_config(quiet_config(&source, &dest)).unwrap();
    assert_eq!(first.converted, 2);

    // Second run: directories already exist, outputs already exist
    let second = mirror_with_config(quiet_config(&source, &dest)).unwrap();
    assert_eq!(second.converted, 0);
    assert_eq!(second.skipped, 2);
    assert_eq!(second.directories_created, 0);
}

#[test]
fn test_stale_destination_directory_is_tolerated() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir_all(source.join("sub")).unwrap();
    // Destination already carries a directory matching a source subdirectory
    fs::create_dir_all(dest.join("sub")).unwrap();

    write_workbook(&source.join("sub/b.xlsx"), &["id"], &[&["1"]]);

    let report = mirror_with_config(quiet_config(&source, &dest)).unwrap();

    assert_eq!(report.converted, 1);
    assert_eq!(report.directories_created, 0);
    assert!(dest.join("sub/b.csv").exists());
}

#[test]
fn test_corrupt_workbook_aborts_and_keeps_prior_outputs() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir_all(source.join("sub")).unwrap();

    // Root files are processed before subdirectory files, so the valid
    // workbook converts before the corrupt one aborts the run
    write_workbook(&source.join("a.xlsx"), &["id"], &[&["1"]]);
    fs::write(source.join("sub/bad.xlsx"), b"not a workbook").unwrap();

    let err = mirror_with_config(quiet_config(&source, &dest)).unwrap_err();
    assert_matches!(err, MirrorError::Convert(_));

    // Partial population remains on disk
    assert!(dest.join("a.csv").exists());
    assert!(!dest.join("sub/bad.csv").exists());
}

#[test]
fn test_continue_on_error_counts_failures_and_keeps_going() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir_all(source.join("sub")).unwrap();

    fs::write(source.join("bad.xlsx"), b"not a workbook").unwrap();
    write_workbook(&source.join("sub/good.xlsx"), &["id"], &[&["1"]]);

    let mut config = quiet_config(&source, &dest);
    config.continue_on_error = true;

    let report = mirror_with_config(config).unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.converted, 1);
    assert!(!report.is_clean());
    assert!(dest.join("sub/good.csv").exists());
}

#[test]
fn test_non_spreadsheet_files_are_ignored() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir(&source).unwrap();

    write_workbook(&source.join("a.xlsx"), &["id"], &[]);
    fs::write(source.join("notes.txt"), "ignored").unwrap();
    fs::write(source.join("README.md"), "# ignored").unwrap();

    let report = mirror_with_config(quiet_config(&source, &dest)).unwrap();

    assert_eq!(report.converted, 1);
    assert_eq!(report.ignored, 2);
    assert!(!dest.join("notes.txt").exists());
    assert!(!dest.join("notes.csv").exists());
}

#[test]
fn test_overwrite_reconverts_existing_destination() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("xls_file");
    let dest = tmp.path().join("csv_file");
    fs::create_dir(&source).unwrap();
    fs::create_dir(&dest).unwrap();

    write_workbook(&source.join("a.xlsx"), &["id"], &[&["1"]]);
    fs::write(dest.join("a.csv"), "stale\n").unwrap();

    let mut config = quiet_config(&source, &dest);
    config.overwrite = true;

    let report = mirror_with_config(config).unwrap();

    assert_eq!(report.converted, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(fs::read_to_string(dest.join("a.csv")).unwrap(), "id\n1\n");
}

#[test]
fn test_missing_source_root_is_rejected_up_front() {
    let tmp = tempdir().unwrap();
    let config = quiet_config(&tmp.path().join("missing"), &tmp.path().join("csv_file"));

    let err = mirror_with_config(config).unwrap_err();
    assert_matches!(err, MirrorError::Configuration { .. });
}
