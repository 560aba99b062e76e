//! Breadth-first traversal and mirroring of the source tree

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::path_mapping::{map_source_dir_to_dest, map_source_to_dest};
use crate::conversion::ConversionEngine;
use crate::error::{MirrorError, MirrorResult};
use crate::mirror::config::MirrorConfig;
use crate::mirror::report::MirrorReport;

/// Walks the source tree breadth-first and mirrors it under the destination
/// root, delegating each spreadsheet file to the conversion engine.
pub struct TreeMirror {
    config: MirrorConfig,
    engine: ConversionEngine,
}

impl TreeMirror {
    pub fn new(config: MirrorConfig) -> Self {
        Self {
            config,
            engine: ConversionEngine::new(),
        }
    }

    /// Run one full mirror pass.
    ///
    /// Directories are consumed from the queue in arrival order and a child
    /// directory is enqueued only after its destination directory has been
    /// created, so every directory is materialized before any file inside it
    /// is converted.
    pub fn run(&self) -> MirrorResult<MirrorReport> {
        let started = Instant::now();
        let mut report = MirrorReport::new();

        ensure_dir(&self.config.dest_root, &mut report)?;

        let mut queue: VecDeque<PathBuf> = VecDeque::new();
        queue.push_back(self.config.source_root.clone());

        while let Some(dir) = queue.pop_front() {
            self.mirror_directory(&dir, &mut queue, &mut report)?;
        }

        report.elapsed_ms = started.elapsed().as_millis() as u64;
        Ok(report)
    }

    /// Mirror the immediate entries of one directory. Entry order is whatever
    /// the filesystem yields; no sort is applied.
    fn mirror_directory(
        &self,
        dir: &Path,
        queue: &mut VecDeque<PathBuf>,
        report: &mut MirrorReport,
    ) -> MirrorResult<()> {
        let entries = fs::read_dir(dir).map_err(|e| MirrorError::read_dir(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| MirrorError::read_dir(dir, e))?;
            let source_path = entry.path();

            if source_path.is_dir() {
                let dest_dir = map_source_dir_to_dest(
                    &self.config.source_root,
                    &source_path,
                    &self.config.dest_root,
                );
                ensure_dir(&dest_dir, report)?;
                queue.push_back(source_path);
            } else if self.config.matches_extension(&source_path) {
                self.mirror_file(&source_path, report)?;
            } else {
                report.record_ignored();
            }
        }

        Ok(())
    }

    /// Convert one spreadsheet file, unless its destination already exists.
    fn mirror_file(&self, source_path: &Path, report: &mut MirrorReport) -> MirrorResult<()> {
        let dest_path = map_source_to_dest(
            &self.config.source_root,
            source_path,
            &self.config.dest_root,
            &self.config.dest_extension,
        );

        // The skip check looks at the real destination path, extension swap
        // included; outputs from an earlier run are left untouched.
        if !self.config.overwrite && dest_path.exists() {
            report.record_skipped();
            return Ok(());
        }

        match self.engine.convert_file(source_path, &dest_path) {
            Ok(outcome) => {
                report.record_converted(&outcome);
                if !self.config.quiet {
                    println!(
                        "Convert File: {} to File: {}",
                        source_path.display(),
                        dest_path.display()
                    );
                }
                Ok(())
            }
            Err(err) => {
                report.record_failure();
                if self.config.continue_on_error {
                    eprintln!("✗ Error converting {}: {}", source_path.display(), err);
                    Ok(())
                } else {
                    Err(err.into())
                }
            }
        }
    }
}

/// Create-if-missing directory primitive. Repeated runs land here with the
/// directory already present; that is not an error.
fn ensure_dir(path: &Path, report: &mut MirrorReport) -> MirrorResult<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| MirrorError::create_dir(path, e))?;
    report.record_directory();
    Ok(())
}
