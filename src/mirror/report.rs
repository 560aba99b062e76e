//! Run statistics for mirror operations

use serde::{Deserialize, Serialize};

use crate::conversion::ConvertOutcome;

/// Statistics collected over one mirror run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorReport {
    /// Files converted in this run
    pub converted: usize,
    /// Files skipped because their destination already existed
    pub skipped: usize,
    /// Files ignored because they are not spreadsheets
    pub ignored: usize,
    /// Conversions that failed (only nonzero with continue-on-error)
    pub failed: usize,
    /// Destination directories created
    pub directories_created: usize,
    /// Total CSV records written, header rows included
    pub rows_written: u64,
    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
    /// Timestamp of when the report was collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for MirrorReport {
    fn default() -> Self {
        Self {
            converted: 0,
            skipped: 0,
            ignored: 0,
            failed: 0,
            directories_created: 0,
            rows_written: 0,
            elapsed_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl MirrorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_converted(&mut self, outcome: &ConvertOutcome) {
        self.converted += 1;
        self.rows_written += outcome.rows as u64;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_ignored(&mut self) {
        self.ignored += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn record_directory(&mut self) {
        self.directories_created += 1;
    }

    /// Total files the traversal looked at
    pub fn files_seen(&self) -> usize {
        self.converted + self.skipped + self.ignored + self.failed
    }

    /// True when no conversion failed
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Combine reports from multiple runs
    pub fn combine(&mut self, other: &Self) {
        self.converted += other.converted;
        self.skipped += other.skipped;
        self.ignored += other.ignored;
        self.failed += other.failed;
        self.directories_created += other.directories_created;
        self.rows_written += other.rows_written;
        self.elapsed_ms += other.elapsed_ms;
        self.collected_at = chrono::Utc::now();
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "{} converted, {} skipped, {} ignored, {} failed, {} directories created",
            self.converted, self.skipped, self.ignored, self.failed, self.directories_created
        )
    }
}
