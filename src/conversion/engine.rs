//! Core conversion engine: first sheet of a workbook to CSV

use calamine::{open_workbook_auto, Reader};
use std::path::Path;

use crate::conversion::ConversionResult;
use crate::error::ConvertError;

/// Outcome of a single file conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOutcome {
    /// Records written, header row included
    pub rows: usize,
    /// Width of the sheet's used range
    pub columns: usize,
}

impl ConvertOutcome {
    /// True when the sheet had no used range at all
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Converts one workbook's first sheet into one CSV file
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new() -> Self {
        Self
    }

    /// Read all tabular data from the first sheet of `input` and write it to
    /// `output` as CSV.
    ///
    /// The sheet's first row becomes the header row of column names; data
    /// rows follow one record per line, with no row-index column. Workbook
    /// format is detected from the file itself, so both `.xls` and `.xlsx`
    /// are accepted.
    pub fn convert_file(&self, input: &Path, output: &Path) -> ConversionResult<ConvertOutcome> {
        let mut workbook =
            open_workbook_auto(input).map_err(|e| ConvertError::spreadsheet(input, e))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ConvertError::NoSheets {
                path: input.to_path_buf(),
            })?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ConvertError::spreadsheet(input, e))?;

        let mut writer =
            csv::Writer::from_path(output).map_err(|e| ConvertError::csv_write(output, e))?;

        let mut rows = 0usize;
        for row in range.rows() {
            let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writer
                .write_record(&record)
                .map_err(|e| ConvertError::csv_write(output, e))?;
            rows += 1;
        }

        writer
            .flush()
            .map_err(|e| ConvertError::io(output, e))?;

        Ok(ConvertOutcome {
            rows,
            columns: range.width(),
        })
    }
}
