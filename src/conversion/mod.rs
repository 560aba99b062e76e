//! Spreadsheet to delimited-text conversion
//!
//! This module is the collaborator the tree walker delegates to: it knows how
//! to turn one workbook into one CSV file and nothing about directory trees.

pub mod engine;

pub use engine::{ConversionEngine, ConvertOutcome};

use crate::error::ConvertError;

/// Result type for single-file conversion operations
pub type ConversionResult<T> = Result<T, ConvertError>;
