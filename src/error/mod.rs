//! Error types and handling infrastructure for the mirror run

use std::path::PathBuf;

/// Errors raised while converting a single workbook into delimited text
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("spreadsheet {path} contains no sheets")]
    NoSheets { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn spreadsheet(path: impl Into<PathBuf>, source: calamine::Error) -> Self {
        Self::Spreadsheet {
            path: path.into(),
            source,
        }
    }

    pub fn csv_write(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::CsvWrite {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file the error is about
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Spreadsheet { path, .. }
            | Self::NoSheets { path }
            | Self::CsvWrite { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Main error type for mirror operations
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MirrorError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Convert(err) => match err {
                ConvertError::Spreadsheet { path, source } => {
                    format!(
                        "Cannot read spreadsheet '{}': {}",
                        path.display(),
                        source
                    )
                }
                ConvertError::NoSheets { path } => {
                    format!("Spreadsheet '{}' contains no sheets", path.display())
                }
                ConvertError::CsvWrite { path, source } => {
                    format!("Cannot write '{}': {}", path.display(), source)
                }
                ConvertError::Io { path, source } => {
                    format!("IO error on '{}': {}", path.display(), source)
                }
            },
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
            Self::ReadDir { path, source } => {
                format!("Cannot list directory '{}': {}", path.display(), source)
            }
            Self::CreateDir { path, source } => {
                format!("Cannot create directory '{}': {}", path.display(), source)
            }
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// Result type for mirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Convenience result type for single-file conversions
pub type ConvertResult<T> = Result<T, ConvertError>;
