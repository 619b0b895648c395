use std::fmt;

/// Custom error types for CSV-to-GPX conversion
#[derive(Debug)]
pub enum ConvertError {
    /// I/O errors
    Io(std::io::Error),
    /// CSV parsing errors
    Csv(csv::Error),
    /// A file's columns match neither known vendor schema
    UnrecognizedSchema {
        filename: String,
        columns: Vec<String>,
    },
    /// Invalid file-matching pattern for the input directory
    InvalidPattern(String),
    /// Export format error
    Export(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
            ConvertError::Csv(err) => write!(f, "CSV error: {}", err),
            ConvertError::UnrecognizedSchema { filename, columns } => write!(
                f,
                "unrecognized column format in {} (columns: {})",
                filename,
                columns.join(", ")
            ),
            ConvertError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
            ConvertError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            ConvertError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
