use thiserror::Error;

/// Why a single line of the data file could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} is not a valid non-negative integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum FacultyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },

    #[error("Invalid date of birth {0:?}, expected dd/mm/yyyy")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FacultyError>;
