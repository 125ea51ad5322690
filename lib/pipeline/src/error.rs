use std::io;
use std::path::PathBuf;

/// An error raised while converting a CSV file into a graph.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The input file could not be opened or read.
    #[error("Unable to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The header row could not be read.
    #[error("Unable to read the header of '{file}': {source}")]
    Header {
        file: String,
        #[source]
        source: csv::Error,
    },
    /// A required column is not part of the header.
    #[error("The file '{file}' has no '{column}' column")]
    MissingColumn { file: String, column: &'static str },
    /// A data row is malformed, e.g. it has the wrong number of fields or is not valid UTF-8.
    #[error("Unable to read row {row} of '{file}': {source}")]
    Row {
        file: String,
        row: usize,
        #[source]
        source: csv::Error,
    },
    /// The creation timestamp of the dataset could not be formatted.
    #[error("Unable to format the creation timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// An error raised while loading an external link table.
#[derive(Debug, thiserror::Error)]
pub enum LinkTableError {
    /// The table file could not be read.
    #[error("Unable to read the link table '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The table is not valid JSON or names an unknown source.
    #[error("Invalid link table: {0}")]
    Parse(#[from] serde_json::Error),
    /// The link table bundled with the crate is invalid.
    #[error("The bundled link table is invalid: {0}")]
    Builtin(String),
}
