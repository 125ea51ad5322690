use crate::io::ExportFormat;
use cricket_kg_model::IriParseError;
use oxigraph::sparql::EvaluationError;
use oxigraph::store::StorageError;
use oxrdfio::RdfParseError;
use std::io;
use std::path::PathBuf;

/// An error raised while loading a file into a [`KnowledgeGraph`](crate::KnowledgeGraph).
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// An error raised while reading the file.
    #[error(transparent)]
    Parsing(#[from] RdfParseError),
    /// An error raised during the insertion in the store.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The file could not be opened.
    #[error("Unable to open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Graphs cannot be read from this format.
    #[error("Reading {0} is not supported")]
    UnsupportedFormat(ExportFormat),
    /// The format of the file could not be guessed from its extension.
    #[error("The format of '{}' is unknown, expected one of ttl, nt, rdf, owl, jsonld", path.display())]
    UnknownFormat { path: PathBuf },
}

/// An error raised while writing a graph or query results.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    /// An error raised while writing the content.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// An error raised while reading the facts of the store.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// An error raised while encoding JSON-LD.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The results of a query do not fit the requested format.
    #[error("{results} results cannot be written as {format}")]
    UnsupportedResults {
        results: &'static str,
        format: String,
    },
    /// A prefix of the serializer is bound to an invalid IRI.
    #[error("Invalid IRI for prefix {prefix}: {error}")]
    InvalidPrefix {
        prefix: String,
        #[source]
        error: IriParseError,
    },
}

/// An error raised while answering a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The query is not valid SPARQL. The graph is left untouched.
    #[error("Invalid SPARQL query: {0}")]
    Syntax(String),
    /// The query failed while it was evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// An error raised while reading the facts of the store.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The query returned a different kind of result than its caller expects.
    #[error("Expected {expected} results")]
    UnexpectedResults { expected: &'static str },
}
