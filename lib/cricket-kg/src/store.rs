//! A read-only knowledge graph that can be queried with SPARQL.
//!
//! The entry point of the module is the [`KnowledgeGraph`] struct.
//!
//! Usage example:
//! ```
//! use cricket_kg::{KnowledgeGraph, QueryAnswer};
//! use cricket_kg_model::{Graph, NamedNodeRef, TripleRef};
//!
//! let ex = NamedNodeRef::new("http://example.com")?;
//! let mut graph = Graph::new();
//! graph.insert(TripleRef::new(ex, ex, ex));
//!
//! let kg = KnowledgeGraph::from_graph(graph)?;
//! assert_eq!(kg.len(), 1);
//! if let QueryAnswer::Solutions(solutions) = kg.query("SELECT ?s WHERE { ?s ?p ?o }")? {
//!     assert_eq!(solutions.len(), 1);
//! }
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::error::{LoaderError, QueryError};
use crate::io::{parse_graph, ExportFormat};
use crate::results::{QueryAnswer, Solutions};
use cricket_kg_model::vocab::owl;
use cricket_kg_model::{Graph, GraphName, NamedNodeRef, TermRef};
use cricket_kg_pipeline::ExternalSource;
use oxigraph::sparql::Query;
use oxigraph::store::{StorageError, Store};
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

/// An immutable snapshot of the knowledge graph.
///
/// The facts are kept both as a [`Graph`], which is what exports are written from, and in an
/// in-memory [`Store`] answering SPARQL queries. Cloning is cheap and clones share both.
#[derive(Clone)]
pub struct KnowledgeGraph {
    graph: Arc<Graph>,
    store: Store,
}

impl fmt::Debug for KnowledgeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnowledgeGraph")
            .field("triples", &self.graph.len())
            .finish_non_exhaustive()
    }
}

impl KnowledgeGraph {
    /// Indexes `graph` for querying.
    pub fn from_graph(graph: Graph) -> Result<Self, StorageError> {
        let store = Store::new()?;
        store.extend(
            graph
                .iter()
                .map(|triple| triple.into_owned().in_graph(GraphName::DefaultGraph)),
        )?;
        tracing::info!(triples = graph.len(), "Loaded knowledge graph");
        Ok(Self {
            graph: Arc::new(graph),
            store,
        })
    }

    /// Loads a graph serialized in `format`.
    pub fn load_from_reader(
        format: ExportFormat,
        reader: impl Read,
    ) -> Result<Self, LoaderError> {
        let Some(format) = format.rdf_format() else {
            return Err(LoaderError::UnsupportedFormat(format));
        };
        Ok(Self::from_graph(parse_graph(format, reader)?)?)
    }

    /// Loads a graph from a file whose format is guessed from its extension.
    pub fn load_from_path(path: &Path) -> Result<Self, LoaderError> {
        let format = path
            .extension()
            .and_then(OsStr::to_str)
            .and_then(ExportFormat::from_extension)
            .ok_or_else(|| LoaderError::UnknownFormat {
                path: path.to_owned(),
            })?;
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_owned(),
            source,
        })?;
        tracing::info!(path = %path.display(), %format, "Loading knowledge graph");
        Self::load_from_reader(format, BufReader::new(file))
    }

    /// The facts of the knowledge graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The number of facts.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Answers a read-only [SPARQL 1.1 query](https://www.w3.org/TR/sparql11-query/).
    ///
    /// Updates are rejected as syntax errors.
    pub fn query(&self, query: &str) -> Result<QueryAnswer, QueryError> {
        let query =
            Query::parse(query, None).map_err(|error| QueryError::Syntax(error.to_string()))?;
        QueryAnswer::collect(self.store.query(query)?)
    }

    /// Answers a `SELECT` query.
    pub fn select(&self, query: &str) -> Result<Solutions, QueryError> {
        match self.query(query)? {
            QueryAnswer::Solutions(solutions) => Ok(solutions),
            _ => Err(QueryError::UnexpectedResults {
                expected: "Solution",
            }),
        }
    }

    /// Answers a `CONSTRUCT` or `DESCRIBE` query.
    pub fn construct(&self, query: &str) -> Result<Graph, QueryError> {
        match self.query(query)? {
            QueryAnswer::Graph(graph) => Ok(graph),
            _ => Err(QueryError::UnexpectedResults { expected: "Graph" }),
        }
    }

    /// The external resources `resource` is linked to with `owl:sameAs`.
    pub fn external_links(&self, resource: NamedNodeRef<'_>) -> ExternalLinks {
        let mut links = ExternalLinks::default();
        for target in self
            .graph
            .objects_for_subject_predicate(resource, owl::SAME_AS)
        {
            let TermRef::NamedNode(target) = target else {
                continue;
            };
            let slot = match ExternalSource::of_iri(target.as_str()) {
                Some(ExternalSource::DBpedia) => &mut links.dbpedia,
                Some(ExternalSource::Wikidata) => &mut links.wikidata,
                None => continue,
            };
            *slot = Some(target.as_str().to_owned());
        }
        links
    }
}

/// The DBpedia and Wikidata resources a player or team is the same as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalLinks {
    pub dbpedia: Option<String>,
    pub wikidata: Option<String>,
}
