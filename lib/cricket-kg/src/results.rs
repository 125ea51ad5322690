//! Query results collected into memory.
//!
//! The graph is small and read-only, so results are materialized instead of streamed. This keeps
//! the solutions in the order the query defines and lets them be inspected more than once.

use crate::error::{QueryError, SerializerError};
use cricket_kg_model::{literal_to_f64, Graph, Term};
use oxigraph::sparql::{QueryResults, QuerySolution, Variable};
use sparesults::{QueryResultsFormat, QueryResultsSerializer};
use std::io::Write;

/// The answer to a SPARQL query.
#[derive(Debug)]
pub enum QueryAnswer {
    /// Results of a `SELECT` query.
    Solutions(Solutions),
    /// Result of an `ASK` query.
    Boolean(bool),
    /// Results of a `CONSTRUCT` or `DESCRIBE` query.
    Graph(Graph),
}

impl QueryAnswer {
    pub(crate) fn collect(results: QueryResults) -> Result<Self, QueryError> {
        Ok(match results {
            QueryResults::Solutions(solutions) => {
                let variables = solutions.variables().to_vec();
                let rows = solutions.collect::<Result<Vec<_>, _>>()?;
                QueryAnswer::Solutions(Solutions { variables, rows })
            }
            QueryResults::Boolean(value) => QueryAnswer::Boolean(value),
            QueryResults::Graph(triples) => {
                let mut graph = Graph::new();
                for triple in triples {
                    graph.insert(&triple?);
                }
                QueryAnswer::Graph(graph)
            }
        })
    }

    /// A short name of the result kind used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryAnswer::Solutions(_) => "Solution",
            QueryAnswer::Boolean(_) => "Boolean",
            QueryAnswer::Graph(_) => "Graph",
        }
    }

    /// Writes solutions or a boolean in one of the SPARQL results formats.
    ///
    /// Graphs are written with [`ExportFormat::write_graph`](crate::ExportFormat::write_graph)
    /// instead.
    pub fn write<W: Write>(
        &self,
        format: QueryResultsFormat,
        writer: W,
    ) -> Result<W, SerializerError> {
        let serializer = QueryResultsSerializer::from_format(format);
        match self {
            QueryAnswer::Solutions(solutions) => {
                let mut serializer = serializer
                    .serialize_solutions_to_writer(writer, solutions.variables.clone())?;
                for solution in &solutions.rows {
                    serializer.serialize(solution)?;
                }
                Ok(serializer.finish()?)
            }
            QueryAnswer::Boolean(value) => {
                Ok(serializer.serialize_boolean_to_writer(writer, *value)?)
            }
            QueryAnswer::Graph(_) => Err(SerializerError::UnsupportedResults {
                results: self.kind(),
                format: format.name().to_owned(),
            }),
        }
    }
}

/// The solutions of a `SELECT` query in query order.
#[derive(Debug, Default)]
pub struct Solutions {
    variables: Vec<Variable>,
    rows: Vec<QuerySolution>,
}

impl Solutions {
    /// The projected variables.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn rows(&self) -> &[QuerySolution] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&QuerySolution> {
        self.rows.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuerySolution> + '_ {
        self.rows.iter()
    }
}

/// The lexical value of a binding.
///
/// IRIs are returned without angle brackets and literals without their datatype or language.
pub fn binding_text(solution: &QuerySolution, variable: &str) -> Option<String> {
    solution.get(variable).and_then(|term| match term {
        Term::NamedNode(node) => Some(node.as_str().to_owned()),
        Term::Literal(literal) => Some(literal.value().to_owned()),
        _ => None,
    })
}

/// The numeric value of a binding.
pub fn binding_number(solution: &QuerySolution, variable: &str) -> Option<f64> {
    solution.get(variable).and_then(|term| match term {
        Term::Literal(literal) => literal_to_f64(literal),
        _ => None,
    })
}

/// Reads a numeric binding as a count. Fractional parts are truncated.
#[expect(
    clippy::cast_sign_loss,
    reason = "counts and sums of wickets are small non-negative numbers"
)]
pub fn binding_count(solution: &QuerySolution, variable: &str) -> Option<u64> {
    binding_number(solution, variable).map(|value| value.max(0.0) as u64)
}
