//! Linked data views of the dataset and of single players and teams.

use crate::content_negotiation::DataRepresentation;
use crate::error::ServerError;
use crate::AppState;
use anyhow::anyhow;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use cricket_kg::model::vocab::namespaces;
use cricket_kg::model::Graph;
use cricket_kg::{ExportFormat, KnowledgeGraph, QueryError};

/// A graph serialized in the negotiated format.
pub struct GraphResponse {
    format: ExportFormat,
    body: Vec<u8>,
}

impl GraphResponse {
    fn new(graph: &Graph, format: ExportFormat) -> Result<Self, ServerError> {
        Ok(Self {
            format,
            body: format.write_graph(graph, &namespaces::DATA_PREFIXES, Vec::new())?,
        })
    }
}

impl IntoResponse for GraphResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, self.format.media_type())],
            self.body,
        )
            .into_response()
    }
}

pub async fn handle_data(
    State(state): State<AppState>,
    representation: DataRepresentation,
) -> Result<Response, ServerError> {
    match representation {
        DataRepresentation::Html => Ok(Redirect::to("/about").into_response()),
        DataRepresentation::Rdf(format) => {
            let response = tokio::task::spawn_blocking(move || {
                GraphResponse::new(state.graph.graph(), format)
            })
            .await
            .map_err(|e| ServerError::Internal(anyhow!(e)))??;
            Ok(response.into_response())
        }
    }
}

pub async fn handle_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
    format: ExportFormat,
) -> Result<GraphResponse, ServerError> {
    describe(state.graph, name, format, KnowledgeGraph::describe_player, "player").await
}

pub async fn handle_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
    format: ExportFormat,
) -> Result<GraphResponse, ServerError> {
    describe(state.graph, name, format, KnowledgeGraph::describe_team, "team").await
}

async fn describe(
    graph: KnowledgeGraph,
    name: String,
    format: ExportFormat,
    query: fn(&KnowledgeGraph, &str) -> Result<Graph, QueryError>,
    kind: &'static str,
) -> Result<GraphResponse, ServerError> {
    tokio::task::spawn_blocking(move || {
        let description = query(&graph, &name)?;
        if description.is_empty() {
            return Err(ServerError::NotFound(format!("No {kind} matches '{name}'")));
        }
        GraphResponse::new(&description, format)
    })
    .await
    .map_err(|e| ServerError::Internal(anyhow!(e)))?
}
