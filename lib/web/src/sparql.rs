//! The read-only [SPARQL 1.1 protocol](https://www.w3.org/TR/sparql11-protocol/) endpoint.

use crate::error::ServerError;
use crate::service_description::generate_service_description;
use crate::AppState;
use anyhow::anyhow;
use axum::extract::{FromRequestParts, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::RequestPartsExt;
use cricket_kg::model::vocab::namespaces;
use cricket_kg::{ExportFormat, KnowledgeGraph, QueryAnswer, QueryResultsFormat};
use serde::Deserialize;

#[derive(Deserialize)]
struct SparqlQueryParamsRaw {
    #[serde(default)]
    query: Option<String>,
}

pub struct SparqlQueryParams {
    pub query: Option<String>,
}

impl FromRequestParts<AppState> for SparqlQueryParams {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw_params = parts
            .extract::<Query<SparqlQueryParamsRaw>>()
            .await
            .map_err(|e| ServerError::BadRequest(e.to_string()))?
            .0;
        Ok(SparqlQueryParams {
            query: raw_params.query,
        })
    }
}

pub async fn handle_query_get(
    State(state): State<AppState>,
    query_params: SparqlQueryParams,
    rdf_format: Result<ExportFormat, ServerError>,
    query_format: Result<QueryResultsFormat, ServerError>,
) -> Result<Response, ServerError> {
    match query_params.query {
        Some(query) if !query.is_empty() => {
            evaluate_sparql_query(state.graph, query, rdf_format, query_format).await
        }
        _ => Ok(generate_service_description(rdf_format?)?.into_response()),
    }
}

/// Accepts the query either directly (`application/sparql-query`) or as the `query` field of an
/// URL-encoded form.
pub async fn handle_query_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    rdf_format: Result<ExportFormat, ServerError>,
    query_format: Result<QueryResultsFormat, ServerError>,
    body: String,
) -> Result<Response, ServerError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .unwrap_or_default();
    let query = match content_type {
        "application/sparql-query" => body,
        "application/x-www-form-urlencoded" => url::form_urlencoded::parse(body.as_bytes())
            .find(|(name, _)| name == "query")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default(),
        other => {
            return Err(ServerError::BadRequest(format!(
                "Unsupported content type '{other}', expected application/sparql-query or application/x-www-form-urlencoded"
            )))
        }
    };
    if query.is_empty() {
        return Err(ServerError::BadRequest("No query provided".to_owned()));
    }
    evaluate_sparql_query(state.graph, query, rdf_format, query_format).await
}

/// Evaluates a SPARQL query on the blocking thread pool and serializes its answer.
async fn evaluate_sparql_query(
    graph: KnowledgeGraph,
    query: String,
    rdf_format: Result<ExportFormat, ServerError>,
    query_format: Result<QueryResultsFormat, ServerError>,
) -> Result<Response, ServerError> {
    let answer = tokio::task::spawn_blocking(move || graph.query(&query))
        .await
        .map_err(|e| ServerError::Internal(anyhow!(e)))??;

    let (media_type, body) = match &answer {
        QueryAnswer::Graph(graph) => {
            let format = rdf_format?;
            let body = format.write_graph(graph, &namespaces::DATA_PREFIXES, Vec::new())?;
            (format.media_type(), body)
        }
        QueryAnswer::Solutions(_) | QueryAnswer::Boolean(_) => {
            let format = query_format?;
            (format.media_type(), answer.write(format, Vec::new())?)
        }
    };
    Ok((StatusCode::OK, [(CONTENT_TYPE, media_type)], body).into_response())
}
