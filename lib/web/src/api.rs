use crate::error::ServerError;
use crate::AppState;
use anyhow::anyhow;
use axum::extract::{Query, State};
use axum::Json;
use cricket_kg::BowlerSummary;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Finds the players whose name contains `q`, ignoring case.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<BowlerSummary>>, ServerError> {
    let rows = tokio::task::spawn_blocking(move || state.graph.search_players(&params.q))
        .await
        .map_err(|e| ServerError::Internal(anyhow!(e)))??;
    Ok(Json(rows))
}
