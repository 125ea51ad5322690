//! The HTTP surface of the cricket knowledge graph.
//!
//! Serves the dataset as linked data with content negotiation, a read-only SPARQL endpoint, a
//! statistics dashboard and a JSON search API.

use axum::routing::get;
use axum::Router;
use cricket_kg::KnowledgeGraph;
use std::net::SocketAddr;
use std::str::FromStr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod api;
mod config;
mod content_negotiation;
mod data;
mod error;
mod pages;
mod service_description;
mod sparql;

pub use config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub graph: KnowledgeGraph,
}

/// Builds the routes of the server without binding a socket.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_dashboard))
        .route("/about", get(pages::handle_about))
        .route("/api/search", get(api::handle_search))
        .route("/data", get(data::handle_data))
        .route("/player/{name}", get(data::handle_player))
        .route("/team/{name}", get(data::handle_team))
        .route(
            "/sparql",
            get(sparql::handle_query_get).post(sparql::handle_query_post),
        )
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from_str(&config.bind)?;

    let app = create_router(AppState {
        graph: config.graph,
    });
    let app = if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };
    let app = app.layer(TraceLayer::new_for_http());

    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    Ok(axum::serve(listener, app).await?)
}
