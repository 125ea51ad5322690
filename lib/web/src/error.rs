use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cricket_kg::{QueryError, SerializerError};

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Content Negotiation Failed: {0}")]
    ContentNegotiation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl From<QueryError> for ServerError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Syntax(message) => ServerError::BadRequest(message),
            error => ServerError::Internal(error.into()),
        }
    }
}

impl From<SerializerError> for ServerError {
    fn from(error: SerializerError) -> Self {
        ServerError::Internal(error.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::ContentNegotiation(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, message).into_response()
    }
}
