//! Main Crate Error

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use crate::jira::aggregate::Role;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error("Malformed board reference '{0}'")]
    MalformedBoardReference(String),

    #[error("Invalid credential")]
    InvalidCredential,

    #[error("No '{0}' result to join")]
    MissingRole(Role),

    #[error("Invalid value '{value}' for {var}")]
    InvalidConfig { var: &'static str, value: String },
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
