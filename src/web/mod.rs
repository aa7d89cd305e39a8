//! HTTP surface of the board service.

use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{HeaderMap, Request, Uri},
    response::IntoResponse,
    routing::get,
};
use headers::{CacheControl, HeaderMapExt};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Span, debug, debug_span};

use crate::{
    board::Board,
    config::ServerConfig,
    jira::{
        aggregate::fetch_board_results,
        client::BoardClient,
        transform::{board_from_results, unmatched_issues},
    },
    prelude::*,
};

/// How long callers may cache a rendered board.
pub const BOARD_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(Clone)]
pub struct AppState {
    http: reqwest::Client,
    jira_scheme: String,
}

impl AppState {
    pub fn new(http: reqwest::Client, jira_scheme: impl Into<String>) -> Self {
        Self {
            http,
            jira_scheme: jira_scheme.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self::new(config.http_client()?, config.jira_scheme.clone()))
    }
}

#[derive(Debug, Deserialize)]
pub struct BoardParams {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Request URI for logging, with the `apiKey` credential masked.
pub fn redacted_uri(uri: &Uri) -> String {
    let Some(query) = uri.query() else {
        return uri.path().to_string();
    };
    let query: Vec<&str> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("apiKey", _)) => "apiKey=REDACTED",
            _ => pair,
        })
        .collect();
    format!("{}?{}", uri.path(), query.join("&"))
}

fn make_request_span(request: &Request<Body>) -> Span {
    debug_span!(
        "request",
        method = %request.method(),
        uri = %redacted_uri(request.uri()),
        version = ?request.version(),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/jira/{board_id}", get(jira_board))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Renders one Jira board. Any failure along the way becomes a bare 500.
#[axum::debug_handler]
pub async fn jira_board(
    State(state): State<AppState>,
    board_id: std::result::Result<Path<String>, PathRejection>,
    params: std::result::Result<Query<BoardParams>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Path(board_id) = board_id?;
    let Query(params) = params?;
    let board = load_jira_board(&state, &board_id, params.api_key.as_deref()).await?;

    let mut headers = HeaderMap::new();
    headers.typed_insert(CacheControl::new().with_max_age(BOARD_MAX_AGE));
    Ok((headers, Json(board)))
}

pub async fn load_jira_board(
    state: &AppState,
    reference: &str,
    api_key: Option<&str>,
) -> Result<Board> {
    let client = BoardClient::new(state.http.clone(), &state.jira_scheme, reference, api_key)?;
    let results = fetch_board_results(&client).await?;

    let unmatched = unmatched_issues(&results);
    if !unmatched.is_empty() {
        debug!(
            "{} issue(s) on {reference} match no column: {}",
            unmatched.len(),
            unmatched.join(", ")
        );
    }

    Ok(board_from_results(&results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_api_key() {
        let uri: Uri = "/jira/jira.example.com:10?apiKey=user:token&x=1"
            .parse()
            .unwrap();
        assert_eq!(
            redacted_uri(&uri),
            "/jira/jira.example.com:10?apiKey=REDACTED&x=1"
        );
    }

    #[test]
    fn redacts_every_api_key() {
        let uri: Uri = "/jira/a:1?apiKey=a&apiKey=b".parse().unwrap();
        assert_eq!(
            redacted_uri(&uri),
            "/jira/a:1?apiKey=REDACTED&apiKey=REDACTED"
        );
    }

    #[test]
    fn leaves_plain_paths_alone() {
        let uri: Uri = "/jira/jira.example.com:10".parse().unwrap();
        assert_eq!(redacted_uri(&uri), "/jira/jira.example.com:10");
    }
}
