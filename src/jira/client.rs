//! HTTP client scoped to a single Jira agile board.
//!
//! A [`BoardClient`] is built per request from a `host:boardId` reference
//! and an optional API key, on top of the shared `reqwest::Client`.

use std::str::FromStr;

use headers::{Authorization, HeaderMapExt};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::prelude::*;

/// A remote board given as `host:boardId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardReference {
    pub host: String,
    pub board_id: String,
}

impl BoardReference {
    pub fn base_url(&self, scheme: &str) -> String {
        format!(
            "{scheme}://{}/rest/agile/latest/board/{}",
            self.host, self.board_id
        )
    }
}

impl FromStr for BoardReference {
    type Err = Error;

    /// The board id is everything after the last `:`.
    ///
    /// `host:port:boardId` is accepted on purpose so boards on non-default ports resolve.
    fn from_str(reference: &str) -> Result<Self> {
        match reference.rsplit_once(':') {
            Some((host, board_id)) if !host.is_empty() && !board_id.is_empty() => Ok(Self {
                host: host.to_string(),
                board_id: board_id.to_string(),
            }),
            _ => Err(Error::MalformedBoardReference(reference.to_string())),
        }
    }
}

/// How an API key authenticates against Jira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// `user:token` pair sent as HTTP Basic.
    Basic { username: String, password: String },
    /// Opaque personal access token sent as a Bearer token.
    Bearer(String),
}

impl Credential {
    /// Empty keys count as no credential at all.
    pub fn from_api_key(api_key: Option<&str>) -> Option<Self> {
        api_key.filter(|key| !key.is_empty()).map(Self::parse)
    }

    pub fn parse(api_key: &str) -> Self {
        match api_key.split_once(':') {
            Some((username, password)) => Self::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => Self::Bearer(api_key.to_string()),
        }
    }

    pub fn insert_into(&self, headers: &mut HeaderMap) -> Result<()> {
        match self {
            Credential::Basic { username, password } => {
                headers.typed_insert(Authorization::basic(username, password))
            }
            Credential::Bearer(token) => headers.typed_insert(
                Authorization::bearer(token).map_err(|_| Error::InvalidCredential)?,
            ),
        }
        Ok(())
    }
}

/// Per-call options layered over the client's defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
}

#[derive(Debug, Clone)]
pub struct BoardClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl BoardClient {
    pub fn new(
        client: reqwest::Client,
        scheme: &str,
        reference: &str,
        api_key: Option<&str>,
    ) -> Result<Self> {
        let reference: BoardReference = reference.parse()?;
        let mut default_headers = HeaderMap::new();
        if let Some(credential) = Credential::from_api_key(api_key) {
            credential.insert_into(&mut default_headers)?;
        }
        Ok(Self {
            client,
            base_url: reference.base_url(scheme),
            default_headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// GETs `base_url + path`. Headers in `options` replace defaults of the same name.
    pub async fn fetch(&self, path: &str, options: RequestOptions) -> Result<reqwest::Response> {
        let url = format!("{}{path}", self.base_url);
        let mut headers = self.default_headers.clone();
        headers.extend(options.headers);

        debug!("GET {url}");
        let response = self.client.get(&url).headers(headers).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus { status, url });
        }
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self
            .fetch(path, RequestOptions::default())
            .await?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}
