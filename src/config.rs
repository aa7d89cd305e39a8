//! Server configuration loaded from the environment.

use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use crate::prelude::*;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SCHEME: &str = "https";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Scheme used when composing upstream Jira URLs.
    pub jira_scheme: String,
    /// Transport timeout for upstream requests. `None` waits indefinitely.
    pub jira_timeout: Option<Duration>,
}

fn get_env_variable(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parse_variable<T: FromStr>(var: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        var,
        value: value.to_string(),
    })
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            get_env_variable("BOARD_SERVER_ADDR"),
            get_env_variable("JIRA_SCHEME"),
            get_env_variable("JIRA_TIMEOUT_SECS"),
        )
    }

    fn from_vars(
        addr: Option<String>,
        scheme: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self> {
        let addr = parse_variable(
            "BOARD_SERVER_ADDR",
            addr.as_deref().unwrap_or(DEFAULT_ADDR),
        )?;

        let jira_scheme = match scheme {
            None => String::from(DEFAULT_SCHEME),
            Some(s) if s == "http" || s == "https" => s,
            Some(s) => {
                return Err(Error::InvalidConfig {
                    var: "JIRA_SCHEME",
                    value: s,
                });
            }
        };

        let jira_timeout = timeout_secs
            .map(|secs| parse_variable::<u64>("JIRA_TIMEOUT_SECS", &secs))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            addr,
            jira_scheme,
            jira_timeout,
        })
    }

    /// Builds the shared transport every board client is layered on.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(timeout) = self.jira_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            jira_scheme: String::from(DEFAULT_SCHEME),
            jira_timeout: None,
        }
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "addr={} jira_scheme={}", self.addr, self.jira_scheme)?;
        match self.jira_timeout {
            Some(timeout) => write!(f, " jira_timeout={}s", timeout.as_secs()),
            None => write!(f, " jira_timeout=none"),
        }
    }
}
