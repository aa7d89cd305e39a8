//! Jira agile board provider.

pub mod aggregate;
pub mod api;
pub mod client;
pub mod query;
pub mod transform;
