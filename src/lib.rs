//! Jira board aggregation service.
//!
//! Fetches a remote Jira agile board's metadata, column configuration and
//! issue list, then joins them into a single [`board::Board`] of columns and
//! cards served over HTTP.

pub mod board;
pub mod config;
pub mod error;
pub mod jira;
pub mod prelude;
pub mod web;
