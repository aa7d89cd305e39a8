//! Issue list query for a board.

use super::api::BoardConfiguration;

pub const ISSUE_FIELDS: &str = "summary,status,priority";
pub const MAX_RESULTS: u32 = 500;

/// Relative path of the issue list, honoring the board's own sub-query.
pub fn issue_query(configuration: &BoardConfiguration) -> String {
    let mut params = vec![
        format!("fields={ISSUE_FIELDS}"),
        format!("maxResults={MAX_RESULTS}"),
    ];
    if let Some(sub_query) = configuration.sub_query() {
        params.push(sub_query.to_string());
    }
    format!("/issue?{}", params.join("&"))
}
