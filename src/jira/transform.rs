//! Reshapes joined Jira results into a [`Board`].

use super::{
    aggregate::BoardResults,
    api::{ColumnDefinition, JiraIssue},
};
use crate::board::{Board, Card, Column};

/// Status an issue must carry to land in `column`.
///
/// Only the first configured status is considered, even when a column maps to several.
fn column_status(column: &ColumnDefinition) -> Option<&str> {
    column.statuses.first().map(|status| status.id.as_str())
}

fn card_from_issue(issue: &JiraIssue) -> Card {
    Card {
        id: issue.key.clone(),
        title: issue.fields.summary.clone(),
        priority: issue.fields.priority.clone(),
    }
}

pub fn board_from_results(results: &BoardResults) -> Board {
    let columns = results
        .configuration
        .column_config
        .columns
        .iter()
        .filter_map(|col| {
            let status = column_status(col)?;
            Some(Column {
                title: col.name.clone(),
                cards: results
                    .issues
                    .issues
                    .iter()
                    .filter(|issue| issue.fields.status.id == status)
                    .map(card_from_issue)
                    .collect(),
            })
        })
        .collect();

    Board {
        title: results.board.name.clone(),
        columns,
    }
}

/// Keys of issues that no column picks up. They are left off the board.
pub fn unmatched_issues(results: &BoardResults) -> Vec<&str> {
    let statuses: Vec<&str> = results
        .configuration
        .column_config
        .columns
        .iter()
        .filter_map(column_status)
        .collect();

    results
        .issues
        .issues
        .iter()
        .filter(|issue| !statuses.contains(&issue.fields.status.id.as_str()))
        .map(|issue| issue.key.as_str())
        .collect()
}
