//! Typed views of the Jira agile REST payloads this service reads.
//!
//! Only the fields the board transformation needs are modeled; everything
//! else in the upstream documents is ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /board/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraBoard {
    pub name: String,
}

/// Response of `GET /board/{id}/configuration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfiguration {
    pub column_config: ColumnConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_query: Option<SubQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub statuses: Vec<StatusRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRef {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// Response of `GET /board/{id}/issue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePage {
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    pub status: StatusRef,
    #[serde(default)]
    pub priority: serde_json::Value,
}

impl BoardConfiguration {
    /// Extra JQL clause configured on the board, if any.
    pub fn sub_query(&self) -> Option<&str> {
        self.sub_query.as_ref()?.query.as_deref()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
