//! Normalized board model returned to callers.

use serde::{Deserialize, Serialize};

/// A kanban board made of ordered columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    pub columns: Vec<Column>,
}

/// One visible lane of a [`Board`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub cards: Vec<Card>,
}

/// A single remote issue placed in a [`Column`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Remote issue key, e.g. `PROJ-12`.
    pub id: String,
    pub title: String,
    /// Copied verbatim from the remote issue.
    pub priority: serde_json::Value,
}
