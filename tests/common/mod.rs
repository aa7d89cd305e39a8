#![allow(dead_code)]

use serde_json::{Value, json};

pub mod test_context;

pub fn sprint_board() -> Value {
    json!({ "id": 10, "name": "Sprint Board", "type": "scrum" })
}

pub fn configuration() -> Value {
    json!({
        "id": 10,
        "name": "Sprint Board",
        "columnConfig": {
            "columns": [
                { "name": "To Do", "statuses": [{ "id": "1", "self": "https://jira.example.com/status/1" }] },
                { "name": "Done", "statuses": [] }
            ],
            "constraintType": "issueCount"
        }
    })
}

pub fn issues() -> Value {
    json!({
        "startAt": 0,
        "maxResults": 500,
        "total": 1,
        "issues": [{
            "key": "X-1",
            "fields": { "summary": "Fix bug", "status": { "id": "1" }, "priority": "High" }
        }]
    })
}

pub fn expected_board() -> Value {
    json!({
        "title": "Sprint Board",
        "columns": [{
            "title": "To Do",
            "cards": [{ "id": "X-1", "title": "Fix bug", "priority": "High" }]
        }]
    })
}
