use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note attached to an employee. Notes never change once created.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique ID of the note
    pub id: String,
    /// ID of the employee the note belongs to. It isn't checked against
    /// the employees fetched from upstream.
    pub employee_id: String,
    /// The text of the note, never blank
    pub content: String,
    /// Time the note was added
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub(crate) fn new(employee_id: String, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id,
            content,
            created_at,
        }
    }
}
