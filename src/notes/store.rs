use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::{collections::HashMap, fmt::Debug as FmtDebug, sync::Arc};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    notes::{model::Note, requests},
};

/// The path of the note collection of an employee, used as the location of
/// a newly added note.
pub fn collection_path(employee_id: &str) -> String {
    format!("/employees/{}/notes", employee_id)
}

/// The creation time of a new note. It never goes before the previous note
/// of the same employee, even if the wall clock steps backwards.
fn stamp(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    previous.map_or(now, |previous| previous.max(now))
}

/// An in-memory, append-only log of notes per employee.
///
/// Cloning a store is cheap and the clones share their notes, so hand one
/// store to everything that should see the same notes. Notes live as long
/// as the last clone; nothing is persisted and nothing is evicted.
#[derive(Debug, Clone, Default)]
pub struct Store {
    notes: Arc<RwLock<HashMap<String, Vec<Note>>>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// List the notes of an employee, newest first. A blank or unknown
    /// employee ID has no notes.
    #[instrument(skip(self))]
    pub fn list<I>(&self, employee_id: I) -> Vec<Note>
    where
        I: AsRef<str> + FmtDebug,
    {
        let employee_id = employee_id.as_ref();
        if employee_id.trim().is_empty() {
            return Vec::new();
        }

        self.notes
            .read()
            .get(employee_id)
            .map(|notes| notes.iter().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// Add a note to an employee and return it.
    ///
    /// # Errors
    /// If the employee ID or the content is empty or only whitespace. The
    /// store is left untouched in that case.
    #[instrument(skip(self, content))]
    pub fn add<I, C>(&self, employee_id: I, content: C) -> Result<Note>
    where
        I: Into<String> + FmtDebug,
        C: Into<String>,
    {
        self.add_request(
            employee_id,
            requests::Create {
                content: content.into(),
            },
        )
    }

    /// Add a note from a decoded request body.
    ///
    /// # Errors
    /// If the employee ID or the content is empty or only whitespace.
    #[instrument(skip(self, req))]
    pub fn add_request<I>(&self, employee_id: I, req: requests::Create) -> Result<Note>
    where
        I: Into<String> + FmtDebug,
    {
        let employee_id = employee_id.into();
        if employee_id.trim().is_empty() {
            return Err(Error::EmptyEmployeeId);
        }
        req.validate()?;

        // Stamp the note while holding the lock so the order of a list
        // matches the creation times.
        let mut notes = self.notes.write();
        let list = notes.entry(employee_id.clone()).or_default();
        let created_at = stamp(list.last().map(|last| last.created_at), Utc::now());
        let note = Note::new(employee_id, req.content, created_at);
        list.push(note.clone());
        drop(notes);

        debug!(note_id = %note.id, "added note");
        Ok(note)
    }

    /// The number of notes of an employee.
    pub fn count(&self, employee_id: &str) -> usize {
        self.notes.read().get(employee_id).map_or(0, Vec::len)
    }

    /// Returns true if no employee has any note.
    pub fn is_empty(&self) -> bool {
        self.notes.read().values().all(Vec::is_empty)
    }
}
