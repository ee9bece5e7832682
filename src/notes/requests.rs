//! Request types for the notes API.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    serde::deserialize_null_default,
};

/// The body of a request to add a note, `{"content": "..."}`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[must_use]
pub struct Create {
    /// The text of the note. A missing or null field decodes as empty and
    /// is rejected when the note is added.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub content: String,
}

impl Create {
    /// Helper to quickly create a request.
    ///
    /// # Errors
    /// If the content is empty or only whitespace.
    pub fn new(content: &(impl ToString + ?Sized)) -> Result<Self> {
        let request = Self {
            content: content.to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }
        Ok(())
    }
}
