use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{InvalidDraft, Record};

/// A single note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier, fixed for the lifetime of the note.
    pub id: String,
    pub content: String,
    pub important: bool,
    /// ISO-8601 creation instant with millisecond precision, e.g.
    /// `2019-05-30T17:30:31.098Z`. Set once at creation and never rewritten.
    pub date: String,
}

/// Wire payload for creating or replacing a note.
///
/// `content` is required and must be non-empty. `important` is optional: a
/// note created without it gets a coin-flip default, and a replace without it
/// keeps the stored flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub content: Option<String>,
    pub important: Option<bool>,
}

impl NoteDraft {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            important: None,
        }
    }
}

impl Record for Note {
    type Draft = NoteDraft;

    fn collection() -> &'static str {
        "notes"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(draft: &Self::Draft) -> Result<(), InvalidDraft> {
        match &draft.content {
            Some(content) if !content.is_empty() => Ok(()),
            _ => Err(InvalidDraft::missing_content()),
        }
    }

    fn from_draft(id: String, draft: Self::Draft) -> Self {
        Self {
            id,
            content: draft.content.unwrap_or_default(),
            important: draft.important.unwrap_or_else(rand::random),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn apply(&mut self, draft: Self::Draft) {
        self.content = draft.content.unwrap_or_default();
        if let Some(important) = draft.important {
            self.important = important;
        }
    }
}
