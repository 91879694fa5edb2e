use serde::{Deserialize, Serialize};

use super::{InvalidDraft, Record};

/// A single phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier, fixed for the lifetime of the entry.
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Wire payload for creating or replacing a phonebook entry.
///
/// Both fields are required and must be non-empty; they are modeled as
/// `Option` so an absent field is reported as a validation failure rather
/// than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonDraft {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            number: Some(number.to_string()),
        }
    }
}

impl Record for Person {
    type Draft = PersonDraft;

    fn collection() -> &'static str {
        "persons"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(draft: &Self::Draft) -> Result<(), InvalidDraft> {
        match (&draft.name, &draft.number) {
            (Some(name), Some(number)) if !name.is_empty() && !number.is_empty() => Ok(()),
            _ => Err(InvalidDraft::missing_content()),
        }
    }

    fn from_draft(id: String, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            number: draft.number.unwrap_or_default(),
        }
    }

    fn apply(&mut self, draft: Self::Draft) {
        self.name = draft.name.unwrap_or_default();
        self.number = draft.number.unwrap_or_default();
    }
}
