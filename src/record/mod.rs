//! Record Domain Module
//!
//! Defines the two record types served by the HTTP API — phonebook entries and
//! notes — together with the `Record` trait that keeps the stores and the
//! request handlers generic over the domain.
//!
//! ## Core Concepts
//! - **Record**: an entity with a store-assigned string `id` and a handful of
//!   domain fields. The `id` never changes after creation.
//! - **Draft**: the wire payload for create and replace requests. Draft fields
//!   are optional so a missing field reaches domain validation (and a 400
//!   response) instead of failing JSON deserialization.
//! - **Validation**: every record type has required non-empty text fields; a
//!   draft missing one is rejected before any mutation happens.
//!
//! ## Submodules
//! - **`person`**: phonebook entries (`name` + `number`).
//! - **`note`**: notes (`content`, an `important` flag and a creation `date`).

pub mod note;
pub mod person;


pub use note::{Note, NoteDraft};
pub use person::{Person, PersonDraft};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Rejection produced by draft validation, carrying the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidDraft(String);

impl InvalidDraft {
    /// The canonical rejection for a missing or empty required text field.
    pub fn missing_content() -> Self {
        Self("content missing".to_string())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A storable record type.
///
/// Stores call `validate` before any mutation, so `from_draft` and `apply`
/// may assume the draft already passed validation.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Wire payload for create and replace requests.
    type Draft: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Collection name; also the file stem used by the document store.
    fn collection() -> &'static str;

    /// The store-assigned identifier.
    fn id(&self) -> &str;

    /// Checks the required non-empty text fields of a draft.
    fn validate(draft: &Self::Draft) -> Result<(), InvalidDraft>;

    /// Materializes a new record under `id`, applying creation defaults.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Overwrites the domain fields the draft submits; the id and any
    /// creation-only fields stay untouched.
    fn apply(&mut self, draft: Self::Draft);
}
