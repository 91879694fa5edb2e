//! HTTP Wire Protocol
//!
//! Route constants and the JSON envelope shared by the server, its tests and
//! the terminal client. Record payloads are the `record` types themselves and
//! their drafts; this module only adds what is not a record.

use serde::{Deserialize, Serialize};

/// Collection endpoint for phonebook entries.
pub const PERSONS_PATH: &str = "/api/persons";

/// Collection endpoint for notes.
pub const NOTES_PATH: &str = "/api/notes";

/// Human-readable service summary.
pub const INFO_PATH: &str = "/info";

/// Uniform JSON error envelope, `{"error": "..."}`.
///
/// Every non-2xx response that carries a body uses this shape; the only
/// bodiless failure is the 404 for a missing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
