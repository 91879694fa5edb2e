use thiserror::Error;

use crate::record::InvalidDraft;

/// Failures surfaced by the record stores.
///
/// The first three variants map one-to-one onto client-visible responses;
/// the remaining ones are internal faults of the document backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required non-empty field was missing from the draft.
    #[error("{0}")]
    Validation(#[from] InvalidDraft),

    /// No record lives under the requested identifier.
    #[error("record not found")]
    NotFound,

    /// The identifier does not have the shape the backend expects.
    #[error("malformatted id")]
    MalformedId,

    /// The collection file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A collection file line could not be encoded or decoded.
    #[error(transparent)]
    Encoding(#[from] serde_json::Error),
}
