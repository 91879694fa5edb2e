//! Record Store Module
//!
//! Owns the authoritative record collections behind one asynchronous CRUD
//! interface with two interchangeable backends.
//!
//! ## Responsibilities
//! - Validate drafts before any mutation and leave the collection untouched
//!   when an operation fails.
//! - Assign identifiers at creation time and never hand the same id out twice
//!   within a store lifetime.
//! - Answer lookups, replacements and deletions by id, with deletion of an
//!   absent id reported as a successful no-op.
//!
//! ## Submodules
//! - **`memory`**: ordered in-memory collection with numeric string ids.
//! - **`document`**: append-only JSONL collection file with a full in-memory
//!   index and UUID ids.
//! - **`error`**: the failure taxonomy shared by both backends.

pub mod document;
pub mod error;
pub mod memory;


pub use document::DocumentStore;
pub use error::StoreError;
pub use memory::MemoryStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::record::Record;

/// Shared store handle the HTTP handlers receive.
pub type DynStore<R> = Arc<dyn RecordStore<R>>;

/// The five operations every backend provides.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Returns every record in the collection.
    async fn list_all(&self) -> Result<Vec<R>, StoreError>;

    /// Returns the record stored under `id`.
    async fn get(&self, id: &str) -> Result<R, StoreError>;

    /// Validates the draft, assigns a fresh id and stores the new record.
    async fn create(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Overwrites the domain fields of the record stored under `id` and
    /// returns the updated record.
    async fn replace(&self, id: &str, draft: R::Draft) -> Result<R, StoreError>;

    /// Removes the record stored under `id`, reporting whether it existed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
