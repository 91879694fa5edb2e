//! Phonebook Service Library
//!
//! This library crate defines the modules behind the phonebook backend and
//! its terminal client. It serves as the foundation for the server binary
//! (`main.rs`) and the collection CLI (`dbcli`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`record`**: The domain layer. Defines the record types (phonebook
//!   entries and notes), their wire drafts and the validation rules.
//! - **`store`**: The state layer. One asynchronous CRUD interface with two
//!   backends: a seeded in-memory collection and an append-only document
//!   collection file.
//! - **`api`**: The HTTP layer. Generic REST handlers over the record types,
//!   error normalization and per-request logging.
//! - **`config`**: Environment-driven runtime settings (port, backend
//!   selection, delete policy).

pub mod api;
pub mod config;
pub mod record;
pub mod store;
