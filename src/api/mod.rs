//! HTTP API Module
//!
//! Exposes the record collections over REST and assembles the full
//! application router.
//!
//! ## Overview
//! Each collection gets the same five routes — list, fetch, create, replace,
//! delete — registered once per record type over generic handlers. The
//! stores arrive as trait objects through request extensions, so the same
//! router serves the in-memory and the document backend.
//!
//! ## Responsibilities
//! - Route registration for `/api/persons`, `/api/notes`, `/info` and `/`.
//! - Status code discipline: 200 with the record for reads, creates and
//!   replaces, 204 for deletes, and the normalized error responses for
//!   everything that fails.
//! - A fallback that answers every unknown route with
//!   `404 {"error": "unknown endpoint"}`.
//! - Per-request logging of method, path, status, size, latency and body.
//!
//! ## Submodules
//! - **`protocol`**: route constants and the error envelope.
//! - **`handlers`**: the generic request handlers and the delete policy.
//! - **`error`**: store-failure to HTTP-response normalization.
//! - **`logging`**: the request logging middleware.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod protocol;

#[cfg(test)]
mod tests;

pub use handlers::DeletePolicy;

use axum::Router;
use axum::extract::Extension;
use axum::middleware;
use axum::routing::get;

use crate::record::{Note, Person};
use crate::store::DynStore;

/// Assembles the application router around the two injected stores.
pub fn router(persons: DynStore<Person>, notes: DynStore<Note>, policy: DeletePolicy) -> Router {
    Router::new()
        .route("/", get(handlers::landing_page))
        .route(protocol::INFO_PATH, get(handlers::info_page))
        .route(
            protocol::PERSONS_PATH,
            get(handlers::list_records::<Person>).post(handlers::create_record::<Person>),
        )
        .route(
            &format!("{}/:id", protocol::PERSONS_PATH),
            get(handlers::get_record::<Person>)
                .put(handlers::replace_record::<Person>)
                .delete(handlers::delete_record::<Person>),
        )
        .route(
            protocol::NOTES_PATH,
            get(handlers::list_records::<Note>).post(handlers::create_record::<Note>),
        )
        .route(
            &format!("{}/:id", protocol::NOTES_PATH),
            get(handlers::get_record::<Note>)
                .put(handlers::replace_record::<Note>)
                .delete(handlers::delete_record::<Note>),
        )
        .fallback(handlers::unknown_endpoint)
        .layer(middleware::from_fn(logging::log_request))
        .layer(Extension(persons))
        .layer(Extension(notes))
        .layer(Extension(policy))
}
