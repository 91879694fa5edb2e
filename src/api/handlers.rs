use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::Html;
use chrono::Utc;

use super::error::ApiError;
use super::protocol::ErrorBody;
use crate::record::{Person, Record};
use crate::store::DynStore;

/// How a delete aimed at an absent id is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// The delete succeeds with 204 whether or not the record existed.
    Idempotent,
    /// The delete of an absent record is a 404.
    Strict,
}

pub async fn list_records<R: Record>(
    Extension(store): Extension<DynStore<R>>,
) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(store.list_all().await?))
}

pub async fn get_record<R: Record>(
    Extension(store): Extension<DynStore<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(store.get(&id).await?))
}

pub async fn create_record<R: Record>(
    Extension(store): Extension<DynStore<R>>,
    Json(draft): Json<R::Draft>,
) -> Result<Json<R>, ApiError> {
    let record = store.create(draft).await?;
    tracing::debug!("Created {} {}", R::collection(), record.id());
    Ok(Json(record))
}

pub async fn replace_record<R: Record>(
    Extension(store): Extension<DynStore<R>>,
    Path(id): Path<String>,
    Json(draft): Json<R::Draft>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(store.replace(&id, draft).await?))
}

pub async fn delete_record<R: Record>(
    Extension(store): Extension<DynStore<R>>,
    Extension(policy): Extension<DeletePolicy>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let existed = store.delete(&id).await?;
    if !existed && policy == DeletePolicy::Strict {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /info`: entry count plus the moment the page was rendered.
pub async fn info_page(
    Extension(persons): Extension<DynStore<Person>>,
) -> Result<Html<String>, ApiError> {
    let count = persons.list_all().await?.len();
    Ok(Html(format!(
        "<p> Phonebook has info for {} people </p>{}",
        count,
        Utc::now().to_rfc2822()
    )))
}

/// `GET /`: landing fragment pointing at the collections.
pub async fn landing_page() -> Html<&'static str> {
    Html("<div><h1>Phonebook</h1><p>go to /api/persons for contacts or /api/notes for notes</p></div>")
}

/// Fallback for every route the router does not know.
pub async fn unknown_endpoint() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("unknown endpoint")),
    )
}
