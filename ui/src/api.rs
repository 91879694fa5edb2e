//! Phonebook API client.
//!
//! Thin wrapper around the record endpoints. Every mutation returns the
//! server's view of the record so the caller can merge it into the mirror
//! instead of trusting what it sent.

use phonebook::api::protocol::{ErrorBody, PERSONS_PATH};
use phonebook::record::{Person, PersonDraft};
use thiserror::Error;

/// Failure of one service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The record no longer exists on the server; the mirror entry is stale.
    #[error("record no longer exists on the server")]
    Gone,
    /// The server rejected the request; carries its error message.
    #[error("{0}")]
    Rejected(String),
    /// Transport-level failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct PersonService {
    base_url: String,
    client: reqwest::Client,
}

impl PersonService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Person>, ServiceError> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub async fn create(&self, draft: &PersonDraft) -> Result<Person, ServiceError> {
        tracing::debug!("POST {}", self.collection_url());
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub async fn update(&self, id: &str, draft: &PersonDraft) -> Result<Person, ServiceError> {
        tracing::debug!("PUT {}", self.record_url(id));
        let response = self
            .client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        tracing::debug!("DELETE {}", self.record_url(id));
        let response = self.client.delete(self.record_url(id)).send().await?;
        Self::checked(response).await?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, PERSONS_PATH)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, PERSONS_PATH, id)
    }

    /// Turns non-2xx responses into `ServiceError`s, reading the error
    /// envelope when the server sent one.
    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ServiceError::Gone);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("request failed with status {status}"));
        Err(ServiceError::Rejected(message))
    }
}
