use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RecordStore;
use super::error::StoreError;
use crate::record::Record;

struct Inner<R> {
    records: Vec<R>,
    last_id: u64,
}

impl<R: Record> Inner<R> {
    /// Next id: one past the largest numeric id in the collection, but never
    /// below the high-water mark, so deleting the newest record cannot cause
    /// its id to be handed out again.
    fn next_id(&mut self) -> u64 {
        let max_id = self
            .records
            .iter()
            .filter_map(|record| record.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.last_id = self.last_id.max(max_id) + 1;
        self.last_id
    }
}

/// Ordered in-memory collection guarded by a single lock.
///
/// Ids are numeric strings. Creates serialize on the write lock, which is
/// what makes the scan-for-maximum id assignment safe under concurrency.
/// An id that does not parse as a number can never match a stored record.
pub struct MemoryStore<R> {
    inner: RwLock<Inner<R>>,
}

impl<R: Record> MemoryStore<R> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a collection pre-populated with `records`, keeping their ids.
    pub fn with_records(records: Vec<R>) -> Self {
        let last_id = records
            .iter()
            .filter_map(|record| record.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            inner: RwLock::new(Inner { records, last_id }),
        }
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn list_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.inner.read().await.records.clone())
    }

    async fn get(&self, id: &str) -> Result<R, StoreError> {
        let wanted: u64 = id.parse().map_err(|_| StoreError::NotFound)?;
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|record| record.id().parse() == Ok(wanted))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        R::validate(&draft)?;
        let mut inner = self.inner.write().await;
        let id = inner.next_id();
        let record = R::from_draft(id.to_string(), draft);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: &str, draft: R::Draft) -> Result<R, StoreError> {
        R::validate(&draft)?;
        let wanted: u64 = id.parse().map_err(|_| StoreError::NotFound)?;
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .iter_mut()
            .find(|record| record.id().parse() == Ok(wanted))
            .ok_or(StoreError::NotFound)?;
        record.apply(draft);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let wanted: u64 = match id.parse() {
            Ok(n) => n,
            Err(_) => return Ok(false),
        };
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner
            .records
            .retain(|record| record.id().parse() != Ok(wanted));
        Ok(inner.records.len() != before)
    }
}
