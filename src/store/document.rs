use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::RecordStore;
use super::error::StoreError;
use crate::record::Record;

/// One line of the collection file: a live record or a tombstone.
#[derive(Debug, Serialize, Deserialize)]
struct LogEntry<R> {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<R>,
    #[serde(default)]
    deleted: bool,
}

impl<R> LogEntry<R> {
    fn put(id: String, record: R) -> Self {
        Self {
            id,
            record: Some(record),
            deleted: false,
        }
    }

    fn tombstone(id: String) -> Self {
        Self {
            id,
            record: None,
            deleted: true,
        }
    }
}

/// Document-collection store persisted as one JSON document per line.
///
/// The collection lives in `<dir>/<collection>.jsonl` and is replayed into a
/// full id → record index on open; deletions are tombstone lines, so the last
/// entry for an id wins. Every mutation appends to the file before it touches
/// the index. Ids are store-assigned UUIDs, and an id that does not parse as
/// a UUID is rejected as malformed before the index is consulted.
pub struct DocumentStore<R> {
    index: DashMap<String, R>,
    file: Mutex<File>,
}

impl<R: Record> DocumentStore<R> {
    /// Opens (or creates) the collection file under `dir` and replays it.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.jsonl", R::collection()));

        let index = DashMap::new();
        if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let entry: LogEntry<R> = serde_json::from_str(&line)?;
                if entry.deleted {
                    index.remove(&entry.id);
                } else if let Some(record) = entry.record {
                    index.insert(entry.id, record);
                }
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(
            "Opened collection {} with {} records",
            path.display(),
            index.len()
        );

        Ok(Self {
            index,
            file: Mutex::new(file),
        })
    }

    fn check_id(id: &str) -> Result<(), StoreError> {
        Uuid::parse_str(id)
            .map(|_| ())
            .map_err(|_| StoreError::MalformedId)
    }

    async fn append(&self, entry: &LogEntry<R>) -> Result<(), StoreError> {
        let line = serde_json::to_string(entry)?;
        let mut file = self.file.lock().await;
        writeln!(file, "{line}")?;
        file.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for DocumentStore<R> {
    async fn list_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self
            .index
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get(&self, id: &str) -> Result<R, StoreError> {
        Self::check_id(id)?;
        self.index
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        R::validate(&draft)?;
        let id = Uuid::new_v4().to_string();
        let record = R::from_draft(id.clone(), draft);
        self.append(&LogEntry::put(id.clone(), record.clone())).await?;
        self.index.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: &str, draft: R::Draft) -> Result<R, StoreError> {
        Self::check_id(id)?;
        R::validate(&draft)?;
        let mut record = self
            .index
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)?;
        record.apply(draft);
        self.append(&LogEntry::put(id.to_string(), record.clone())).await?;
        self.index.insert(id.to_string(), record.clone());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Self::check_id(id)?;
        if !self.index.contains_key(id) {
            return Ok(false);
        }
        self.append(&LogEntry::tombstone(id.to_string())).await?;
        self.index.remove(id);
        Ok(true)
    }
}
