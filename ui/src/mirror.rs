//! Local mirror of the phonebook collection.
//!
//! The client keeps an advisory copy of the server's collection and renders
//! from it. The mirror is stale after any server-side change until the
//! record returned by the server is merged back in; filtering and lookups
//! never touch the server.

use phonebook::record::Person;

/// What saving a name/number pair should do, decided against the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAction {
    /// No mirrored record carries the name yet.
    Create,
    /// A record with exactly this name exists; replace its number once the
    /// user confirms.
    Replace { id: String },
}

/// The client's copy of the collection.
#[derive(Debug, Default)]
pub struct Mirror {
    records: Vec<Person>,
}

impl Mirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole mirror with the server's view.
    pub fn replace_all(&mut self, records: Vec<Person>) {
        self.records = records;
    }

    /// Inserts the record, or overwrites the mirrored copy with the same id.
    pub fn upsert(&mut self, record: Person) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.id == record.id)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Drops the record with `id`, if mirrored.
    pub fn remove(&mut self, id: &str) {
        self.records.retain(|record| record.id != id);
    }

    /// Case-insensitive substring filter over names; an empty filter keeps
    /// every record.
    pub fn filtered(&self, filter: &str) -> Vec<&Person> {
        let needle = filter.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exact-name lookup used by the save flow.
    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Decides between creating a new record and replacing the one already
    /// carrying `name`.
    pub fn plan_save(&self, name: &str) -> SaveAction {
        match self.find_by_name(name) {
            Some(existing) => SaveAction::Replace {
                id: existing.id.clone(),
            },
            None => SaveAction::Create,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
