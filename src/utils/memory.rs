use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::query::Query;
use crate::core::repository::{Change, ChangeSet};

// MemoryStore keeps committed records in insertion order. Clones share the same records.
#[derive(Debug, Clone)]
pub struct MemoryStore<Entity> {
    table_name: String,
    records: Arc<RwLock<Vec<Entity>>>,
}

impl<Entity> MemoryStore<Entity>
    where Entity: Identifiable + Clone {
    pub fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            records: Arc::new(RwLock::new(vec![])),
        }
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_str()
    }

    pub(crate) async fn find(&self, id: i32) -> LibraryResult<Option<Entity>> {
        let records = self.records.read().await;
        let found = records.iter().find(|e| e.id() == id).cloned();
        debug!(table = self.table_name.as_str(), id, found = found.is_some(), "find");
        Ok(found)
    }

    pub(crate) async fn first(&self, query: &Query<Entity>) -> LibraryResult<Entity> {
        let records = self.records.read().await;
        query.apply(records.iter()).first().map(|e| (*e).clone())
            .ok_or_else(|| LibraryError::not_found(
                format!("no {} record matches {:?}", self.table_name, query).as_str()))
    }

    pub(crate) async fn query(&self, query: &Query<Entity>) -> LibraryResult<Vec<Entity>> {
        let records = self.records.read().await;
        let matched: Vec<Entity> = query.apply(records.iter()).into_iter().cloned().collect();
        debug!(table = self.table_name.as_str(), matched = matched.len(), "query");
        Ok(matched)
    }

    // Replays the change set over a copy of the committed records while holding the write
    // lock, and swaps the copy in only when every change applies cleanly.
    pub(crate) async fn commit(&self, changes: ChangeSet<Entity>) -> LibraryResult<usize> {
        let mut records = self.records.write().await;
        let mut updated = records.clone();
        for change in changes.changes() {
            if let Err(err) = apply_change(&mut updated, change) {
                warn!(table = self.table_name.as_str(), discarded = changes.len(), "commit rejected: {}", err);
                return Err(err);
            }
        }
        *records = updated;
        info!(table = self.table_name.as_str(), applied = changes.len(), "commit");
        Ok(changes.len())
    }
}

fn apply_change<Entity>(records: &mut Vec<Entity>, change: &Change<Entity>) -> LibraryResult<()>
    where Entity: Identifiable + Clone {
    match change {
        Change::Insert(entity) => {
            if records.iter().any(|e| e.id() == entity.id()) {
                return Err(LibraryError::duplicate_key(
                    format!("record {} already exists", entity.id()).as_str()));
            }
            records.push(entity.clone());
        }
        Change::Update(entity) => {
            let existing = records.iter_mut().find(|e| e.id() == entity.id())
                .ok_or_else(|| LibraryError::not_found(
                    format!("record {} not found for update", entity.id()).as_str()))?;
            *existing = entity.clone();
        }
        Change::Remove(id) => {
            let pos = records.iter().position(|e| e.id() == *id)
                .ok_or_else(|| LibraryError::not_found(
                    format!("record {} not found for removal", id).as_str()))?;
            records.remove(pos);
        }
    }
    Ok(())
}
