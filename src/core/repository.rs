use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::core::query::Query;

#[derive(Debug, PartialEq, Clone)]
pub enum Change<Entity> {
    Insert(Entity),
    Update(Entity),
    Remove(i32),
}

// ChangeSet is a unit of work owned by one caller. Nothing in it is visible to anyone
// until it is handed to Repository::commit.
#[derive(Debug, PartialEq, Clone)]
pub struct ChangeSet<Entity> {
    changes: Vec<Change<Entity>>,
}

impl<Entity: Clone> ChangeSet<Entity> {
    pub fn new() -> Self {
        Self { changes: vec![] }
    }

    // stages an insert of an entity
    pub fn create(&mut self, entity: &Entity) -> &mut Self {
        self.changes.push(Change::Insert(entity.clone()));
        self
    }

    // stages an overwrite of an existing entity
    pub fn update(&mut self, entity: &Entity) -> &mut Self {
        self.changes.push(Change::Update(entity.clone()));
        self
    }

    // stages removal of an entity
    pub fn delete(&mut self, id: i32) -> &mut Self {
        self.changes.push(Change::Remove(id));
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[Change<Entity>] {
        &self.changes
    }
}

impl<Entity: Clone> Default for ChangeSet<Entity> {
    fn default() -> Self {
        ChangeSet::new()
    }
}

// Repository only exposes committed records; writes arrive as whole change sets.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // find an entity, if present
    async fn find(&self, id: i32) -> LibraryResult<Option<Entity>>;

    // first entity matching the query, or a not-found error
    async fn first(&self, query: &Query<Entity>) -> LibraryResult<Entity>;

    // filtered, ordered and limited entities
    async fn query(&self, query: &Query<Entity>) -> LibraryResult<Vec<Entity>>;

    // applies every change of the set or none of them, returning how many were applied
    async fn commit(&self, changes: ChangeSet<Entity>) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
}
