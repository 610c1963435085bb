use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::query::Query;
use crate::core::repository::{ChangeSet, Repository};
use crate::utils::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    store: MemoryStore<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new(table_name: &str) -> Self {
        Self {
            store: MemoryStore::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn find(&self, id: i32) -> LibraryResult<Option<BookEntity>> {
        self.store.find(id).await
    }

    async fn first(&self, query: &Query<BookEntity>) -> LibraryResult<BookEntity> {
        self.store.first(query).await
    }

    async fn query(&self, query: &Query<BookEntity>) -> LibraryResult<Vec<BookEntity>> {
        self.store.query(query).await
    }

    async fn commit(&self, changes: ChangeSet<BookEntity>) -> LibraryResult<usize> {
        self.store.commit(changes).await
    }
}

impl BookRepository for MemoryBookRepository {}
