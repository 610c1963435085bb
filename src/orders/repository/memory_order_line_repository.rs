use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::query::Query;
use crate::core::repository::{ChangeSet, Repository};
use crate::orders::domain::model::OrderLineEntity;
use crate::orders::repository::OrderLineRepository;
use crate::utils::memory::MemoryStore;

#[derive(Debug, Clone)]
pub struct MemoryOrderLineRepository {
    store: MemoryStore<OrderLineEntity>,
}

impl MemoryOrderLineRepository {
    pub fn new(table_name: &str) -> Self {
        Self {
            store: MemoryStore::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<OrderLineEntity> for MemoryOrderLineRepository {
    async fn find(&self, id: i32) -> LibraryResult<Option<OrderLineEntity>> {
        self.store.find(id).await
    }

    async fn first(&self, query: &Query<OrderLineEntity>) -> LibraryResult<OrderLineEntity> {
        self.store.first(query).await
    }

    async fn query(&self, query: &Query<OrderLineEntity>) -> LibraryResult<Vec<OrderLineEntity>> {
        self.store.query(query).await
    }

    async fn commit(&self, changes: ChangeSet<OrderLineEntity>) -> LibraryResult<usize> {
        self.store.commit(changes).await
    }
}

#[async_trait]
impl OrderLineRepository for MemoryOrderLineRepository {
    async fn find_by_book_id(&self, book_id: i32) -> LibraryResult<Vec<OrderLineEntity>> {
        self.query(&Query::all().filter(move |line: &OrderLineEntity| line.book_id == book_id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::{ChangeSet, Repository};
    use crate::orders::domain::model::OrderLineEntity;
    use crate::orders::repository::OrderLineRepository;
    use crate::orders::repository::memory_order_line_repository::MemoryOrderLineRepository;

    #[tokio::test]
    async fn test_should_find_by_book_id() {
        let repo = MemoryOrderLineRepository::new("order_lines");
        let mut changes = ChangeSet::new();
        changes.create(&OrderLineEntity::new(1, 100, 7, 1))
            .create(&OrderLineEntity::new(2, 100, 8, 3))
            .create(&OrderLineEntity::new(3, 101, 7, 2));
        assert!(repo.find_by_book_id(7).await.expect("should query").is_empty());
        repo.commit(changes).await.expect("should commit");

        let lines = repo.find_by_book_id(7).await.expect("should query");
        let ids: Vec<i32> = lines.iter().map(|l| l.order_line_id).collect();
        assert_eq!(vec![1, 3], ids);
        assert!(repo.find_by_book_id(9).await.expect("should query").is_empty());
    }

    #[tokio::test]
    async fn test_should_delete_order_line() {
        let repo = MemoryOrderLineRepository::new("order_lines");
        let mut changes = ChangeSet::new();
        changes.create(&OrderLineEntity::new(1, 100, 7, 1));
        repo.commit(changes).await.expect("should commit");

        let mut changes = ChangeSet::new();
        changes.delete(1);
        repo.commit(changes).await.expect("should commit");
        assert_eq!(None, repo.find(1).await.expect("should find"));
    }
}
