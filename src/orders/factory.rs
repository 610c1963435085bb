use crate::core::repository::RepositoryStore;
use crate::orders::repository::OrderLineRepository;
use crate::orders::repository::memory_order_line_repository::MemoryOrderLineRepository;

pub async fn create_order_line_repository(store: RepositoryStore) -> Box<dyn OrderLineRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemoryOrderLineRepository::new("order_lines"))
        }
    }
}
