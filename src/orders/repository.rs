pub mod memory_order_line_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::orders::domain::model::OrderLineEntity;

#[async_trait]
pub trait OrderLineRepository: Repository<OrderLineEntity> {
    async fn find_by_book_id(&self, book_id: i32) -> LibraryResult<Vec<OrderLineEntity>>;
}
