pub mod search;
pub mod service;
pub mod validation;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{CatalogStatus, LibraryResult};
use crate::orders::domain::model::OrderLineEntity;

// CatalogService answers book queries and applies book mutations. Mutations report their
// outcome as a CatalogStatus; an Err is only returned when the repositories fail.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn find_book_by_id(&self, id: i32) -> LibraryResult<BookDto>;
    async fn search(&self, search_term: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_cheap_books(&self, number_of_books: usize) -> LibraryResult<Vec<BookDto>>;
    async fn find_order_lines(&self, book_id: i32) -> LibraryResult<Vec<OrderLineEntity>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<CatalogStatus>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<CatalogStatus>;
    async fn remove_book(&self, id: i32) -> LibraryResult<CatalogStatus>;
}
