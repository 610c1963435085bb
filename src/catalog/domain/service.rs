use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::search::SearchPredicate;
use crate::catalog::domain::validation::{validate_book, validate_delete, ValidationIntent};
use crate::core::domain::Configuration;
use crate::core::library::{CatalogStatus, LibraryError, LibraryResult};
use crate::core::query::Query;
use crate::core::repository::ChangeSet;
use crate::orders::domain::model::OrderLineEntity;
use crate::orders::repository::OrderLineRepository;

pub struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
    order_line_repository: Box<dyn OrderLineRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               order_line_repository: Box<dyn OrderLineRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            order_line_repository,
        }
    }

    fn rejected(&self, operation: &str, book_id: i32, status: CatalogStatus) -> LibraryResult<CatalogStatus> {
        warn!(shop = self.config.shop_id.as_str(), operation, book_id, code = status.code(), "rejected: {}", status);
        Ok(status)
    }

    // Another caller may commit between the lookup and this commit, so conflicts found by the
    // gateway still come back as status codes.
    async fn commit(&self, operation: &str, book_id: i32, changes: ChangeSet<BookEntity>) -> LibraryResult<CatalogStatus> {
        match self.book_repository.commit(changes).await {
            Ok(_) => {
                info!(shop = self.config.shop_id.as_str(), operation, book_id, "book committed");
                Ok(CatalogStatus::Success)
            }
            Err(LibraryError::DuplicateKey { .. }) => self.rejected(operation, book_id, CatalogStatus::DuplicateId),
            Err(LibraryError::NotFound { .. }) => self.rejected(operation, book_id, CatalogStatus::NotFound),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_book_by_id(&self, id: i32) -> LibraryResult<BookDto> {
        let query = Query::all().filter(move |b: &BookEntity| b.book_id == id);
        match self.book_repository.first(&query).await {
            Ok(book) => Ok(BookDto::from(&book)),
            Err(LibraryError::NotFound { .. }) => {
                Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
            }
            Err(err) => Err(err),
        }
    }

    async fn search(&self, search_term: &str) -> LibraryResult<Vec<BookDto>> {
        let predicate = SearchPredicate::parse(search_term);
        debug!(terms = ?predicate.terms(), "search");
        let query = Query::all()
            .filter(move |b: &BookEntity| predicate.matches(b))
            .order_by(|a: &BookEntity, b: &BookEntity| a.title.cmp(&b.title));
        let books = self.book_repository.query(&query).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_cheap_books(&self, number_of_books: usize) -> LibraryResult<Vec<BookDto>> {
        let query = Query::all()
            .order_by(|a: &BookEntity, b: &BookEntity| a.price.cmp(&b.price))
            .limit(number_of_books);
        let mut books = self.book_repository.query(&query).await?;
        // price picks the books, the result is ordered by title
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_order_lines(&self, book_id: i32) -> LibraryResult<Vec<OrderLineEntity>> {
        self.order_line_repository.find_by_book_id(book_id).await
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<CatalogStatus> {
        let id_taken = book.book_id != 0 && self.book_repository.find(book.book_id).await?.is_some();
        let status = validate_book(&self.config, book, ValidationIntent::Insert, id_taken);
        if !status.is_success() {
            return self.rejected("add", book.book_id, status);
        }
        let mut changes = ChangeSet::new();
        changes.create(&BookEntity::from(book));
        self.commit("add", book.book_id, changes).await
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<CatalogStatus> {
        let mut existing = match self.book_repository.find(book.book_id).await? {
            Some(existing) => existing,
            None => return self.rejected("update", book.book_id, CatalogStatus::NotFound),
        };
        let status = validate_book(&self.config, book, ValidationIntent::Update, true);
        if !status.is_success() {
            return self.rejected("update", book.book_id, status);
        }
        existing.author = book.author.to_string();
        existing.title = book.title.to_string();
        existing.price = book.price;
        existing.quantity = book.quantity;
        let mut changes = ChangeSet::new();
        changes.update(&existing);
        self.commit("update", book.book_id, changes).await
    }

    async fn remove_book(&self, id: i32) -> LibraryResult<CatalogStatus> {
        let existing = match self.book_repository.find(id).await? {
            Some(existing) => existing,
            None => return self.rejected("remove", id, CatalogStatus::NotFound),
        };
        let order_lines = self.order_line_repository.find_by_book_id(id).await?;
        let status = validate_delete(id, true, !order_lines.is_empty());
        if !status.is_success() {
            return self.rejected("remove", id, status);
        }
        let mut changes = ChangeSet::new();
        changes.delete(existing.book_id);
        self.commit("remove", id, changes).await
    }
}
