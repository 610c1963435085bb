use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindCheapBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl FindCheapBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindCheapBooksCommandRequest {
    pub number_of_books: usize,
}

impl FindCheapBooksCommandRequest {
    pub fn new(number_of_books: usize) -> Self {
        Self {
            number_of_books,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindCheapBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindCheapBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindCheapBooksCommandRequest, FindCheapBooksCommandResponse> for FindCheapBooksCommand {
    async fn execute(&self, req: FindCheapBooksCommandRequest) -> Result<FindCheapBooksCommandResponse, CommandError> {
        self.catalog_service.find_cheap_books(req.number_of_books)
            .await.map_err(CommandError::from).map(FindCheapBooksCommandResponse::new)
    }
}
