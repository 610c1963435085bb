use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::CatalogStatus;

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i32, author: &str, title: &str, price: Decimal, quantity: i32) -> Self {
        Self {
            book_id,
            author: author.to_string(),
            title: title.to_string(),
            price,
            quantity,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.book_id, self.author.as_str(), self.title.as_str(), self.price, self.quantity)
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub status: CatalogStatus,
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(status: CatalogStatus, book: BookDto) -> Self {
        Self {
            status,
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from)
            .map(|status| UpdateBookCommandResponse::new(status, book))
    }
}
