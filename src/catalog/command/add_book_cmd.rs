use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::CatalogStatus;

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub book_id: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl AddBookCommandRequest {
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
pub struct AddBookCommandResponse {
    pub status: CatalogStatus,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(status: CatalogStatus, book: BookDto) -> Self {
        Self {
            status,
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from)
            .map(|status| AddBookCommandResponse::new(status, book))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::CatalogStatus;
    use crate::core::repository::RepositoryStore;

    async fn build_cmd() -> AddBookCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory).await;
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = build_cmd().await;
        let res = cmd.execute(AddBookCommandRequest::new(1, "Ray Bradbury", "Fahrenheit 451", Decimal::new(750, 2), 6))
            .await.expect("should add book");
        assert_eq!(CatalogStatus::Success, res.status);
        assert_eq!("Fahrenheit 451", res.book.title.as_str());

        let res = cmd.execute(AddBookCommandRequest::new(1, "Ray Bradbury", "Dandelion Wine", Decimal::new(750, 2), 6))
            .await.expect("should validate book");
        assert_eq!(CatalogStatus::DuplicateId, res.status);
    }

    #[tokio::test]
    async fn test_should_parse_request_and_serialize_status_code() {
        let cmd = build_cmd().await;
        let req: AddBookCommandRequest = serde_json::from_value(
            json!({"book_id": 2, "author": "Ray Bradbury", "price": "12.00", "quantity": 3}))
            .expect("should parse request");
        let res = cmd.execute(req).await.expect("should validate book");
        let value = serde_json::to_value(&res).expect("should serialize response");
        assert_eq!(json!(3), value["status"]);
    }
}
