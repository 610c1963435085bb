use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i32,
    pub author: String,
    pub title: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl BookDto {
    pub fn new(book_id: i32, author: &str, title: &str, price: Decimal, quantity: i32) -> BookDto {
        BookDto {
            book_id,
            author: author.to_string(),
            title: title.to_string(),
            price,
            quantity,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i32 {
        self.book_id
    }
}

impl Book for BookDto {
    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            author: other.author.to_string(),
            title: other.title.to_string(),
            price: other.price,
            quantity: other.quantity,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            author: other.author.to_string(),
            title: other.title.to_string(),
            price: other.price,
            quantity: other.quantity,
        }
    }
}
