use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a catalog title with its price and the number of copies in stock.
// The identifier is assigned by the caller, not generated.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i32,
    pub author: String,
    pub title: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl BookEntity {
    pub fn new(book_id: i32, author: &str, title: &str, price: Decimal, quantity: i32) -> Self {
        Self {
            book_id,
            author: author.to_string(),
            title: title.to_string(),
            price,
            quantity,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i32 {
        self.book_id
    }
}

impl Book for BookEntity {
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
