use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// OrderLineEntity is a line item of an order placed in the shop. It refers to a book by id;
// the order aggregate owning it lives outside the catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OrderLineEntity {
    pub order_line_id: i32,
    pub order_id: i32,
    pub book_id: i32,
    pub quantity: i32,
}

impl OrderLineEntity {
    pub fn new(order_line_id: i32, order_id: i32, book_id: i32, quantity: i32) -> Self {
        Self {
            order_line_id,
            order_id,
            book_id,
            quantity,
        }
    }
}

impl Identifiable for OrderLineEntity {
    fn id(&self) -> i32 {
        self.order_line_id
    }
}
