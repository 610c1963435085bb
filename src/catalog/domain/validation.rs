use crate::books::domain::Book;
use crate::core::domain::Configuration;
use crate::core::library::CatalogStatus;

// ValidationIntent selects which rules apply to a candidate book.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationIntent {
    Insert,
    Update,
}

// Checks a candidate for insert or update and reports only the first violation, in this order:
// id required, duplicate id (insert only), title, author, price range, quantity range.
// `id_taken` tells whether a stored book already uses the candidate's id.
pub fn validate_book<B: Book + ?Sized>(config: &Configuration, book: &B,
                                       intent: ValidationIntent, id_taken: bool) -> CatalogStatus {
    if book.id() == 0 {
        return CatalogStatus::IdRequired;
    }
    if intent == ValidationIntent::Insert && id_taken {
        return CatalogStatus::DuplicateId;
    }
    validate_fields(config, book)
}

// Checks a removal: id required, then existence, then order line references.
pub fn validate_delete(book_id: i32, found: bool, referenced_by_order: bool) -> CatalogStatus {
    if book_id == 0 {
        return CatalogStatus::IdRequired;
    }
    if !found {
        return CatalogStatus::NotFound;
    }
    if referenced_by_order {
        return CatalogStatus::ReferencedByOrder;
    }
    CatalogStatus::Success
}

fn validate_fields<B: Book + ?Sized>(config: &Configuration, book: &B) -> CatalogStatus {
    if book.title().is_empty() {
        return CatalogStatus::TitleRequired;
    }
    if book.author().is_empty() {
        return CatalogStatus::AuthorRequired;
    }
    // both bounds inclusive
    if book.price() < config.min_price || book.price() > config.max_price {
        return CatalogStatus::PriceOutOfRange;
    }
    if book.quantity() < config.min_quantity || book.quantity() > config.max_quantity {
        return CatalogStatus::QuantityOutOfRange;
    }
    CatalogStatus::Success
}
