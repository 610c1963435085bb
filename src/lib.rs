//! Catalog management for a bookshop: book lookup, keyword search, cheap-book ranking and
//! validated create/update/delete, on top of repository traits with staged commits.

pub mod books;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod utils;
