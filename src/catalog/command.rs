pub mod add_book_cmd;
pub mod find_cheap_books_cmd;
pub mod get_book_cmd;
pub mod remove_book_cmd;
pub mod search_books_cmd;
pub mod update_book_cmd;
