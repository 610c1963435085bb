use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// An absent search term lists the whole catalog.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub search_term: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(search_term: Option<&str>) -> Self {
        Self {
            search_term: search_term.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let search_term = req.search_term.as_deref().unwrap_or("");
        self.catalog_service.search(search_term)
            .await.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
