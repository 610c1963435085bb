use crate::books::domain::Book;

// SearchPredicate matches a book when any term occurs in its title or author, ignoring case.
// A search text without terms matches every book.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPredicate {
    terms: Vec<String>,
}

impl SearchPredicate {
    pub fn parse(search_term: &str) -> Self {
        Self {
            terms: search_term.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_match_all(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches<B: Book + ?Sized>(&self, book: &B) -> bool {
        if self.is_match_all() {
            return true;
        }
        let title = book.title().to_lowercase();
        let author = book.author().to_lowercase();
        self.terms.iter().any(|term| title.contains(term.as_str()) || author.contains(term.as_str()))
    }
}
