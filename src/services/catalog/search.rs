//! Free-text search across all three entity kinds

use crate::db::{AuthorRecord, BookRecord, GenreRecord, Tables};

use super::error::EntityKind;

/// One search result, tagged with the kind of entity it is
#[derive(Debug, Clone, PartialEq)]
pub enum SearchHit {
    Book(BookRecord),
    Author(AuthorRecord),
    Genre(GenreRecord),
}

impl SearchHit {
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchHit::Book(_) => EntityKind::Book,
            SearchHit::Author(_) => EntityKind::Author,
            SearchHit::Genre(_) => EntityKind::Genre,
        }
    }
}

/// Case-insensitive substring matcher
struct Needle(String);

impl Needle {
    fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }

    fn matches_opt(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| self.matches(t))
    }
}

/// Books (title, summary) first, then authors (name, bio), then genres
/// (name, description); each group in collection order.
pub(crate) fn search_tables(t: &Tables, term: &str) -> Vec<SearchHit> {
    let needle = Needle::new(term);

    let books = t
        .books
        .iter()
        .filter(|b| needle.matches(&b.title) || needle.matches_opt(b.summary.as_deref()))
        .cloned()
        .map(SearchHit::Book);
    let authors = t
        .authors
        .iter()
        .filter(|a| needle.matches(&a.name) || needle.matches_opt(a.bio.as_deref()))
        .cloned()
        .map(SearchHit::Author);
    let genres = t
        .genres
        .iter()
        .filter(|g| needle.matches(&g.name) || needle.matches_opt(g.description.as_deref()))
        .cloned()
        .map(SearchHit::Genre);

    books.chain(authors).chain(genres).collect()
}
