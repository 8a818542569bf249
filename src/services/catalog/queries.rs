use tracing::debug;
use uuid::Uuid;

use crate::db::{AuthorRecord, BookRecord, GenreRecord};

use super::CatalogService;
use super::search::{SearchHit, search_tables};
use super::sort::{BookSortKey, Direction, sort_books};

/// Arguments for a paginated book listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBooks {
    pub limit: usize,
    pub offset: usize,
    pub sort_by: String,
    pub direction: Direction,
}

impl Default for ListBooks {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            sort_by: "title".to_string(),
            direction: Direction::Asc,
        }
    }
}

impl CatalogService {
    pub fn get_book(&self, id: Uuid) -> Option<BookRecord> {
        self.db.read(|t| t.book(id).cloned())
    }

    /// Sorted slice `[offset, offset + limit)` of all books
    pub fn list_books(&self, params: &ListBooks) -> Vec<BookRecord> {
        let key = BookSortKey::parse(&params.sort_by);
        if key.is_none() {
            debug!(sort_by = %params.sort_by, "Unknown sort field, keeping collection order");
        }

        let mut books = self.db.read(|t| t.books.to_vec());
        sort_books(&mut books, key, params.direction);

        books
            .into_iter()
            .skip(params.offset)
            .take(params.limit)
            .collect()
    }

    pub fn list_books_by_author(&self, author_id: Uuid) -> Vec<BookRecord> {
        self.db
            .read(|t| t.books_by_author(author_id).cloned().collect())
    }

    pub fn list_books_by_genre(&self, genre_id: Uuid) -> Vec<BookRecord> {
        self.db
            .read(|t| t.books_by_genre(genre_id).cloned().collect())
    }

    pub fn get_author(&self, id: Uuid) -> Option<AuthorRecord> {
        self.db.read(|t| t.author(id).cloned())
    }

    pub fn list_authors(&self) -> Vec<AuthorRecord> {
        self.db.read(|t| t.authors.to_vec())
    }

    pub fn get_genre(&self, id: Uuid) -> Option<GenreRecord> {
        self.db.read(|t| t.genre(id).cloned())
    }

    /// Genres for the given ids, skipping ids that no longer resolve
    pub fn genres_by_ids(&self, ids: &[Uuid]) -> Vec<GenreRecord> {
        self.db.read(|t| t.genres_for(ids).cloned().collect())
    }

    pub fn list_genres(&self) -> Vec<GenreRecord> {
        self.db.read(|t| t.genres.to_vec())
    }

    /// Case-insensitive substring search; books, then authors, then genres
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        let hits = self.db.read(|t| search_tables(t, term));
        debug!(term, hits = hits.len(), "Catalog search");
        hits
    }
}
