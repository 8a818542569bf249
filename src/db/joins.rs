//! Relationship traversal over the current store state.
//!
//! Nothing here caches: every call walks the collections as they are now,
//! so a nested field resolved after a mutation sees the mutation.

use uuid::Uuid;

use super::{AuthorRecord, BookRecord, GenreRecord, Tables};

impl Tables {
    pub fn book(&self, id: Uuid) -> Option<&BookRecord> {
        self.books.get(id)
    }

    pub fn author(&self, id: Uuid) -> Option<&AuthorRecord> {
        self.authors.get(id)
    }

    pub fn genre(&self, id: Uuid) -> Option<&GenreRecord> {
        self.genres.get(id)
    }

    /// Books written by `author_id`, in book collection order
    pub fn books_by_author(&self, author_id: Uuid) -> impl Iterator<Item = &BookRecord> {
        self.books.iter().filter(move |b| b.author_id == author_id)
    }

    /// Books tagged with `genre_id`, in book collection order
    pub fn books_by_genre(&self, genre_id: Uuid) -> impl Iterator<Item = &BookRecord> {
        self.books.iter().filter(move |b| b.has_genre(genre_id))
    }

    /// Genres for a list of ids, in the given order. Dangling ids are skipped.
    pub fn genres_for<'a>(&'a self, ids: &'a [Uuid]) -> impl Iterator<Item = &'a GenreRecord> {
        ids.iter().filter_map(|id| self.genres.get(*id))
    }
}
