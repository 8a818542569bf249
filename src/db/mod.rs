//! In-memory entity store
//!
//! [Database] is the single owner of every Book, Author and Genre record.
//! It is a cheap-to-clone handle; all access goes through [Database::read]
//! or [Database::write], and a write closure runs under one exclusive lock so
//! a whole mutation (validate, then modify) is atomic to readers.

pub mod authors;
pub mod books;
pub mod collection;
pub mod genres;
pub mod joins;
pub mod seed;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

pub use authors::{AuthorRecord, CreateAuthor, UpdateAuthor};
pub use books::{BookRecord, CreateBook, UpdateBook};
pub use collection::{Collection, Record};
pub use genres::GenreRecord;

/// The three entity collections
#[derive(Debug, Default)]
pub struct Tables {
    pub books: Collection<BookRecord>,
    pub authors: Collection<AuthorRecord>,
    pub genres: Collection<GenreRecord>,
}

/// Row counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub books: usize,
    pub authors: usize,
    pub genres: usize,
}

/// Shared handle to the store
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: Arc<RwLock<Tables>>,
}

impl Database {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against a consistent view of the store
    pub fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        f(&self.tables.read())
    }

    /// Run `f` with exclusive access to the store
    pub fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.tables.write())
    }

    pub fn counts(&self) -> TableCounts {
        self.read(|t| TableCounts {
            books: t.books.len(),
            authors: t.authors.len(),
            genres: t.genres.len(),
        })
    }
}

/// Timestamp for a record being modified: now, but never earlier than the
/// record's previous `updated_at`.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
