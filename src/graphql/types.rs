//! GraphQL type definitions
//!
//! Object types wrap store records. Relationship fields (`Book.author`,
//! `Book.genres`, `Author.books`, `Genre.books`) look the related records up
//! through the catalog each time they are resolved.

use async_graphql::{Context, ID, InputObject, MaybeUndefined, Object, Union};
use chrono::{DateTime, NaiveDate, Utc};

use crate::db::{AuthorRecord, BookRecord, GenreRecord};
use crate::services::{CatalogService, SearchHit};

use super::helpers::to_id;

/// A book in the catalog
#[derive(Debug, Clone)]
pub struct Book(pub BookRecord);

#[Object]
impl Book {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn summary(&self) -> Option<&str> {
        self.0.summary.as_deref()
    }

    async fn pages(&self) -> Option<i32> {
        self.0.pages
    }

    async fn published_date(&self) -> Option<NaiveDate> {
        self.0.published_date
    }

    /// The book's author, or null if the author no longer exists
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        ctx.data_unchecked::<CatalogService>()
            .get_author(self.0.author_id)
            .map(Author)
    }

    async fn genres(&self, ctx: &Context<'_>) -> Vec<Genre> {
        ctx.data_unchecked::<CatalogService>()
            .genres_by_ids(&self.0.genre_ids)
            .into_iter()
            .map(Genre)
            .collect()
    }

    /// Average rating, conventionally 0.0 - 5.0
    async fn rating(&self) -> Option<f64> {
        self.0.rating
    }

    async fn is_available(&self) -> Option<bool> {
        self.0.is_available
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Self(record)
    }
}

/// A book author
#[derive(Debug, Clone)]
pub struct Author(pub AuthorRecord);

#[Object]
impl Author {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn bio(&self) -> Option<&str> {
        self.0.bio.as_deref()
    }

    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        tracing::debug!(author_id = %self.0.id, name = %self.0.name, "Resolving books for author");
        ctx.data_unchecked::<CatalogService>()
            .list_books_by_author(self.0.id)
            .into_iter()
            .map(Book)
            .collect()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }
}

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        Self(record)
    }
}

/// A literary genre
#[derive(Debug, Clone)]
pub struct Genre(pub GenreRecord);

#[Object]
impl Genre {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Books tagged with this genre
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.data_unchecked::<CatalogService>()
            .list_books_by_genre(self.0.id)
            .into_iter()
            .map(Book)
            .collect()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }
}

impl From<GenreRecord> for Genre {
    fn from(record: GenreRecord) -> Self {
        Self(record)
    }
}

/// A search match of any entity kind
#[derive(Union)]
pub enum SearchResult {
    Book(Book),
    Author(Author),
    Genre(Genre),
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        match hit {
            SearchHit::Book(b) => SearchResult::Book(Book(b)),
            SearchHit::Author(a) => SearchResult::Author(Author(a)),
            SearchHit::Genre(g) => SearchResult::Genre(Genre(g)),
        }
    }
}

/// Input for creating a book
#[derive(Debug, InputObject)]
pub struct BookInput {
    pub title: String,
    pub summary: Option<String>,
    pub pages: Option<i32>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub published_date: Option<String>,
    pub author_id: ID,
    pub genre_ids: Option<Vec<ID>>,
    pub rating: Option<f64>,
    pub is_available: Option<bool>,
}

/// Partial update for a book. Omitted fields are left unchanged; nullable
/// fields set to null are cleared.
#[derive(Debug, Default, InputObject)]
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub summary: MaybeUndefined<String>,
    pub pages: MaybeUndefined<i32>,
    pub published_date: MaybeUndefined<String>,
    pub author_id: Option<ID>,
    pub genre_ids: Option<Vec<ID>>,
    pub rating: MaybeUndefined<f64>,
    pub is_available: MaybeUndefined<bool>,
}

/// Input for creating an author
#[derive(Debug, InputObject)]
pub struct AuthorInput {
    pub name: String,
    pub bio: Option<String>,
}

/// Partial update for an author
#[derive(Debug, Default, InputObject)]
pub struct UpdateAuthorInput {
    pub name: Option<String>,
    pub bio: MaybeUndefined<String>,
}
