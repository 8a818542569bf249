//! Book records and their create/patch shapes

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::collection::Record;

/// Book row as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    pub summary: Option<String>,
    pub pages: Option<i32>,
    pub published_date: Option<NaiveDate>,
    pub author_id: Uuid,
    pub genre_ids: Vec<Uuid>,
    pub rating: Option<f64>,
    pub is_available: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for BookRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Fields for a new book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBook {
    pub title: String,
    pub summary: Option<String>,
    pub pages: Option<i32>,
    pub published_date: Option<NaiveDate>,
    pub author_id: Uuid,
    pub genre_ids: Vec<Uuid>,
    pub rating: Option<f64>,
    pub is_available: Option<bool>,
}

/// Partial update for a book.
///
/// `None` leaves a field untouched. Nullable fields use `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub summary: Option<Option<String>>,
    pub pages: Option<Option<i32>>,
    pub published_date: Option<Option<NaiveDate>>,
    pub author_id: Option<Uuid>,
    pub genre_ids: Option<Vec<Uuid>>,
    pub rating: Option<Option<f64>>,
    pub is_available: Option<Option<bool>>,
}

impl BookRecord {
    /// Build a fresh record with a new id; both timestamps are `now`
    pub fn new(input: CreateBook, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            summary: input.summary,
            pages: input.pages,
            published_date: input.published_date,
            author_id: input.author_id,
            genre_ids: input.genre_ids,
            rating: input.rating,
            is_available: input.is_available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge a patch over this record. Timestamps are left alone.
    pub fn apply(&mut self, patch: UpdateBook) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(pages) = patch.pages {
            self.pages = pages;
        }
        if let Some(published_date) = patch.published_date {
            self.published_date = published_date;
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
        if let Some(genre_ids) = patch.genre_ids {
            self.genre_ids = genre_ids;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }
    }

    pub fn has_genre(&self, genre_id: Uuid) -> bool {
        self.genre_ids.contains(&genre_id)
    }
}

impl UpdateBook {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
