//! Book ordering for paginated listings.
//!
//! Sorting is stable and DESC is the ASC comparator reversed, so books with
//! equal keys keep their collection order in both directions.

use std::cmp::Ordering;

use crate::db::BookRecord;

/// Direction of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Book field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortKey {
    Id,
    Title,
    Summary,
    Pages,
    PublishedDate,
    AuthorId,
    Rating,
    IsAvailable,
    CreatedAt,
    UpdatedAt,
}

impl BookSortKey {
    /// Parse a field name, accepting camelCase and snake_case spellings
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "id" => BookSortKey::Id,
            "title" => BookSortKey::Title,
            "summary" => BookSortKey::Summary,
            "pages" => BookSortKey::Pages,
            "publishedDate" | "published_date" => BookSortKey::PublishedDate,
            "authorId" | "author_id" => BookSortKey::AuthorId,
            "rating" => BookSortKey::Rating,
            "isAvailable" | "is_available" => BookSortKey::IsAvailable,
            "createdAt" | "created_at" => BookSortKey::CreatedAt,
            "updatedAt" | "updated_at" => BookSortKey::UpdatedAt,
            _ => return None,
        };
        Some(key)
    }

    /// Ascending comparison. Missing values order before present ones.
    pub fn compare(&self, a: &BookRecord, b: &BookRecord) -> Ordering {
        match self {
            BookSortKey::Id => a.id.cmp(&b.id),
            BookSortKey::Title => a.title.cmp(&b.title),
            BookSortKey::Summary => a.summary.cmp(&b.summary),
            BookSortKey::Pages => a.pages.cmp(&b.pages),
            BookSortKey::PublishedDate => a.published_date.cmp(&b.published_date),
            BookSortKey::AuthorId => a.author_id.cmp(&b.author_id),
            BookSortKey::Rating => compare_floats(a.rating, b.rating),
            BookSortKey::IsAvailable => a.is_available.cmp(&b.is_available),
            BookSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            BookSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

fn compare_floats(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// Sort in place. Without a key the current order is kept.
pub fn sort_books(books: &mut [BookRecord], key: Option<BookSortKey>, direction: Direction) {
    let Some(key) = key else {
        return;
    };
    books.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}
