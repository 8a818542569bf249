// Helper functions shared across GraphQL query/mutation modules.

use async_graphql::{ErrorExtensions, ID, MaybeUndefined, Result};
use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

use crate::db::{CreateAuthor, CreateBook, UpdateAuthor, UpdateBook};
use crate::services::{CatalogError, EntityKind};

use super::types::{AuthorInput, BookInput, UpdateAuthorInput, UpdateBookInput};

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub(crate) fn to_id(id: Uuid) -> ID {
    ID(id.to_string())
}

/// Id for a lookup. An id that is not a UUID names nothing in the catalog.
pub(crate) fn lookup_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

/// Id of the entity a mutation acts on; unparseable ids are `NOT_FOUND`
pub(crate) fn target_id(id: &ID, entity: EntityKind) -> Result<Uuid> {
    lookup_id(id).ok_or_else(|| {
        async_graphql::Error::new(format!("{} with ID {} not found", entity, id.as_str()))
            .extend_with(|_, e| e.set("code", "NOT_FOUND"))
    })
}

/// Id referenced from an input field; unparseable ids fail validation
fn reference_id(id: &ID, field: &'static str, entity: EntityKind) -> Result<Uuid> {
    lookup_id(id).ok_or_else(|| {
        let entity = entity.to_string().to_lowercase();
        CatalogError::validation(field, format!("{entity} {} does not exist", id.as_str()))
            .extend()
    })
}

fn reference_ids(ids: &[ID]) -> Result<Vec<Uuid>> {
    ids.iter()
        .map(|id| reference_id(id, "genreIds", EntityKind::Genre))
        .collect()
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp
pub(crate) fn parse_published_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            CatalogError::validation(
                "publishedDate",
                format!("'{value}' is not a date (expected YYYY-MM-DD)"),
            )
            .extend()
        })
}

/// Absent -> leave alone, null -> clear, value -> convert and set
fn patch_with<T, U>(
    value: MaybeUndefined<T>,
    convert: impl FnOnce(T) -> Result<U>,
) -> Result<Option<Option<U>>> {
    Ok(match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(convert(v)?)),
    })
}

fn patch<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

pub(crate) fn create_book_from_input(input: BookInput) -> Result<CreateBook> {
    Ok(CreateBook {
        author_id: reference_id(&input.author_id, "authorId", EntityKind::Author)?,
        genre_ids: reference_ids(input.genre_ids.as_deref().unwrap_or_default())?,
        published_date: input
            .published_date
            .as_deref()
            .map(parse_published_date)
            .transpose()?,
        title: input.title,
        summary: input.summary,
        pages: input.pages,
        rating: input.rating,
        is_available: input.is_available,
    })
}

pub(crate) fn update_book_from_input(input: UpdateBookInput) -> Result<UpdateBook> {
    Ok(UpdateBook {
        author_id: input
            .author_id
            .as_ref()
            .map(|id| reference_id(id, "authorId", EntityKind::Author))
            .transpose()?,
        genre_ids: input
            .genre_ids
            .as_deref()
            .map(reference_ids)
            .transpose()?,
        published_date: patch_with(input.published_date, |v| parse_published_date(&v))?,
        title: input.title,
        summary: patch(input.summary),
        pages: patch(input.pages),
        rating: patch(input.rating),
        is_available: patch(input.is_available),
    })
}

pub(crate) fn create_author_from_input(input: AuthorInput) -> CreateAuthor {
    CreateAuthor {
        name: input.name,
        bio: input.bio,
    }
}

pub(crate) fn update_author_from_input(input: UpdateAuthorInput) -> UpdateAuthor {
    UpdateAuthor {
        name: input.name,
        bio: patch(input.bio),
    }
}
