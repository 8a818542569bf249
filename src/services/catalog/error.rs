use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Kind of catalog entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Book,
    Author,
    Genre,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Book => "Book",
            EntityKind::Author => "Author",
            EntityKind::Genre => "Genre",
        })
    }
}

/// Errors from catalog mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: EntityKind, id: Uuid },

    #[error("Cannot delete author with ID {id} because they have {books} associated book(s)")]
    AuthorHasBooks { id: Uuid, books: usize },

    #[error("{entity} with ID {id} already exists")]
    DuplicateId { entity: EntityKind, id: Uuid },

    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
}

impl CatalogError {
    pub fn not_found(entity: EntityKind, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Machine-readable error code reported to API clients
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::AuthorHasBooks { .. } | CatalogError::DuplicateId { .. } => "CONFLICT",
            CatalogError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
