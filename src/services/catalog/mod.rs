//! Catalog service: reads and writes over the entity store
//!
//! Queries never fail on a missing id; they return `None` or an empty list.
//! Mutations validate everything before touching the store, so a failed
//! mutation leaves it exactly as it was. Book mutations publish on
//! [CatalogEvents]; author mutations do not.

mod error;
mod mutations;
mod queries;
mod search;
mod sort;

pub use error::{CatalogError, CatalogResult, EntityKind};
pub use queries::ListBooks;
pub use search::SearchHit;
pub use sort::{BookSortKey, Direction};

use crate::db::Database;
use crate::services::events::CatalogEvents;

/// Query and mutation engine over a [Database]
#[derive(Debug, Clone)]
pub struct CatalogService {
    db: Database,
    events: CatalogEvents,
}

impl CatalogService {
    pub fn new(db: Database, events: CatalogEvents) -> Self {
        Self { db, events }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn events(&self) -> &CatalogEvents {
        &self.events
    }
}
