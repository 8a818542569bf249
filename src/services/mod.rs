//! Catalog engine and change notifications

pub mod catalog;
pub mod events;

pub use catalog::{
    BookSortKey, CatalogError, CatalogResult, CatalogService, Direction, EntityKind, ListBooks,
    SearchHit,
};
pub use events::{CatalogEvents, CatalogEventsConfig, EventChannel};
