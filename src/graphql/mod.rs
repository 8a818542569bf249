//! GraphQL API with subscriptions for real-time updates
//!
//! Queries and mutations are split per entity under `queries/` and
//! `mutations/`, each a `#[derive(Default)]` struct merged into the roots in
//! `schema.rs`. Subscriptions are served over WebSocket at `/graphql/ws`.

pub mod filters;
pub mod helpers;
pub mod http;
pub mod mutations;
pub mod pagination;
pub mod queries;
mod schema;
mod subscriptions;
pub mod types;

pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema};
pub use subscriptions::SubscriptionRoot;
pub use types::{Author, Book, Genre, SearchResult};
