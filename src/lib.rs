//! Library catalog: a GraphQL API over an in-memory store of books,
//! authors and genres, with subscriptions for book changes.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod services;

pub use app::{AppState, build_app};
