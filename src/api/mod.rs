//! REST route definitions
//!
//! The primary API is GraphQL at /graphql. Only probes live here.

pub mod health;
