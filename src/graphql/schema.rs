//! GraphQL schema definition with queries, mutations, and subscriptions

use async_graphql::{MergedObject, Schema};

use crate::config::Config;
use crate::services::CatalogService;

use super::mutations::{AuthorMutations, BookMutations};
use super::queries::{AuthorQueries, BookQueries, GenreQueries, SearchQueries};
use super::subscriptions::SubscriptionRoot;

/// The GraphQL schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries, AuthorQueries, GenreQueries, SearchQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations, AuthorMutations);

/// Build the GraphQL schema with all resolvers.
///
/// The object graph is cyclic (book -> author -> books -> ...), so depth and
/// complexity limits come from config.
pub fn build_schema(catalog: CatalogService, config: &Config) -> CatalogSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        SubscriptionRoot,
    )
    .data(catalog)
    .extension(async_graphql::extensions::Tracing)
    .limit_depth(config.max_query_depth)
    .limit_complexity(config.max_query_complexity)
    .finish()
}
