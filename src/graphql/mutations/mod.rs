pub mod authors;
pub mod books;

pub use authors::AuthorMutations;
pub use books::BookMutations;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::{CatalogService, EntityKind};
}
