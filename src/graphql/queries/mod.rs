pub mod authors;
pub mod books;
pub mod genres;
pub mod search;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use genres::GenreQueries;
pub use search::SearchQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, ID, Object, Result};

    pub(crate) use crate::graphql::filters::SortDirection;
    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::pagination::parse_pagination_args;
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::services::{CatalogService, ListBooks};
}
