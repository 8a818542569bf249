use super::prelude::*;

#[derive(Default)]
pub struct SearchQueries;

#[Object]
impl SearchQueries {
    /// Case-insensitive substring search across books, authors and genres.
    ///
    /// Books come first, then authors, then genres, each in catalog order.
    async fn search(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Text to look for")] term: String,
    ) -> Result<Vec<SearchResult>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        Ok(catalog
            .search(&term)
            .into_iter()
            .map(SearchResult::from)
            .collect())
    }
}
