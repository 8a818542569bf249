use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Get an author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        Ok(lookup_id(&id).and_then(|id| catalog.get_author(id)).map(Author))
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        Ok(catalog.list_authors().into_iter().map(Author).collect())
    }
}
