use super::prelude::*;

#[derive(Default)]
pub struct GenreQueries;

#[Object]
impl GenreQueries {
    /// Get a genre by ID
    async fn genre(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Genre>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        Ok(lookup_id(&id).and_then(|id| catalog.get_genre(id)).map(Genre))
    }

    async fn genres(&self, ctx: &Context<'_>) -> Result<Vec<Genre>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        Ok(catalog.list_genres().into_iter().map(Genre).collect())
    }
}
