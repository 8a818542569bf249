use super::prelude::*;

#[derive(Default)]
pub struct AuthorMutations;

#[Object]
impl AuthorMutations {
    async fn create_author(&self, ctx: &Context<'_>, input: AuthorInput) -> Result<Author> {
        let catalog = ctx.data_unchecked::<CatalogService>();

        let record = catalog
            .create_author(create_author_from_input(input))
            .map_err(|e| e.extend())?;
        Ok(Author(record))
    }

    /// Update an author. Only the fields present in `input` change.
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateAuthorInput,
    ) -> Result<Author> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let author_id = target_id(&id, EntityKind::Author)?;

        let record = catalog
            .update_author(author_id, update_author_from_input(input))
            .map_err(|e| e.extend())?;
        Ok(Author(record))
    }

    /// Delete an author. Fails with `CONFLICT` while any book references them.
    async fn delete_author(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let author_id = target_id(&id, EntityKind::Author)?;

        catalog.delete_author(author_id).map_err(|e| e.extend())?;
        Ok(true)
    }
}
