use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book to the catalog
    async fn create_book(&self, ctx: &Context<'_>, input: BookInput) -> Result<Book> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let input = create_book_from_input(input)?;

        let record = catalog.create_book(input).map_err(|e| e.extend())?;
        Ok(Book(record))
    }

    /// Update a book. Only the fields present in `input` change.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateBookInput,
    ) -> Result<Book> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let book_id = target_id(&id, EntityKind::Book)?;
        let patch = update_book_from_input(input)?;

        let record = catalog
            .update_book(book_id, patch)
            .map_err(|e| e.extend())?;
        Ok(Book(record))
    }

    /// Delete a book
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let book_id = target_id(&id, EntityKind::Book)?;

        catalog.delete_book(book_id).map_err(|e| e.extend())?;
        Ok(true)
    }
}
