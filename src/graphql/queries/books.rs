use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Get a book by ID
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Book>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        Ok(lookup_id(&id).and_then(|id| catalog.get_book(id)).map(Book))
    }

    /// List books, sorted then sliced to `[offset, offset + limit)`
    async fn books(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 10, desc = "Number of books to return")] limit: i32,
        #[graphql(default = 0, desc = "Offset for pagination")] offset: i32,
        #[graphql(
            default_with = "\"title\".to_string()",
            desc = "Field to sort by, e.g. title, publishedDate, rating"
        )]
        sort_by: String,
        #[graphql(default, desc = "Sort direction")] direction: SortDirection,
    ) -> Result<Vec<Book>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let (offset, limit) = parse_pagination_args(offset, limit);

        let books = catalog.list_books(&ListBooks {
            limit,
            offset,
            sort_by,
            direction: direction.into(),
        });

        Ok(books.into_iter().map(Book).collect())
    }

    /// All books written by an author, in catalog order
    async fn books_by_author(&self, ctx: &Context<'_>, author_id: ID) -> Result<Vec<Book>> {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let Some(author_id) = lookup_id(&author_id) else {
            return Ok(Vec::new());
        };

        Ok(catalog
            .list_books_by_author(author_id)
            .into_iter()
            .map(Book)
            .collect())
    }
}
