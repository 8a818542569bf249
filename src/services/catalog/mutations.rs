use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::db::{
    AuthorRecord, BookRecord, CreateAuthor, CreateBook, Tables, UpdateAuthor, UpdateBook,
    next_timestamp,
};

use super::CatalogService;
use super::error::{CatalogError, CatalogResult, EntityKind};

fn require_text(field: &'static str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn check_pages(pages: Option<i32>) -> CatalogResult<()> {
    match pages {
        Some(p) if p < 0 => Err(CatalogError::validation(
            "pages",
            format!("must not be negative (got {p})"),
        )),
        _ => Ok(()),
    }
}

fn check_author(t: &Tables, author_id: Uuid) -> CatalogResult<()> {
    if t.authors.contains(author_id) {
        Ok(())
    } else {
        Err(CatalogError::validation(
            "authorId",
            format!("author {author_id} does not exist"),
        ))
    }
}

/// Verify every genre exists and drop repeated ids, keeping first occurrence
fn check_genres(t: &Tables, genre_ids: Vec<Uuid>) -> CatalogResult<Vec<Uuid>> {
    let mut unique = Vec::with_capacity(genre_ids.len());
    for id in genre_ids {
        if !t.genres.contains(id) {
            return Err(CatalogError::validation(
                "genreIds",
                format!("genre {id} does not exist"),
            ));
        }
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}

impl CatalogService {
    /// Create a book and publish it on `BOOK_ADDED`
    pub fn create_book(&self, mut input: CreateBook) -> CatalogResult<BookRecord> {
        require_text("title", &input.title)?;
        check_pages(input.pages)?;

        let book = self.db.write(|t| {
            check_author(t, input.author_id)?;
            input.genre_ids = check_genres(t, std::mem::take(&mut input.genre_ids))?;

            let record = BookRecord::new(input, Utc::now());
            t.books
                .insert(record.clone())
                .map_err(|r| CatalogError::DuplicateId {
                    entity: EntityKind::Book,
                    id: r.id,
                })?;
            self.events.publish_book_added(&record);
            Ok::<_, CatalogError>(record)
        })?;

        info!(book_id = %book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Merge `patch` over an existing book and publish it on `BOOK_UPDATED`
    pub fn update_book(&self, id: Uuid, mut patch: UpdateBook) -> CatalogResult<BookRecord> {
        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        if let Some(pages) = patch.pages {
            check_pages(pages)?;
        }

        let book = self.db.write(|t| {
            let mut record = t
                .book(id)
                .cloned()
                .ok_or_else(|| CatalogError::not_found(EntityKind::Book, id))?;

            if let Some(author_id) = patch.author_id {
                check_author(t, author_id)?;
            }
            if let Some(genre_ids) = patch.genre_ids.take() {
                patch.genre_ids = Some(check_genres(t, genre_ids)?);
            }

            record.apply(patch);
            record.updated_at = next_timestamp(record.updated_at);
            t.books.replace(record.clone());
            self.events.publish_book_updated(&record);
            Ok::<_, CatalogError>(record)
        })?;

        info!(book_id = %book.id, "Book updated");
        Ok(book)
    }

    /// Remove a book and publish its id on `BOOK_DELETED`
    pub fn delete_book(&self, id: Uuid) -> CatalogResult<()> {
        self.db.write(|t| {
            t.books
                .remove(id)
                .ok_or_else(|| CatalogError::not_found(EntityKind::Book, id))?;
            self.events.publish_book_deleted(id);
            Ok::<_, CatalogError>(())
        })?;

        info!(book_id = %id, "Book deleted");
        Ok(())
    }

    pub fn create_author(&self, input: CreateAuthor) -> CatalogResult<AuthorRecord> {
        require_text("name", &input.name)?;

        let author = AuthorRecord::new(input, Utc::now());
        self.db.write(|t| {
            t.authors
                .insert(author.clone())
                .map_err(|r| CatalogError::DuplicateId {
                    entity: EntityKind::Author,
                    id: r.id,
                })
        })?;

        info!(author_id = %author.id, name = %author.name, "Author created");
        Ok(author)
    }

    pub fn update_author(&self, id: Uuid, patch: UpdateAuthor) -> CatalogResult<AuthorRecord> {
        if let Some(name) = &patch.name {
            require_text("name", name)?;
        }

        let author = self.db.write(|t| {
            let mut record = t
                .author(id)
                .cloned()
                .ok_or_else(|| CatalogError::not_found(EntityKind::Author, id))?;
            record.apply(patch);
            record.updated_at = next_timestamp(record.updated_at);
            t.authors.replace(record.clone());
            Ok::<_, CatalogError>(record)
        })?;

        info!(author_id = %author.id, "Author updated");
        Ok(author)
    }

    /// Remove an author that no book references
    pub fn delete_author(&self, id: Uuid) -> CatalogResult<()> {
        self.db.write(|t| {
            if !t.authors.contains(id) {
                return Err(CatalogError::not_found(EntityKind::Author, id));
            }
            let books = t.books_by_author(id).count();
            if books > 0 {
                return Err(CatalogError::AuthorHasBooks { id, books });
            }
            t.authors.remove(id);
            Ok(())
        })?;

        info!(author_id = %id, "Author deleted");
        Ok(())
    }
}
