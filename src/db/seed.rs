//! Standard seed data loaded at startup.
//!
//! Ids are generated fresh on every run; books reference their author and
//! genres by name here and are linked to the generated ids while seeding.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::{AuthorRecord, BookRecord, Database, GenreRecord, TableCounts, Tables};

#[derive(Debug)]
struct AuthorRow {
    name: &'static str,
    bio: Option<&'static str>,
    created: &'static str,
    updated: &'static str,
}

#[derive(Debug)]
struct GenreRow {
    name: &'static str,
    description: &'static str,
    created: &'static str,
    updated: &'static str,
}

#[derive(Debug)]
struct BookRow {
    title: &'static str,
    summary: &'static str,
    pages: i32,
    published: &'static str,
    author: &'static str,
    genres: &'static [&'static str],
    rating: f64,
    is_available: bool,
    created: &'static str,
    updated: &'static str,
}

const AUTHORS: &[AuthorRow] = &[
    AuthorRow {
        name: "Jane Austen",
        bio: None,
        created: "2023-01-05",
        updated: "2023-01-05",
    },
    AuthorRow {
        name: "George Orwell",
        bio: Some(
            "English novelist, essayist, and critic. His work is characterized by lucid prose and social criticism.",
        ),
        created: "2023-01-10",
        updated: "2023-02-15",
    },
    AuthorRow {
        name: "J.K. Rowling",
        bio: Some(
            "British author and philanthropist best known for a seven-volume fantasy series about a boy wizard.",
        ),
        created: "2023-01-15",
        updated: "2023-01-15",
    },
    AuthorRow {
        name: "Haruki Murakami",
        bio: Some("Japanese writer known for works of fiction, surrealism and magical realism."),
        created: "2023-01-20",
        updated: "2023-03-10",
    },
    AuthorRow {
        name: "Toni Morrison",
        bio: Some(
            "American novelist, essayist, and professor who won the Nobel Prize for Literature in 1993.",
        ),
        created: "2023-01-25",
        updated: "2023-01-25",
    },
];

const GENRES: &[GenreRow] = &[
    GenreRow {
        name: "Fiction",
        description: "Literature created from the imagination, not presented as fact.",
        created: "2023-01-01",
        updated: "2023-01-01",
    },
    GenreRow {
        name: "Science Fiction",
        description: "Fiction dealing with imaginative concepts such as futuristic settings and technology.",
        created: "2023-01-02",
        updated: "2023-01-02",
    },
    GenreRow {
        name: "Fantasy",
        description: "Fiction with elements of magic, mythical creatures, or supernatural phenomena.",
        created: "2023-01-03",
        updated: "2023-02-05",
    },
    GenreRow {
        name: "Mystery",
        description: "Fiction dealing with the solution of a crime or puzzle.",
        created: "2023-01-04",
        updated: "2023-01-04",
    },
    GenreRow {
        name: "Romance",
        description: "Fiction focusing on the romantic relationship between characters.",
        created: "2023-01-05",
        updated: "2023-03-15",
    },
    GenreRow {
        name: "Historical Fiction",
        description: "Fiction set in the past that incorporates historical events or people.",
        created: "2023-01-06",
        updated: "2023-01-06",
    },
    GenreRow {
        name: "Dystopian",
        description: "Fiction set in a dark, often post-apocalyptic future society.",
        created: "2023-01-07",
        updated: "2023-01-07",
    },
    GenreRow {
        name: "Non-fiction",
        description: "Literature based on facts and real events.",
        created: "2023-01-08",
        updated: "2023-02-20",
    },
];

const BOOKS: &[BookRow] = &[
    BookRow {
        title: "Pride and Prejudice",
        summary: "A romantic novel of manners that follows the character development of Elizabeth Bennet.",
        pages: 432,
        published: "1813-01-28",
        author: "Jane Austen",
        genres: &["Fiction", "Romance", "Historical Fiction"],
        rating: 4.7,
        is_available: true,
        created: "2023-01-05",
        updated: "2023-01-05",
    },
    BookRow {
        title: "Sense and Sensibility",
        summary: "The story of the Dashwood sisters as they come of age.",
        pages: 384,
        published: "1811-10-30",
        author: "Jane Austen",
        genres: &["Fiction", "Romance", "Historical Fiction"],
        rating: 4.5,
        is_available: true,
        created: "2023-01-06",
        updated: "2023-02-10",
    },
    BookRow {
        title: "1984",
        summary: "A dystopian social science fiction novel set in an imagined future.",
        pages: 328,
        published: "1949-06-08",
        author: "George Orwell",
        genres: &["Fiction", "Dystopian", "Science Fiction"],
        rating: 4.8,
        is_available: true,
        created: "2023-01-10",
        updated: "2023-01-10",
    },
    BookRow {
        title: "Animal Farm",
        summary: "An allegorical novella reflecting events leading up to the Russian Revolution.",
        pages: 112,
        published: "1945-08-17",
        author: "George Orwell",
        genres: &["Fiction", "Dystopian"],
        rating: 4.6,
        is_available: true,
        created: "2023-01-11",
        updated: "2023-03-05",
    },
    BookRow {
        title: "Harry Potter and the Philosopher's Stone",
        summary: "The first novel in the Harry Potter series, featuring a young wizard's adventures at Hogwarts.",
        pages: 223,
        published: "1997-06-26",
        author: "J.K. Rowling",
        genres: &["Fiction", "Fantasy"],
        rating: 4.9,
        is_available: true,
        created: "2023-01-15",
        updated: "2023-01-15",
    },
    BookRow {
        title: "Harry Potter and the Chamber of Secrets",
        summary: "The second novel in the Harry Potter series.",
        pages: 251,
        published: "1998-07-02",
        author: "J.K. Rowling",
        genres: &["Fiction", "Fantasy"],
        rating: 4.8,
        is_available: true,
        created: "2023-01-16",
        updated: "2023-02-20",
    },
    BookRow {
        title: "Harry Potter and the Prisoner of Azkaban",
        summary: "The third novel in the Harry Potter series.",
        pages: 317,
        published: "1999-07-08",
        author: "J.K. Rowling",
        genres: &["Fiction", "Fantasy"],
        rating: 4.9,
        is_available: true,
        created: "2023-01-17",
        updated: "2023-01-17",
    },
    BookRow {
        title: "Norwegian Wood",
        summary: "A nostalgic story of loss and sexuality set in Tokyo during the late 1960s.",
        pages: 296,
        published: "1987-09-04",
        author: "Haruki Murakami",
        genres: &["Fiction"],
        rating: 4.2,
        is_available: true,
        created: "2023-01-20",
        updated: "2023-01-20",
    },
    BookRow {
        title: "Kafka on the Shore",
        summary: "A novel powered by two remarkable characters: a teenage boy and an aging simpleton.",
        pages: 505,
        published: "2002-09-12",
        author: "Haruki Murakami",
        genres: &["Fiction", "Fantasy"],
        rating: 4.3,
        is_available: true,
        created: "2023-01-21",
        updated: "2023-03-15",
    },
    BookRow {
        title: "1Q84",
        summary: "A work of speculative fiction about a woman who finds herself in an alternate world.",
        pages: 925,
        published: "2009-05-29",
        author: "Haruki Murakami",
        genres: &["Fiction", "Science Fiction", "Fantasy"],
        rating: 4.1,
        is_available: true,
        created: "2023-01-22",
        updated: "2023-01-22",
    },
    BookRow {
        title: "Beloved",
        summary: "A novel inspired by the life of Margaret Garner, an African American who escaped slavery.",
        pages: 324,
        published: "1987-09-02",
        author: "Toni Morrison",
        genres: &["Fiction", "Historical Fiction"],
        rating: 4.4,
        is_available: true,
        created: "2023-01-25",
        updated: "2023-02-28",
    },
    BookRow {
        title: "Song of Solomon",
        summary: "A novel about a young African-American man's search for identity.",
        pages: 337,
        published: "1977-09-02",
        author: "Toni Morrison",
        genres: &["Fiction", "Historical Fiction"],
        rating: 4.3,
        is_available: true,
        created: "2023-01-26",
        updated: "2023-01-26",
    },
    BookRow {
        title: "The Bluest Eye",
        summary: "A novel about a young African-American girl who wishes for blue eyes.",
        pages: 224,
        published: "1970-10-12",
        author: "Toni Morrison",
        genres: &["Fiction"],
        rating: 4.2,
        is_available: true,
        created: "2023-01-27",
        updated: "2023-03-20",
    },
    BookRow {
        title: "Emma",
        summary: "A novel about youthful hubris and romantic misunderstandings.",
        pages: 474,
        published: "1815-12-23",
        author: "Jane Austen",
        genres: &["Fiction", "Romance", "Historical Fiction"],
        rating: 4.4,
        is_available: true,
        created: "2023-01-07",
        updated: "2023-01-07",
    },
    BookRow {
        title: "Homage to Catalonia",
        summary: "An account of Orwell's experiences in the Spanish Civil War.",
        pages: 232,
        published: "1938-04-25",
        author: "George Orwell",
        genres: &["Non-fiction"],
        rating: 4.3,
        is_available: false,
        created: "2023-01-12",
        updated: "2023-02-25",
    },
];

fn date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").with_context(|| format!("bad seed date {value}"))
}

/// Midnight UTC on the given day
fn timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(date(value)?.and_time(chrono::NaiveTime::MIN).and_utc())
}

fn build(t: &mut Tables) -> Result<()> {
    let mut author_ids = HashMap::new();
    for row in AUTHORS {
        let record = AuthorRecord {
            id: Uuid::new_v4(),
            name: row.name.to_string(),
            bio: row.bio.map(str::to_string),
            created_at: timestamp(row.created)?,
            updated_at: timestamp(row.updated)?,
        };
        debug!(author_id = %record.id, name = row.name, "Seeding author");
        author_ids.insert(row.name, record.id);
        t.authors
            .insert(record)
            .map_err(|r| anyhow!("duplicate seed author id {}", r.id))?;
    }

    let mut genre_ids = HashMap::new();
    for row in GENRES {
        let record = GenreRecord {
            id: Uuid::new_v4(),
            name: row.name.to_string(),
            description: Some(row.description.to_string()),
            created_at: timestamp(row.created)?,
            updated_at: timestamp(row.updated)?,
        };
        genre_ids.insert(row.name, record.id);
        t.genres
            .insert(record)
            .map_err(|r| anyhow!("duplicate seed genre id {}", r.id))?;
    }

    for row in BOOKS {
        let author_id = *author_ids
            .get(row.author)
            .with_context(|| format!("seed book '{}' has unknown author {}", row.title, row.author))?;
        let genre_ids = row
            .genres
            .iter()
            .map(|name| {
                genre_ids
                    .get(name)
                    .copied()
                    .with_context(|| format!("seed book '{}' has unknown genre {}", row.title, name))
            })
            .collect::<Result<Vec<_>>>()?;

        let record = BookRecord {
            id: Uuid::new_v4(),
            title: row.title.to_string(),
            summary: Some(row.summary.to_string()),
            pages: Some(row.pages),
            published_date: Some(date(row.published)?),
            author_id,
            genre_ids,
            rating: Some(row.rating),
            is_available: Some(row.is_available),
            created_at: timestamp(row.created)?,
            updated_at: timestamp(row.updated)?,
        };
        t.books
            .insert(record)
            .map_err(|r| anyhow!("duplicate seed book id {}", r.id))?;
    }

    Ok(())
}

/// Load the standard authors, genres and books into `db`.
///
/// Seeding happens as one write; if any row fails to build, nothing is kept.
pub fn seed_catalog(db: &Database) -> Result<TableCounts> {
    db.write(|t| {
        let mut staged = Tables::default();
        build(&mut staged)?;
        for record in staged.authors.iter() {
            t.authors
                .insert(record.clone())
                .map_err(|r| anyhow!("author {} already in store", r.id))?;
        }
        for record in staged.genres.iter() {
            t.genres
                .insert(record.clone())
                .map_err(|r| anyhow!("genre {} already in store", r.id))?;
        }
        for record in staged.books.iter() {
            t.books
                .insert(record.clone())
                .map_err(|r| anyhow!("book {} already in store", r.id))?;
        }
        Ok::<_, anyhow::Error>(())
    })?;

    let counts = db.counts();
    info!(
        authors = counts.authors,
        genres = counts.genres,
        books = counts.books,
        "Seeded catalog"
    );
    Ok(counts)
}
