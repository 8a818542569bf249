//! GraphQL integration tests
//!
//! Documents are executed against the built schema over a seeded catalog,
//! checking response shapes, error codes and subscriptions.

use std::time::Duration;

use async_graphql::{Request, Variables};
use futures::StreamExt;
use serde_json::{Value, json};
use uuid::Uuid;

use library_catalog::config::Config;
use library_catalog::db::{Database, seed::seed_catalog};
use library_catalog::graphql::{CatalogSchema, build_schema};
use library_catalog::services::{CatalogEvents, CatalogService, EventChannel};

struct Harness {
    catalog: CatalogService,
    schema: CatalogSchema,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(&Config::default())
    }

    fn with_config(config: &Config) -> Self {
        let db = Database::new();
        seed_catalog(&db).unwrap();
        let catalog = CatalogService::new(db, CatalogEvents::with_defaults());
        let schema = build_schema(catalog.clone(), config);
        Self { catalog, schema }
    }

    /// Execute and return the full response as JSON (`data` and `errors`)
    async fn run(&self, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = self.schema.execute(request).await;
        serde_json::to_value(&response).unwrap()
    }

    /// Execute and return `data`, failing on any error
    async fn data(&self, query: &str, variables: Value) -> Value {
        let response = self.run(query, variables).await;
        assert!(response.get("errors").is_none(), "unexpected errors: {response}");
        response["data"].clone()
    }

    fn author_id(&self, name: &str) -> String {
        self.catalog
            .list_authors()
            .into_iter()
            .find(|a| a.name == name)
            .map(|a| a.id.to_string())
            .unwrap()
    }

    fn book_id(&self, title: &str) -> String {
        self.catalog
            .database()
            .read(|t| t.books.iter().find(|b| b.title == title).map(|b| b.id))
            .map(|id| id.to_string())
            .unwrap()
    }

    async fn wait_for_subscriber(&self, channel: EventChannel) {
        for _ in 0..200 {
            if self.catalog.events().receiver_count(channel) > 0 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("no subscriber registered on {channel}");
    }
}

fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

fn titles(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Queries
// ============================================================================

mod queries {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn books_sorted_and_paginated() {
        let h = Harness::new();

        let asc = h.data("{ books(limit: 2) { title } }", json!({})).await;
        assert_eq!(titles(&asc["books"]), vec!["1984", "1Q84"]);

        let desc = h
            .data("{ books(limit: 2, direction: DESC) { title } }", json!({}))
            .await;
        assert_eq!(titles(&desc["books"]), vec!["The Bluest Eye", "Song of Solomon"]);
    }

    #[tokio::test]
    async fn books_default_page_size() {
        let h = Harness::new();
        let data = h.data("{ books { id } }", json!({})).await;
        assert_eq!(data["books"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn books_sort_by_rating_descending() {
        let h = Harness::new();
        let data = h
            .data(
                r#"{ books(limit: 1, sortBy: "rating", direction: DESC) { title rating } }"#,
                json!({}),
            )
            .await;

        let top = &data["books"][0];
        let best = h
            .catalog
            .list_books(&library_catalog::services::ListBooks {
                limit: usize::MAX,
                ..Default::default()
            })
            .into_iter()
            .filter_map(|b| b.rating)
            .fold(f64::MIN, f64::max);
        assert_eq!(top["rating"].as_f64(), Some(best));
    }

    #[tokio::test]
    async fn negative_limit_is_an_empty_page() {
        let h = Harness::new();
        let data = h.data("{ books(limit: -5) { id } }", json!({})).await;
        assert_eq!(data["books"], json!([]));
    }

    #[tokio::test]
    async fn book_with_relationships() {
        let h = Harness::new();
        let id = h.book_id("1984");

        let data = h
            .data(
                "query($id: ID!) {
                    book(id: $id) {
                        title
                        pages
                        publishedDate
                        isAvailable
                        author { name }
                        genres { name }
                    }
                }",
                json!({ "id": id }),
            )
            .await;

        let book = &data["book"];
        assert_eq!(book["title"], "1984");
        assert_eq!(book["publishedDate"], "1949-06-08");
        assert_eq!(book["author"]["name"], "George Orwell");
        assert_eq!(
            book["genres"],
            json!([
                { "name": "Fiction" },
                { "name": "Dystopian" },
                { "name": "Science Fiction" },
            ])
        );
    }

    #[tokio::test]
    async fn missing_book_is_null_not_an_error() {
        let h = Harness::new();
        let data = h
            .data(
                "query($id: ID!) { book(id: $id) { title } }",
                json!({ "id": Uuid::new_v4().to_string() }),
            )
            .await;

        assert_eq!(data["book"], Value::Null);
    }

    #[tokio::test]
    async fn unparseable_ids_read_as_absent() {
        let h = Harness::new();
        let data = h
            .data(
                r#"{
                    book(id: "42") { title }
                    author(id: "not-a-uuid") { name }
                    genre(id: "fiction") { name }
                    booksByAuthor(authorId: "42") { title }
                    books(limit: 1) { title }
                }"#,
                json!({}),
            )
            .await;

        assert_eq!(data["book"], Value::Null);
        assert_eq!(data["author"], Value::Null);
        assert_eq!(data["genre"], Value::Null);
        assert_eq!(data["booksByAuthor"], json!([]));
        assert_eq!(titles(&data["books"]).len(), 1);
    }

    #[tokio::test]
    async fn books_by_author_and_back() {
        let h = Harness::new();
        let id = h.author_id("Toni Morrison");

        let data = h
            .data(
                "query($id: ID!) {
                    booksByAuthor(authorId: $id) { title }
                    author(id: $id) { books { title } }
                }",
                json!({ "id": id }),
            )
            .await;

        let expected = vec!["Beloved", "Song of Solomon", "The Bluest Eye"];
        assert_eq!(titles(&data["booksByAuthor"]), expected);
        assert_eq!(titles(&data["author"]["books"]), expected);
    }

    #[tokio::test]
    async fn genres_list_books() {
        let h = Harness::new();
        let data = h
            .data("{ genres { name books { title } } }", json!({}))
            .await;

        let genres = data["genres"].as_array().unwrap();
        assert_eq!(genres.len(), 8);

        let dystopian = genres.iter().find(|g| g["name"] == "Dystopian").unwrap();
        assert_eq!(titles(&dystopian["books"]), vec!["1984", "Animal Farm"]);
    }

    #[tokio::test]
    async fn search_returns_tagged_union() {
        let h = Harness::new();
        let data = h
            .data(
                r#"{
                    search(term: "harry") {
                        __typename
                        ... on Book { title }
                        ... on Author { name }
                        ... on Genre { name }
                    }
                }"#,
                json!({}),
            )
            .await;

        let hits = data["search"].as_array().unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|hit| hit["__typename"] == "Book"));
    }

    #[tokio::test]
    async fn search_finds_authors_case_insensitively() {
        let h = Harness::new();
        let data = h
            .data(
                r#"{ search(term: "AUSTEN") { __typename ... on Author { name } } }"#,
                json!({}),
            )
            .await;

        let authors: Vec<&Value> = data["search"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|hit| hit["__typename"] == "Author")
            .collect();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0]["name"], "Jane Austen");
    }

    #[tokio::test]
    async fn depth_limit_rejects_runaway_nesting() {
        let config = Config {
            max_query_depth: 3,
            ..Config::default()
        };
        let h = Harness::with_config(&config);

        let response = h
            .run(
                "{ authors { books { author { books { title } } } } }",
                json!({}),
            )
            .await;

        assert!(response.get("errors").is_some());
    }
}

// ============================================================================
// Mutations
// ============================================================================

mod mutations {
    use super::*;
    use pretty_assertions::assert_eq;

    const CREATE_BOOK: &str = "mutation($input: BookInput!) {
        createBook(input: $input) {
            id title summary pages publishedDate rating isAvailable
            createdAt updatedAt
            author { name }
            genres { name }
        }
    }";

    #[tokio::test]
    async fn create_book_then_read_it_back() {
        let h = Harness::new();
        let input = json!({
            "title": "Mansfield Park",
            "summary": "Fanny Price comes of age at Mansfield.",
            "pages": 507,
            "publishedDate": "1814-07-09",
            "authorId": h.author_id("Jane Austen"),
            "rating": 3.9,
            "isAvailable": true,
        });

        let created = h.data(CREATE_BOOK, json!({ "input": input })).await["createBook"].clone();
        assert_eq!(created["title"], "Mansfield Park");
        assert_eq!(created["publishedDate"], "1814-07-09");
        assert_eq!(created["author"]["name"], "Jane Austen");
        assert_eq!(created["genres"], json!([]));
        assert_eq!(created["createdAt"], created["updatedAt"]);

        let fetched = h
            .data(
                "query($id: ID!) {
                    book(id: $id) {
                        id title summary pages publishedDate rating isAvailable
                        createdAt updatedAt
                        author { name }
                        genres { name }
                    }
                }",
                json!({ "id": created["id"] }),
            )
            .await;
        assert_eq!(fetched["book"], created);
    }

    #[tokio::test]
    async fn create_book_with_bad_date_is_a_validation_error() {
        let h = Harness::new();
        let input = json!({
            "title": "Lady Susan",
            "publishedDate": "sometime in 1871",
            "authorId": h.author_id("Jane Austen"),
        });

        let response = h.run(CREATE_BOOK, json!({ "input": input })).await;
        assert_eq!(error_code(&response), Some("VALIDATION_ERROR"));
        assert_eq!(h.catalog.database().counts().books, 15);
    }

    #[tokio::test]
    async fn create_book_for_unknown_author_is_a_validation_error() {
        let h = Harness::new();
        let input = json!({
            "title": "Ghostwritten",
            "authorId": Uuid::new_v4().to_string(),
        });

        let response = h.run(CREATE_BOOK, json!({ "input": input })).await;
        assert_eq!(error_code(&response), Some("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn create_book_with_unparseable_references_is_a_validation_error() {
        let h = Harness::new();
        let author = h.author_id("Jane Austen");

        let response = h
            .run(CREATE_BOOK, json!({ "input": { "title": "Sanditon", "authorId": "42" } }))
            .await;
        assert_eq!(error_code(&response), Some("VALIDATION_ERROR"));

        let input = json!({ "title": "Sanditon", "authorId": author, "genreIds": ["fiction"] });
        let response = h.run(CREATE_BOOK, json!({ "input": input })).await;
        assert_eq!(error_code(&response), Some("VALIDATION_ERROR"));
        assert_eq!(h.catalog.database().counts().books, 15);
    }

    #[tokio::test]
    async fn update_book_applies_only_supplied_fields() {
        let h = Harness::new();
        let id = h.book_id("Beloved");

        let data = h
            .data(
                "mutation($id: ID!) {
                    updateBook(id: $id, input: { rating: 4.9, summary: null }) {
                        title summary pages rating
                    }
                }",
                json!({ "id": id }),
            )
            .await;

        let book = &data["updateBook"];
        assert_eq!(book["title"], "Beloved");
        assert_eq!(book["summary"], Value::Null);
        assert_eq!(book["rating"], 4.9);
        assert!(book["pages"].is_number());
    }

    #[tokio::test]
    async fn update_unknown_book_is_not_found() {
        let h = Harness::new();
        let response = h
            .run(
                "mutation($id: ID!) { updateBook(id: $id, input: { title: \"x\" }) { id } }",
                json!({ "id": Uuid::new_v4().to_string() }),
            )
            .await;

        assert_eq!(error_code(&response), Some("NOT_FOUND"));
    }

    #[tokio::test]
    async fn delete_book_reports_success_then_not_found() {
        let h = Harness::new();
        let id = h.book_id("Emma");
        let query = "mutation($id: ID!) { deleteBook(id: $id) }";

        let data = h.data(query, json!({ "id": id })).await;
        assert_eq!(data["deleteBook"], true);
        assert_eq!(h.catalog.database().counts().books, 14);

        let again = h.run(query, json!({ "id": id })).await;
        assert_eq!(error_code(&again), Some("NOT_FOUND"));
        assert_eq!(h.catalog.database().counts().books, 14);
    }

    #[tokio::test]
    async fn mutations_on_unparseable_ids_are_not_found() {
        let h = Harness::new();

        for mutation in [
            r#"mutation { deleteBook(id: "42") }"#,
            r#"mutation { updateBook(id: "42", input: { title: "x" }) { id } }"#,
            r#"mutation { deleteAuthor(id: "42") }"#,
            r#"mutation { updateAuthor(id: "42", input: { name: "x" }) { id } }"#,
        ] {
            let response = h.run(mutation, json!({})).await;
            assert_eq!(error_code(&response), Some("NOT_FOUND"), "{mutation}");
            assert!(
                response["errors"][0]["message"]
                    .as_str()
                    .is_some_and(|m| m.ends_with("with ID 42 not found")),
                "{response}"
            );
        }
        assert_eq!(h.catalog.database().counts().books, 15);
    }

    #[tokio::test]
    async fn author_lifecycle() {
        let h = Harness::new();

        let created = h
            .data(
                r#"mutation { createAuthor(input: { name: "Mary Shelley" }) { id name bio } }"#,
                json!({}),
            )
            .await["createAuthor"]
            .clone();
        assert_eq!(created["bio"], Value::Null);

        let updated = h
            .data(
                r#"mutation($id: ID!) {
                    updateAuthor(id: $id, input: { bio: "Wrote Frankenstein." }) { name bio }
                }"#,
                json!({ "id": created["id"] }),
            )
            .await;
        assert_eq!(
            updated["updateAuthor"],
            json!({ "name": "Mary Shelley", "bio": "Wrote Frankenstein." })
        );

        let deleted = h
            .data(
                "mutation($id: ID!) { deleteAuthor(id: $id) }",
                json!({ "id": created["id"] }),
            )
            .await;
        assert_eq!(deleted["deleteAuthor"], true);
        assert_eq!(h.catalog.list_authors().len(), 5);
    }

    #[tokio::test]
    async fn delete_author_with_books_is_a_conflict() {
        let h = Harness::new();
        let response = h
            .run(
                "mutation($id: ID!) { deleteAuthor(id: $id) }",
                json!({ "id": h.author_id("Haruki Murakami") }),
            )
            .await;

        assert_eq!(error_code(&response), Some("CONFLICT"));
        assert_eq!(h.catalog.list_authors().len(), 5);
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

mod subscriptions {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Subscribe in a background task and hand back its first response
    fn first_event(h: &Harness, query: &'static str) -> tokio::task::JoinHandle<Option<Value>> {
        let schema = h.schema.clone();
        tokio::spawn(async move {
            let mut stream = Box::pin(schema.execute_stream(query));
            let response = stream.next().await?;
            Some(serde_json::to_value(&response).unwrap())
        })
    }

    async fn wait(handle: tokio::task::JoinHandle<Option<Value>>) -> Value {
        let joined = tokio::time::timeout(Duration::from_secs(5), handle).await;
        let result = tokio_test::assert_ok!(joined);
        tokio_test::assert_ok!(result).unwrap()
    }

    #[tokio::test]
    async fn book_added_delivers_the_new_book() {
        let h = Harness::new();
        let handle = first_event(&h, "subscription { bookAdded { title author { name } } }");
        h.wait_for_subscriber(EventChannel::BookAdded).await;

        h.data(
            "mutation($author: ID!) {
                createBook(input: { title: \"Frankenstein\", authorId: $author }) { id }
            }",
            json!({ "author": h.author_id("Jane Austen") }),
        )
        .await;

        let event = wait(handle).await;
        assert_eq!(
            event["data"]["bookAdded"],
            json!({ "title": "Frankenstein", "author": { "name": "Jane Austen" } })
        );
    }

    #[tokio::test]
    async fn book_updated_delivers_the_new_state() {
        let h = Harness::new();
        let id = h.book_id("Norwegian Wood");
        let handle = first_event(&h, "subscription { bookUpdated { id isAvailable } }");
        h.wait_for_subscriber(EventChannel::BookUpdated).await;

        h.data(
            "mutation($id: ID!) { updateBook(id: $id, input: { isAvailable: false }) { id } }",
            json!({ "id": id }),
        )
        .await;

        let event = wait(handle).await;
        assert_eq!(
            event["data"]["bookUpdated"],
            json!({ "id": id, "isAvailable": false })
        );
    }

    #[tokio::test]
    async fn book_deleted_delivers_the_id() {
        let h = Harness::new();
        let id = h.book_id("Animal Farm");
        let handle = first_event(&h, "subscription { bookDeleted }");
        h.wait_for_subscriber(EventChannel::BookDeleted).await;

        h.data("mutation($id: ID!) { deleteBook(id: $id) }", json!({ "id": id }))
            .await;

        let event = wait(handle).await;
        assert_eq!(event["data"]["bookDeleted"], json!(id));
    }
}

#[test]
fn schema_exposes_every_operation() {
    let h = Harness::new();
    let sdl = h.schema.sdl();

    for field in [
        "book(", "books(", "booksByAuthor(", "author(", "authors:", "genre(", "genres:",
        "search(", "createBook(", "updateBook(", "deleteBook(", "createAuthor(",
        "updateAuthor(", "deleteAuthor(", "bookAdded:", "bookUpdated:", "bookDeleted:",
    ] {
        assert!(sdl.contains(field), "schema is missing {field}");
    }
    assert!(sdl.contains("union SearchResult"));
    assert!(sdl.contains("enum SortDirection"));
}
