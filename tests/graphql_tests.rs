//! Query and mutation behavior of the catalog schema.
//!
//! `catalog_schema_tests!` expands the same suite for every store backend,
//! so SQLite and the in-memory store are held to one contract.

mod common;

use common::*;
use serde_json::json;

macro_rules! catalog_schema_tests {
    ($backend:ident, $schema:expr) => {
        mod $backend {
            use super::*;

            #[tokio::test]
            async fn test_added_book_round_trips() {
                let schema = $schema;

                let added = execute(&schema, &add_book_mutation(111, "T", 5, 1)).await;
                assert_eq!(
                    added["data"]["addBook"],
                    json!({ "isbn": 111, "title": "T", "qty": 5, "authorId": 1 })
                );

                let fetched = execute(&schema, "{ book(isbn: 111) { isbn title qty authorId } }").await;
                assert_eq!(
                    fetched["data"]["book"],
                    json!({ "isbn": 111, "title": "T", "qty": 5, "authorId": 1 })
                );
            }

            #[tokio::test]
            async fn test_book_without_author_resolves_null() {
                let schema = $schema;
                execute(&schema, &add_book_mutation(111, "T", 5, 1)).await;

                let response = execute(&schema, "{ book(isbn: 111) { isbn author { id name } } }").await;

                assert!(response.get("errors").is_none(), "{response}");
                assert_eq!(response["data"]["book"], json!({ "isbn": 111, "author": null }));
            }

            #[tokio::test]
            async fn test_duplicate_isbn_rejected_and_count_unchanged() {
                let schema = $schema;
                execute(&schema, &add_book_mutation(42, "First", 1, 1)).await;

                let response = execute(&schema, &add_book_mutation(42, "Second", 9, 2)).await;

                assert_eq!(response["data"], json!(null));
                assert_eq!(error_codes(&response), vec!["DUPLICATE_KEY"]);
                assert_eq!(response["errors"][0]["extensions"]["isbn"], 42);

                let books = execute(&schema, "{ books { isbn title } }").await;
                assert_eq!(books["data"]["books"], json!([{ "isbn": 42, "title": "First" }]));
            }

            #[tokio::test]
            async fn test_add_author_ids_are_unique() {
                let schema = $schema;
                let mut ids = Vec::new();
                for name in ["Ada", "Alan", "Grace"] {
                    let response = execute(&schema, &add_author_mutation(name)).await;
                    assert_eq!(response["data"]["addAuthor"]["name"], name);
                    ids.push(response["data"]["addAuthor"]["id"].as_i64().unwrap());
                }

                let mut distinct = ids.clone();
                distinct.sort();
                distinct.dedup();
                assert_eq!(distinct.len(), 3);

                let response = execute(&schema, &format!("{{ author(id: {}) {{ name }} }}", ids[1])).await;
                assert_eq!(response["data"]["author"]["name"], "Alan");
            }

            #[tokio::test]
            async fn test_author_books_returns_exactly_their_books() {
                let schema = $schema;
                execute(&schema, &add_author_mutation("Ada")).await;
                execute(&schema, &add_author_mutation("Alan")).await;
                execute(&schema, &add_book_mutation(1, "A", 1, 1)).await;
                execute(&schema, &add_book_mutation(2, "B", 1, 2)).await;
                execute(&schema, &add_book_mutation(3, "C", 1, 1)).await;

                let response = execute(&schema, "{ author(id: 1) { books { isbn } } }").await;

                let mut isbns: Vec<i64> = response["data"]["author"]["books"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|b| b["isbn"].as_i64().unwrap())
                    .collect();
                isbns.sort();
                assert_eq!(isbns, vec![1, 3]);
            }

            #[tokio::test]
            async fn test_author_without_books_returns_empty_list() {
                let schema = $schema;
                execute(&schema, &add_author_mutation("Ada")).await;

                let response = execute(&schema, "{ author(id: 1) { name books { isbn } } }").await;

                assert_eq!(response["data"]["author"], json!({ "name": "Ada", "books": [] }));
            }

            #[tokio::test]
            async fn test_ada_scenario() {
                let schema = $schema;

                let author = execute(&schema, &add_author_mutation("Ada")).await;
                assert_eq!(author["data"]["addAuthor"], json!({ "id": 1, "name": "Ada" }));

                execute(&schema, &add_book_mutation(9, "X", 2, 1)).await;

                let books = execute(&schema, "{ author(id: 1) { books { isbn title qty authorId } } }").await;
                assert_eq!(
                    books["data"]["author"]["books"],
                    json!([{ "isbn": 9, "title": "X", "qty": 2, "authorId": 1 }])
                );

                let all = execute(&schema, "{ books { isbn author { name } } }").await;
                assert_eq!(
                    all["data"]["books"],
                    json!([{ "isbn": 9, "author": { "name": "Ada" } }])
                );
            }

            #[tokio::test]
            async fn test_missing_entities_resolve_null() {
                let schema = $schema;

                let response = execute(&schema, "{ book(isbn: 5) { isbn } author(id: 5) { id } }").await;

                assert!(response.get("errors").is_none(), "{response}");
                assert_eq!(response["data"], json!({ "book": null, "author": null }));
            }

            #[tokio::test]
            async fn test_omitted_arguments_resolve_null() {
                let schema = $schema;
                execute(&schema, &add_book_mutation(1, "A", 1, 1)).await;

                let response = execute(&schema, "{ book { isbn } author { id } }").await;

                assert_eq!(response["data"], json!({ "book": null, "author": null }));
            }

            #[tokio::test]
            async fn test_authors_lists_everyone() {
                let schema = $schema;
                execute(&schema, &add_author_mutation("Ada")).await;
                execute(&schema, &add_author_mutation("Alan")).await;

                let response = execute(&schema, "{ authors { id name } }").await;

                let mut names: Vec<&str> = response["data"]["authors"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|a| a["name"].as_str().unwrap())
                    .collect();
                names.sort();
                assert_eq!(names, vec!["Ada", "Alan"]);
            }

            #[tokio::test]
            async fn test_validation_errors_report_fields() {
                let schema = $schema;

                let response = execute(&schema, &add_book_mutation(1, "", -1, 1)).await;

                assert_eq!(response["data"], json!(null));
                assert_eq!(error_codes(&response), vec!["VALIDATION_ERROR"]);
                let fields = response["errors"][0]["extensions"]["fields"].as_array().unwrap();
                assert_eq!(fields.len(), 2);

                let books = execute(&schema, "{ books { isbn } }").await;
                assert_eq!(books["data"]["books"], json!([]));
            }

            #[tokio::test]
            async fn test_empty_author_name_rejected() {
                let schema = $schema;

                let response = execute(&schema, &add_author_mutation("")).await;

                assert_eq!(error_codes(&response), vec!["VALIDATION_ERROR"]);
                let authors = execute(&schema, "{ authors { id } }").await;
                assert_eq!(authors["data"]["authors"], json!([]));
            }
        }
    };
}

catalog_schema_tests!(in_memory, memory_schema());
catalog_schema_tests!(sqlite, sqlite_schema().await);
