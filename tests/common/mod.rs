//! Shared fixtures for the integration tests.
//!
//! - [`memory_schema`] / [`sqlite_schema`] build an executable schema over a
//!   fresh store
//! - [`execute`] runs a document and returns the response as JSON
//! - [`FlakyStore`] wraps the in-memory store and fails selected operations

#![allow(dead_code)]

use async_graphql::Request;
use library::prelude::*;
use library::storage::sqlite;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Build a host over the given store with default configuration.
pub fn host_with(store: Arc<dyn CatalogStore>) -> Arc<ServerHost> {
    Arc::new(ServerHost::new(LibraryConfig::default(), store))
}

/// Schema over a fresh in-memory store.
pub fn memory_schema() -> LibrarySchema {
    build_schema(host_with(Arc::new(InMemoryCatalogStore::new())))
}

/// Fresh provisioned SQLite store on a private in-memory database.
pub async fn sqlite_store() -> SqliteCatalogStore {
    let pool = sqlite::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory sqlite should open");
    sqlite::ensure_schema(&pool)
        .await
        .expect("schema should apply");
    SqliteCatalogStore::new(pool)
}

/// Schema over a fresh SQLite in-memory database.
pub async fn sqlite_schema() -> LibrarySchema {
    build_schema(host_with(Arc::new(sqlite_store().await)))
}

/// Execute a GraphQL document and return the serialized response.
pub async fn execute(schema: &LibrarySchema, document: &str) -> Value {
    let response = schema.execute(Request::new(document)).await;
    serde_json::to_value(&response).expect("response should serialize")
}

/// Error codes of a serialized response, in order.
pub fn error_codes(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .map(|e| e["extensions"]["code"].as_str().unwrap_or("").to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub fn add_book_mutation(isbn: i64, title: &str, qty: i64, author_id: i64) -> String {
    format!(
        r#"mutation {{ addBook(isbn: {isbn}, title: "{title}", qty: {qty}, authorId: {author_id}) {{ isbn title qty authorId }} }}"#
    )
}

pub fn add_author_mutation(name: &str) -> String {
    format!(r#"mutation {{ addAuthor(name: "{name}") {{ id name }} }}"#)
}

// ---------------------------------------------------------------------------
// FlakyStore
// ---------------------------------------------------------------------------

/// In-memory store with switchable failures, for error propagation tests.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: InMemoryCatalogStore,
    pub fail_author_lookup: AtomicBool,
    pub fail_books_by_author: AtomicBool,
    pub fail_list_books: AtomicBool,
    pub fail_isbn_scan: AtomicBool,
    pub fail_book_inserts: AtomicBool,
    pub fail_author_inserts: AtomicBool,
    pub book_inserts: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(flag: &AtomicBool, operation: &str) -> Result<(), LibraryError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StorageError::Backend {
                backend: "flaky".to_string(),
                message: format!("{} unavailable", operation),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for FlakyStore {
    async fn get_book(&self, isbn: i64) -> Result<Option<Book>, LibraryError> {
        self.inner.get_book(isbn).await
    }

    async fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
        Self::check(&self.fail_list_books, "list_books")?;
        self.inner.list_books().await
    }

    async fn find_books_by_isbn(&self, isbn: i64) -> Result<Vec<Book>, LibraryError> {
        Self::check(&self.fail_isbn_scan, "find_books_by_isbn")?;
        self.inner.find_books_by_isbn(isbn).await
    }

    async fn books_by_author(&self, author_id: i64) -> Result<Vec<Book>, LibraryError> {
        Self::check(&self.fail_books_by_author, "books_by_author")?;
        self.inner.books_by_author(author_id).await
    }

    async fn insert_book(&self, book: &Book) -> Result<u64, LibraryError> {
        self.book_inserts.fetch_add(1, Ordering::SeqCst);
        Self::check(&self.fail_book_inserts, "insert_book")?;
        self.inner.insert_book(book).await
    }

    async fn count_books(&self) -> Result<i64, LibraryError> {
        self.inner.count_books().await
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>, LibraryError> {
        Self::check(&self.fail_author_lookup, "get_author")?;
        self.inner.get_author(id).await
    }

    async fn list_authors(&self) -> Result<Vec<Author>, LibraryError> {
        self.inner.list_authors().await
    }

    async fn insert_author(&self, name: &str) -> Result<i64, LibraryError> {
        Self::check(&self.fail_author_inserts, "insert_author")?;
        self.inner.insert_author(name).await
    }
}
