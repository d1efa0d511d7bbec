//! SQLite storage backend using sqlx.
//!
//! Provides [`SqliteCatalogStore`], a [`CatalogStore`] backed by a
//! `sqlx::SqlitePool`, together with the connection and provisioning helpers
//! the binary runs once at startup.
//!
//! # Schema
//!
//! - `authors(id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT)`
//! - `books(isbn INTEGER PRIMARY KEY, title TEXT, qty INTEGER, author_id INTEGER)`
//!
//! `AUTOINCREMENT` guarantees author ids are never reused, even after rows
//! are removed by hand. `books.author_id` references `authors(id)` but the
//! reference is not enforced: a book may name an author that does not exist.
//!
//! # Differences from the reference store behavior
//!
//! - Author ids come from `INSERT ... RETURNING id` instead of a follow-up
//!   `last_insert_rowid()` query
//! - A duplicate ISBN that slips past the existence check is still reported
//!   as a duplicate via the primary key constraint

use crate::config::DatabaseConfig;
use crate::core::error::{LibraryError, Result, StorageError};
use crate::core::model::{Author, Book};
use crate::core::store::CatalogStore;
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Connection and schema management
// ---------------------------------------------------------------------------

/// Open a connection pool for the configured database.
///
/// Database files are created when missing. In-memory databases are pinned
/// to a single long-lived connection so every statement sees the same data.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| StorageError::Connection {
            backend: "SQLite".to_string(),
            message: e.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection {
            backend: "SQLite".to_string(),
            message: e.to_string(),
        })?;

    tracing::info!(url = %config.url, "connected to database");
    Ok(pool)
}

/// Apply the required tables and indexes (idempotent).
///
/// Safe to call on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(StorageError::query("create_authors_table"))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS books (
            isbn INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            qty INTEGER NOT NULL,
            author_id INTEGER NOT NULL REFERENCES authors(id)
        )",
    )
    .execute(pool)
    .await
    .map_err(StorageError::query("create_books_table"))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_books_author_id ON books (author_id)")
        .execute(pool)
        .await
        .map_err(StorageError::query("create_books_index"))?;

    tracing::info!("database schema ready");
    Ok(())
}

// ---------------------------------------------------------------------------
// SqliteCatalogStore
// ---------------------------------------------------------------------------

const BOOK_COLUMNS: &str = "isbn, title, qty, author_id";

/// Catalog store backed by SQLite.
///
/// # Example
///
/// ```rust,ignore
/// use library::storage::sqlite::{self, SqliteCatalogStore};
///
/// let pool = sqlite::connect(&config.database).await?;
/// sqlite::ensure_schema(&pool).await?;
/// let store = SqliteCatalogStore::new(pool);
/// ```
#[derive(Clone, Debug)]
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn get_book(&self, isbn: i64) -> Result<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE isbn = ?"
        ))
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::query("get_book"))?;

        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let books =
            sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM books ORDER BY isbn"))
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::query("list_books"))?;

        Ok(books)
    }

    async fn find_books_by_isbn(&self, isbn: i64) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE isbn = ?"
        ))
        .bind(isbn)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::query("find_books_by_isbn"))?;

        Ok(books)
    }

    async fn books_by_author(&self, author_id: i64) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE author_id = ? ORDER BY isbn"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::query("books_by_author"))?;

        Ok(books)
    }

    async fn insert_book(&self, book: &Book) -> Result<u64> {
        let result = sqlx::query(
            "INSERT INTO books (isbn, title, qty, author_id) VALUES (?, ?, ?, ?)",
        )
        .bind(book.isbn)
        .bind(&book.title)
        .bind(book.qty)
        .bind(book.author_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                LibraryError::DuplicateKey { isbn: book.isbn }
            }
            other => StorageError::query("insert_book")(other).into(),
        })?;

        tracing::debug!(isbn = book.isbn, "inserted book row");
        Ok(result.rows_affected())
    }

    async fn count_books(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::query("count_books"))?;

        Ok(count)
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::query("get_author"))?;

        Ok(author)
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::query("list_authors"))?;

        Ok(authors)
    }

    async fn insert_author(&self, name: &str) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO authors (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::query("insert_author"))?;

        tracing::debug!(id, "inserted author row");
        Ok(id)
    }
}
