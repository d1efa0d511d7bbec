//! Storage accessor trait for the catalog
//!
//! A `CatalogStore` executes parameterized point queries against the backing
//! store and returns typed records. It is the only component that touches
//! persistent state, and it holds no schema knowledge beyond the statements
//! it issues. Provisioning happens once at startup, outside this trait.

use crate::core::error::Result;
use crate::core::model::{Author, Book};
use async_trait::async_trait;

/// Typed point queries and commands over the `authors` and `books` relations
///
/// Every failure of the underlying store is reported as
/// [`StorageError`](crate::core::error::StorageError); it is never folded
/// into an empty result.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch the book with this ISBN
    async fn get_book(&self, isbn: i64) -> Result<Option<Book>>;

    /// List every book in store order
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Scan the books relation for rows carrying this ISBN
    ///
    /// Used as the existence check before inserting a book.
    async fn find_books_by_isbn(&self, isbn: i64) -> Result<Vec<Book>>;

    /// List every book whose `author_id` equals `author_id`
    async fn books_by_author(&self, author_id: i64) -> Result<Vec<Book>>;

    /// Insert a book row, returning the number of affected rows
    ///
    /// A uniqueness violation on `isbn` is reported as
    /// [`LibraryError::DuplicateKey`](crate::core::error::LibraryError::DuplicateKey).
    async fn insert_book(&self, book: &Book) -> Result<u64>;

    /// Count the books in the catalog
    async fn count_books(&self) -> Result<i64>;

    /// Fetch the author with this id
    async fn get_author(&self, id: i64) -> Result<Option<Author>>;

    /// List every author in store order
    async fn list_authors(&self) -> Result<Vec<Author>>;

    /// Insert an author row and return the id generated for it
    ///
    /// The insert and the id read are a single atomic step, so concurrent
    /// inserts can never observe each other's ids.
    async fn insert_author(&self, name: &str) -> Result<i64>;
}
