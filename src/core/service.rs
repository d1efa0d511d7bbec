//! Catalog service: reads and the mutation write protocol
//!
//! `CatalogService` is what the GraphQL resolvers call. Reads are single
//! store lookups. Writes validate their input first, then run the existence
//! check, and only then insert.

use crate::core::error::{LibraryError, Result};
use crate::core::model::{Author, Book, NewAuthor, NewBook};
use crate::core::store::CatalogStore;
use std::sync::Arc;
use validator::Validate;

/// Request-scoped operations over a shared [`CatalogStore`]
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// The store this service reads from and writes to
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    pub async fn book(&self, isbn: i64) -> Result<Option<Book>> {
        self.store.get_book(isbn).await
    }

    pub async fn books(&self) -> Result<Vec<Book>> {
        self.store.list_books().await
    }

    pub async fn author(&self, id: i64) -> Result<Option<Author>> {
        self.store.get_author(id).await
    }

    pub async fn authors(&self) -> Result<Vec<Author>> {
        self.store.list_authors().await
    }

    /// The author a book refers to, if that author exists
    pub async fn author_of(&self, book: &Book) -> Result<Option<Author>> {
        self.store.get_author(book.author_id).await
    }

    /// Every book written by this author; empty when there are none
    pub async fn books_of(&self, author: &Author) -> Result<Vec<Book>> {
        self.store.books_by_author(author.id).await
    }

    /// Add a book to the catalog
    ///
    /// Rejects invalid input and duplicate ISBNs without writing. The
    /// returned book is built from the arguments, not read back.
    pub async fn add_book(&self, new_book: NewBook) -> Result<Book> {
        new_book.validate()?;

        let existing = self.store.find_books_by_isbn(new_book.isbn).await?;
        if !existing.is_empty() {
            tracing::warn!(isbn = new_book.isbn, "rejected book with duplicate isbn");
            return Err(LibraryError::DuplicateKey {
                isbn: new_book.isbn,
            });
        }

        let book = Book::from(new_book);
        self.store.insert_book(&book).await?;

        tracing::info!(isbn = book.isbn, author_id = book.author_id, "book added");
        Ok(book)
    }

    /// Add an author; the store generates the id
    pub async fn add_author(&self, new_author: NewAuthor) -> Result<Author> {
        new_author.validate()?;

        let id = self.store.insert_author(&new_author.name).await?;

        tracing::info!(id, "author added");
        Ok(Author {
            id,
            name: new_author.name,
        })
    }
}
