//! In-memory implementation of CatalogStore for testing and development

use crate::core::error::{LibraryError, Result, StorageError};
use crate::core::model::{Author, Book};
use crate::core::store::CatalogStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Catalog {
    authors: BTreeMap<i64, Author>,
    books: BTreeMap<i64, Book>,
    last_author_id: i64,
}

/// In-memory catalog store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Books are listed in ISBN order and authors in id order.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Catalog>> {
        self.catalog.read().map_err(|e| {
            StorageError::Backend {
                backend: "memory".to_string(),
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Catalog>> {
        self.catalog.write().map_err(|e| {
            StorageError::Backend {
                backend: "memory".to_string(),
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn get_book(&self, isbn: i64) -> Result<Option<Book>> {
        Ok(self.read()?.books.get(&isbn).cloned())
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.books.values().cloned().collect())
    }

    async fn find_books_by_isbn(&self, isbn: i64) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .values()
            .filter(|book| book.isbn == isbn)
            .cloned()
            .collect())
    }

    async fn books_by_author(&self, author_id: i64) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .values()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn insert_book(&self, book: &Book) -> Result<u64> {
        let mut catalog = self.write()?;

        if catalog.books.contains_key(&book.isbn) {
            return Err(LibraryError::DuplicateKey { isbn: book.isbn });
        }
        catalog.books.insert(book.isbn, book.clone());

        Ok(1)
    }

    async fn count_books(&self) -> Result<i64> {
        Ok(self.read()?.books.len() as i64)
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        Ok(self.read()?.authors.get(&id).cloned())
    }

    async fn list_authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.values().cloned().collect())
    }

    async fn insert_author(&self, name: &str) -> Result<i64> {
        let mut catalog = self.write()?;

        catalog.last_author_id += 1;
        let id = catalog.last_author_id;
        catalog.authors.insert(id, Author::new(id, name));

        Ok(id)
    }
}
