//! Root mutation resolvers

use crate::core::{Author, Book, NewAuthor, NewBook};
use crate::server::host::ServerHost;
use async_graphql::{ErrorExtensions, Object, Result};
use std::sync::Arc;

/// Root Mutation
pub struct MutationRoot {
    pub(super) host: Arc<ServerHost>,
}

#[Object]
impl MutationRoot {
    /// Add a book
    ///
    /// Fails without writing when the ISBN is already catalogued.
    async fn add_book(
        &self,
        isbn: i64,
        title: String,
        qty: i64,
        author_id: i64,
    ) -> Result<Book> {
        let new_book = NewBook {
            isbn,
            title,
            qty,
            author_id,
        };
        self.host
            .catalog
            .add_book(new_book)
            .await
            .map_err(|e| e.extend())
    }

    /// Add an author
    async fn add_author(&self, name: String) -> Result<Author> {
        self.host
            .catalog
            .add_author(NewAuthor { name })
            .await
            .map_err(|e| e.extend())
    }
}
