//! Root query resolvers

use super::types::null_on_error;
use crate::core::{Author, Book};
use crate::server::host::ServerHost;
use async_graphql::{Context, Object};
use std::sync::Arc;

/// Root Query
pub struct QueryRoot {
    pub(super) host: Arc<ServerHost>,
}

#[Object]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, isbn: Option<i64>) -> Option<Book> {
        let isbn = isbn?;
        null_on_error(ctx, self.host.catalog.book(isbn).await).flatten()
    }

    /// A list of all books
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        let books = null_on_error(ctx, self.host.catalog.books().await)?;
        Some(books.into_iter().map(Some).collect())
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i64>) -> Option<Author> {
        let id = id?;
        null_on_error(ctx, self.host.catalog.author(id).await).flatten()
    }

    /// A list of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Option<Vec<Option<Author>>> {
        let authors = null_on_error(ctx, self.host.catalog.authors().await)?;
        Some(authors.into_iter().map(Some).collect())
    }
}
