//! Entity resolvers for `Book` and `Author`
//!
//! Scalar fields are projections of the record already in hand. The
//! relationship fields (`Book.author`, `Author.books`) each issue one store
//! lookup, and only when the client selects them. Results are not cached:
//! a list of N books selecting `author` costs N lookups.
//!
//! A failed lookup is reported as an error at the field's path and the field
//! itself resolves to null, so sibling fields are unaffected.

use crate::core::{Author, Book, LibraryError};
use crate::server::host::ServerHost;
use async_graphql::{Context, ErrorExtensions, Object, PathSegment, QueryPathSegment, Result};
use std::sync::Arc;

/// Record a failed lookup against the current field and resolve it to null
pub(super) fn null_on_error<T>(ctx: &Context<'_>, result: crate::core::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            report(ctx, &error);
            None
        }
    }
}

fn report(ctx: &Context<'_>, error: &LibraryError) {
    let mut server_error = error.extend().into_server_error(ctx.item.pos);

    if let Some(node) = ctx.path_node.as_ref() {
        tracing::warn!(field = %node, error = %error, "field resolution failed");

        let mut path: Vec<PathSegment> = std::iter::once(node)
            .chain(node.parents())
            .map(|node| match node.segment {
                QueryPathSegment::Name(name) => PathSegment::Field(name.to_string()),
                QueryPathSegment::Index(index) => PathSegment::Index(index),
            })
            .collect();
        path.reverse();
        server_error.path = path;
    }

    ctx.add_error(server_error);
}

/// This represents a book written by an author
#[Object]
impl Book {
    async fn isbn(&self) -> i64 {
        self.isbn
    }

    async fn title(&self) -> &str {
        &self.title
    }

    /// Quantity on hand
    async fn qty(&self) -> i64 {
        self.qty
    }

    async fn author_id(&self) -> i64 {
        self.author_id
    }

    /// The author whose id is `authorId`, or null when there is none
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        Ok(null_on_error(ctx, host.catalog.author_of(self).await).flatten())
    }
}

/// This represents an author of a book
#[Object]
impl Author {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }

    /// Every book whose `authorId` is this author's id
    ///
    /// Empty when the author has no books, null only when the lookup failed.
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Book>>> {
        let host = ctx.data::<Arc<ServerHost>>()?;
        Ok(null_on_error(ctx, host.catalog.books_of(self).await))
    }
}
