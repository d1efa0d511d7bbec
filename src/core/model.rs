//! Catalog records and mutation inputs
//!
//! [`Author`] and [`Book`] are the validated row shapes returned by every
//! [`CatalogStore`](crate::core::store::CatalogStore). Resolvers only ever see
//! these types, never raw rows.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// An author, identified by a server-generated id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

impl Author {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A book, identified by its client-supplied ISBN
///
/// `author_id` is a best-effort reference: it may name an author that does
/// not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isbn: i64,
    pub title: String,
    pub qty: i64,
    pub author_id: i64,
}

impl Book {
    pub fn new(isbn: i64, title: impl Into<String>, qty: i64, author_id: i64) -> Self {
        Self {
            isbn,
            title: title.into(),
            qty,
            author_id,
        }
    }
}

/// Arguments of the `addBook` mutation
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    pub isbn: i64,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0, message = "qty must not be negative"))]
    pub qty: i64,
    pub author_id: i64,
}

impl From<NewBook> for Book {
    fn from(new: NewBook) -> Self {
        Book {
            isbn: new.isbn,
            title: new.title,
            qty: new.qty,
            author_id: new.author_id,
        }
    }
}

/// Arguments of the `addAuthor` mutation
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewAuthor {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
