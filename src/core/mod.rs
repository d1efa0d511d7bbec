//! Core module containing the catalog records, errors and storage seam

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{ConfigError, FieldError, LibraryError, Result, StorageError, ValidationError};
pub use model::{Author, Book, NewAuthor, NewBook};
pub use service::CatalogService;
pub use store::CatalogStore;
