//! # Library Catalog
//!
//! A GraphQL API over a small library catalog of authors and the books they
//! wrote, backed by SQLite.
//!
//! ## Features
//!
//! - **Lazy relationships**: `Book.author` and `Author.books` are looked up
//!   only when a query selects them
//! - **Validated writes**: `addBook` rejects duplicate ISBNs without touching
//!   the store, `addAuthor` gets its id from an atomic insert
//! - **Per-field errors**: a failing relationship lookup nulls that field and
//!   leaves its siblings intact
//! - **Swappable storage**: resolvers only see the [`CatalogStore`](core::CatalogStore)
//!   trait, with SQLite and in-memory implementations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use library::prelude::*;
//! use library::storage::sqlite;
//!
//! let config = LibraryConfig::from_env()?;
//! let pool = sqlite::connect(&config.database).await?;
//! sqlite::ensure_schema(&pool).await?;
//!
//! ServerBuilder::new()
//!     .with_config(config)
//!     .with_store(SqliteCatalogStore::new(pool))
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Author, Book, CatalogService, CatalogStore, ConfigError, FieldError, LibraryError,
        NewAuthor, NewBook, StorageError, ValidationError,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryCatalogStore, SqliteCatalogStore};

    // === Config ===
    pub use crate::config::{DatabaseConfig, LibraryConfig, LogConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{
        GraphQLExposure, LibrarySchema, ServerBuilder, ServerHost, build_schema,
    };

    // === External dependencies ===
    pub use async_trait::async_trait;
}
