//! Typed error handling for the library catalog
//!
//! Every fallible operation in the crate returns [`LibraryError`], which groups
//! failures by category so callers can match on what went wrong instead of
//! inspecting strings.
//!
//! # Error Categories
//!
//! - [`StorageError`]: the underlying store failed (connection, syntax, constraint)
//! - [`LibraryError::DuplicateKey`]: a book with the same ISBN already exists
//! - [`ValidationError`]: mutation input was rejected before touching the store
//! - [`ConfigError`]: configuration could not be loaded or is invalid
//!
//! Absence of an entity is not an error: lookups return `Option`.
//!
//! # Example
//!
//! ```rust,ignore
//! match catalog.add_book(new_book).await {
//!     Ok(book) => println!("added {}", book.title),
//!     Err(LibraryError::DuplicateKey { isbn }) => println!("{} is already catalogued", isbn),
//!     Err(e) => eprintln!("failed: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T, E = LibraryError> = std::result::Result<T, E>;

/// The main error type for the library catalog
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A book with this ISBN is already in the catalog
    #[error("book with isbn {isbn} already exists")]
    DuplicateKey { isbn: i64 },

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LibraryError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            LibraryError::Storage(_) => "STORAGE_ERROR",
            LibraryError::DuplicateKey { .. } => "DUPLICATE_KEY",
            LibraryError::Validation(_) => "VALIDATION_ERROR",
            LibraryError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Get additional details for the error
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            LibraryError::DuplicateKey { isbn } => Some(serde_json::json!({ "isbn": isbn })),
            LibraryError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            LibraryError::Storage(StorageError::Query { operation, .. }) => {
                Some(serde_json::json!({ "operation": operation }))
            }
            _ => None,
        }
    }

    /// Whether this error was caused by the underlying store
    pub fn is_storage(&self) -> bool {
        matches!(self, LibraryError::Storage(_))
    }
}

/// GraphQL errors carry `extensions.code` plus the same details as [`LibraryError::details`]
impl ErrorExtensions for LibraryError {
    fn extend(&self) -> async_graphql::Error {
        let details = self.details();
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| {
            extensions.set("code", self.error_code());
            if let Some(serde_json::Value::Object(map)) = details {
                for (key, value) in map {
                    if let Ok(value) = async_graphql::Value::from_json(value) {
                        extensions.set(key, value);
                    }
                }
            }
        })
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by a [`CatalogStore`](crate::core::store::CatalogStore) backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// A statement against the relational store failed
    #[error("storage operation '{operation}' failed: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Connection could not be established
    #[error("failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// Backend-specific failure not coming from sqlx
    #[error("{backend} storage error: {message}")]
    Backend { backend: String, message: String },
}

impl StorageError {
    /// Build a closure mapping a sqlx error for the named operation
    pub fn query(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StorageError {
        move |source| StorageError::Query { operation, source }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("invalid input: {}", join_fields(.0))]
    FieldErrors(Vec<FieldError>),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for LibraryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        LibraryError::Validation(errors.into())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading a configuration file
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("failed to parse config: {message}")]
    Parse { message: String },

    /// Invalid value in configuration
    #[error("invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}
