//! Server module for building the HTTP server around the catalog
//!
//! - [`ServerHost`] holds configuration and the shared store
//! - [`ServerBuilder`] assembles the host and serves it
//! - [`exposure`] turns the host into protocol routers

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::GraphQLExposure;
pub use exposure::graphql::{LibrarySchema, build_schema};
pub use host::ServerHost;
