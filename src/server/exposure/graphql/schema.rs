//! GraphQL schema assembly
//!
//! Wires the root query and mutation types to the host. The host is also
//! registered as schema data so nested entity resolvers can reach the store.

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::server::host::ServerHost;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// The executable library schema
pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema from the host
pub fn build_schema(host: Arc<ServerHost>) -> LibrarySchema {
    let query = QueryRoot { host: host.clone() };
    let mutation = MutationRoot { host: host.clone() };

    Schema::build(query, mutation, EmptySubscription)
        .data(host)
        .finish()
}
