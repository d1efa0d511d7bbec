//! GraphQL API exposure
//!
//! Serves the catalog schema over HTTP:
//! - `POST /graphql` executes queries and mutations
//! - `GET /graphql` serves the GraphiQL IDE (when enabled)
//! - `GET /graphql/schema` exports the schema as SDL
//! - `GET /health` reports liveness

mod mutation;
mod query;
mod schema;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{LibrarySchema, build_schema};

use crate::server::host::ServerHost;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let host = Arc::new(builder.build_host()?);
    /// let app = GraphQLExposure::build_router(host);
    /// ```
    pub fn build_router(host: Arc<ServerHost>) -> Router {
        let graphiql = host.config.server.graphiql;
        let schema = build_schema(host);

        let endpoint = if graphiql {
            post(graphql_handler).get(graphiql_handler)
        } else {
            post(graphql_handler)
        };

        Router::new()
            .route("/graphql", endpoint)
            .route("/graphql/schema", get(graphql_sdl))
            .route("/health", get(health))
            .layer(Extension(schema))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<LibrarySchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for the GraphiQL IDE
async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(Extension(schema): Extension<LibrarySchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
