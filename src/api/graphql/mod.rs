//! GraphQL endpoint for the team roster, built on async-graphql.

use std::sync::Arc;

use async_graphql::{http::GraphiQLSource, Context, ErrorExtensions};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Extension, RawQuery},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::{
    infrastructure::{config::GraphqlConfig, state::AppState},
    services::{errors::ServiceError, roster::RosterService},
};

pub mod schema;
pub mod types;

pub use schema::{build_schema, MutationRoot, QueryRoot, RosterSchema};

pub const ENDPOINT: &str = "/graphql";

pub fn router(config: &GraphqlConfig) -> Router {
    let schema = build_schema(config);

    let route = if config.graphiql {
        post(handler).get(explore_or_execute)
    } else {
        post(handler).get(handler)
    };

    Router::new()
        .route(ENDPOINT, route)
        .layer(Extension(schema))
}

/// Executes one GraphQL request with the shared application state attached.
async fn handler(
    Extension(schema): Extension<RosterSchema>,
    Extension(state): Extension<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(state)).await.into()
}

/// GET serves GraphiQL to browsers and to requests without a query string.
/// Any other GET is executed from its query string like a POST.
async fn explore_or_execute(
    Extension(schema): Extension<RosterSchema>,
    Extension(state): Extension<Arc<AppState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    request: Option<GraphQLRequest>,
) -> Response {
    if query.as_deref().map_or(true, str::is_empty) || prefers_html(&headers) {
        return graphiql().await.into_response();
    }

    match request {
        Some(request) => handler(Extension(schema), Extension(state), request)
            .await
            .into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "invalid_graphql_request" })),
        )
            .into_response(),
    }
}

fn prefers_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

pub(crate) fn service(ctx: &Context<'_>) -> async_graphql::Result<RosterService> {
    let state = ctx.data::<Arc<AppState>>()?;
    Ok(RosterService::new(Arc::clone(state)))
}

pub(crate) fn to_graphql_error(err: ServiceError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}
