#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Extension, Router,
};
use serde_json::Value;
use team_roster::{
    api,
    infrastructure::{
        config::{Config, RosterRules},
        state::AppState,
        store::MemoryRosterStore,
    },
};
use tower::ServiceExt;

/// Router over a freshly seeded store, so every test starts from the sample roster.
pub fn build_app(config: Config) -> Router {
    let config = Arc::new(config);
    let state = Arc::new(AppState::new(
        Arc::clone(&config),
        Arc::new(MemoryRosterStore::seeded()),
    ));
    api::build_router(config).layer(Extension(state))
}

pub fn default_app() -> Router {
    build_app(Config::default())
}

pub fn strict_app() -> Router {
    build_app(Config {
        roster: RosterRules {
            enforce_unique_ids: true,
            enforce_team_reference: true,
        },
        ..Config::default()
    })
}

pub async fn graphql(app: &Router, query: &str) -> Result<Value> {
    send_graphql(app, serde_json::json!({ "query": query })).await
}

pub async fn graphql_with_variables(app: &Router, query: &str, variables: Value) -> Result<Value> {
    send_graphql(app, serde_json::json!({ "query": query, "variables": variables })).await
}

async fn send_graphql(app: &Router, payload: Value) -> Result<Value> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload)?))?,
        )
        .await?;

    anyhow::ensure!(
        response.status() == StatusCode::OK,
        "unexpected status {}",
        response.status()
    );

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn team_count(app: &Router) -> Result<usize> {
    let body = graphql(app, "{ teams { id } }").await?;
    Ok(body["data"]["teams"].as_array().map(Vec::len).unwrap_or_default())
}

pub async fn player_count(app: &Router) -> Result<usize> {
    let body = graphql(app, "{ players { id } }").await?;
    Ok(body["data"]["players"].as_array().map(Vec::len).unwrap_or_default())
}

pub fn error_codes(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|error| error["extensions"]["code"].as_str())
        .map(str::to_string)
        .collect()
}
