//! Prints the roster GraphQL schema as SDL.
//!
//! Usage: cargo run --bin export_schema > schema.graphql

use team_roster::{api::graphql::build_schema, infrastructure::config::GraphqlConfig};

fn main() {
    let schema = build_schema(&GraphqlConfig::default());
    print!("{}", schema.sdl());
}
