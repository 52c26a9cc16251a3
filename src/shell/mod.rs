// Composition root for the habits service: configuration, state wiring, HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
