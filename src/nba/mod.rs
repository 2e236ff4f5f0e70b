//! NBA stats API integration: HTTP endpoints, envelope parsing, and the
//! season reconciliation engine.

pub mod cache_players;
pub mod compute;
pub mod http;
pub mod types;
