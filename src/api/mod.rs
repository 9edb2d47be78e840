//! Upstream REST API access: HTTP client, wire payloads, reference
//! resolution, and per-ID record fetching.

pub mod client;
pub mod fetcher;
pub mod payload;
pub mod resolver;
