//! Search domain module.
//!
//! This module contains the search gateway: it assembles SerpApi request
//! parameters from tool arguments, checks the configured credential, and
//! delegates the network call to a [`SearchProvider`].
//!
//! ## Architecture
//!
//! - `types.rs` - Request and envelope types
//! - `provider.rs` - The `SearchProvider` trait (the outbound seam)
//! - `serpapi.rs` - Production provider built on `serpapi-search-rust`
//! - `gateway.rs` - Parameter assembly and response shaping
//! - `error.rs` - Search-specific error types

mod error;
mod gateway;
mod provider;
pub mod serpapi;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use error::{SearchError, SearchResult};
pub use gateway::SearchGateway;
pub use provider::SearchProvider;
pub use serpapi::SerpApiClient;
pub use types::{
    API_KEY_PARAM, DEFAULT_ENGINE, DEFAULT_LIMIT, DEFAULT_NUM, LocationsEnvelope, SearchEnvelope,
    SearchQuery, SearchRequest,
};
