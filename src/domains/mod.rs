//! Domains module containing business logic organized by bounded contexts.
//!
//! - **search**: SerpApi request assembly and the provider seam
//! - **tools**: MCP tools exposing the search gateway to clients

pub mod search;
pub mod tools;
