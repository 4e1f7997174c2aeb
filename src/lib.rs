//! SerpApi MCP Server Library
//!
//! This crate exposes SerpApi search and location lookup as Model Context
//! Protocol tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **search**: Request assembly, credential check and the SerpApi provider
//!   - **tools**: The `search` and `locations` MCP tools
//!
//! # Example
//!
//! ```rust,no_run
//! use serpapi_mcp_server::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result, TransportService};
