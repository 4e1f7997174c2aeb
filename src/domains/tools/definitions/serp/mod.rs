//! SerpApi tools module.
//!
//! - `search`: Run a search on any SerpApi engine and return the raw result
//! - `locations`: Resolve free text into canonical Google location strings
//!
//! Each tool has handlers for both HTTP and STDIO/TCP transports.

pub mod common;
pub mod locations;
pub mod search;

pub use locations::{LocationsParams, LocationsTool};
pub use search::{SearchParams, SearchTool};
