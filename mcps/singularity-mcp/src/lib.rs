//! Singularity MCP Library
//!
//! MCP server proxying the SingularityApp task manager API v2.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use singularity_mcp::{Config, SingularityMcpServer};
//!
//! let config = Config::from_env()?;
//! let server = SingularityMcpServer::new(&config)?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! The one piece with real design content is the project -> default
//! task-group resolution cache ([`resolver::GroupResolver`]): tasks filed
//! under a project must also carry a group (section) id to render in the
//! client application, and the resolver amortizes the lookup to one listing
//! call per project per process.

pub mod api;
pub mod config;
pub mod dates;
pub mod handlers;
pub mod params;
pub mod resolver;
pub mod server;
pub mod service;
#[cfg(test)]
pub mod tests;
pub mod types;

// Re-export main server type
pub use config::Config;
pub use server::SingularityMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
