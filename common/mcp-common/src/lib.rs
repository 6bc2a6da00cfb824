//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides common functionality used across the MCP servers in
//! this workspace:
//!
//! - **Initialization**: tracing setup for standardized server startup
//!   (stderr only - stdout belongs to the MCP protocol)
//! - **Results**: Helper functions for creating `CallToolResult` responses
//! - **Errors**: Traits for converting errors to MCP-compatible format
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::json_success;
//! use rmcp::model::CallToolResult;
//!
//! // In tool implementations - replaces 3-4 lines each
//! fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     let data = get_some_data();
//!     json_success(&data)
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::init_tracing;
pub use result::{json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};
