//! Error types for SingularityApp API operations

use thiserror::Error;

/// Errors that can occur when calling the SingularityApp API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    #[error("singularity API returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: reqwest::StatusCode,
        /// Response body text
        body: String,
    },

    /// The request never produced a usable response (connect, timeout, TLS)
    #[error("request to singularity API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected type
    #[error("failed to decode singularity API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The project exists but has no task groups; a task filed under it
    /// would not render in the project view. Misconfiguration on the
    /// project's side, not a transport failure.
    #[error("project {project_id} has no task groups - create one in the app first")]
    NoTaskGroup {
        /// The project that was queried
        project_id: String,
    },
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl mcp_common::IntoMcpError for ApiError {
    fn into_mcp_error(self) -> mcp_common::McpError {
        match self {
            // User-actionable: the caller picked a project that cannot hold
            // a rendered task yet
            ApiError::NoTaskGroup { .. } => mcp_common::invalid_params(self.to_string()),
            _ => mcp_common::internal_error(self.to_string()),
        }
    }
}
