//! SingularityApp API v2 client
//!
//! A thin authenticated wrapper over the HTTP endpoints, one method per
//! operation. No retries and no pagination beyond `maxCount`; failures
//! surface to the caller as [`error::ApiError`].

pub mod client;
pub mod error;

pub use client::SingularityClient;
pub use error::{ApiError, ApiResult};
