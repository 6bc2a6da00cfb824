//! Singularity MCP - SingularityApp task manager over the Model Context Protocol
//!
//! Proxies the SingularityApp API v2 (tasks, projects, task groups, tags,
//! habits) for AI assistants. Requires `SINGULARITY_API_TOKEN` in the
//! environment.

mod api;
mod config;
mod dates;
mod handlers;
mod params;
mod resolver;
mod server;
mod service;
#[cfg(test)]
mod tests;
mod types;

use rmcp::{transport::io::stdio, ServiceExt};

use config::Config;
use server::SingularityMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("singularity_mcp")?;

    tracing::info!("Starting Singularity MCP server");

    let config = Config::from_env()?;
    tracing::info!("API base URL: {}", config.base_url);

    let server = SingularityMcpServer::new(&config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Singularity MCP server running");

    service.waiting().await?;

    tracing::info!("Singularity MCP server stopped");

    Ok(())
}
