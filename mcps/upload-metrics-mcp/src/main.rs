//! Upload Metrics MCP Server
//!
//! Reports uploads directory usage and host health over MCP stdio.
//!
//! # Usage
//!
//! Run directly: `upload-metrics-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "upload-metrics": { "command": "./upload-metrics-mcp" } } }
//! ```

use rmcp::ServiceExt;
use upload_metrics_mcp::{init::init_tracing, UploadMetricsMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting upload_metrics_mcp MCP Server");

    let server = UploadMetricsMcpServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
