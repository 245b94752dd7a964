//! MCP Server exposing uploads disk usage and host health metrics

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::host::{OsFileSystem, SysinfoProbe};
use crate::info;
use crate::types::FreeSpace;

const INSTRUCTIONS: &str = "Upload Metrics MCP Server - reports uploads directory usage and \
     host CPU, memory, and disk health. Disk capacity is estimated from host memory \
     and is not an authoritative filesystem reading.";

/// The Upload Metrics MCP Server
#[derive(Clone)]
pub struct UploadMetricsMcpServer {
    config: Arc<Config>,
    probe: Arc<SysinfoProbe>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiskUsageParams {
    #[schemars(description = "Directory to measure (default: configured uploads directory)")]
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct FreeSpaceParams {
    #[schemars(description = "Directory to measure (default: configured uploads directory)")]
    pub path: Option<String>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl UploadMetricsMcpServer {
    /// Create a server using [`Config::load`]
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            probe: Arc::new(SysinfoProbe::new()),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get estimated disk usage (total, used, free bytes and used percentage) for the uploads directory. Creates the directory if missing."
    )]
    async fn get_disk_usage(
        &self,
        Parameters(params): Parameters<DiskUsageParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = self.resolve(params.path);
        let usage = self
            .run_blocking(move |probe| info::disk::estimate_disk_usage(&OsFileSystem, probe, &path))
            .await?;
        json_success(&usage)
    }

    #[tool(description = "Get estimated free bytes available to the uploads directory")]
    async fn get_free_space(
        &self,
        Parameters(params): Parameters<FreeSpaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = self.resolve(params.path);
        let display = path.display().to_string();
        let free_bytes = self
            .run_blocking(move |probe| info::disk::free_space(&OsFileSystem, probe, &path))
            .await?;
        json_success(&FreeSpace {
            path: display,
            free_bytes,
        })
    }

    #[tool(
        description = "Get a timestamped snapshot of CPU, memory, and uploads disk usage percentages"
    )]
    async fn get_system_metrics(&self) -> Result<CallToolResult, McpError> {
        let uploads_dir = self.config.uploads_dir.clone();
        let metrics = self
            .run_blocking(move |probe| {
                info::collect_system_metrics(&OsFileSystem, probe, &uploads_dir)
            })
            .await?;
        json_success(&metrics)
    }
}

impl UploadMetricsMcpServer {
    fn resolve(&self, path: Option<String>) -> PathBuf {
        path.filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.uploads_dir.clone())
    }

    /// Run a filesystem-bound collection off the async runtime, bounded by
    /// the configured timeout
    async fn run_blocking<T, F>(&self, task: F) -> Result<T, McpError>
    where
        F: FnOnce(&SysinfoProbe) -> T + Send + 'static,
        T: Send + 'static,
    {
        let probe = Arc::clone(&self.probe);
        let handle = tokio::task::spawn_blocking(move || task(&probe));

        match tokio::time::timeout(self.config.blocking_timeout(), handle).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(McpError::internal_error(
                format!("metrics task failed: {}", e),
                None,
            )),
            Err(_) => Err(McpError::internal_error(
                format!(
                    "metrics collection timed out after {}s",
                    self.config.blocking_timeout_secs
                ),
                None,
            )),
        }
    }
}

fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for UploadMetricsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for UploadMetricsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}
