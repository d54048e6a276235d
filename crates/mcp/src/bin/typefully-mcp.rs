// Standalone MCP server binary

use anyhow::Result;
use std::sync::Arc;
use typefully_mcp::server::McpServer;
use typefully_mcp::tools::*;
use typefully_sdk::TypefullyClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Typefully MCP server starting...");

    // The API key is injected here once; its absence is reported per call,
    // not at startup
    let mut builder = TypefullyClient::builder();
    if let Ok(base) = std::env::var("TYPEFULLY_API_BASE") {
        builder = builder.base_url(base);
    }
    match std::env::var("TYPEFULLY_API_KEY") {
        Ok(key) => builder = builder.api_key(key),
        Err(_) => tracing::warn!("TYPEFULLY_API_KEY is not set; tool calls will fail"),
    }
    let client = Arc::new(builder.build()?);

    // Create tool registry
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CreateDraftTool::new(client.clone())));
    registry.register(Arc::new(RecentlyScheduledTool::new(client)));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    // Start MCP server
    let server = McpServer::new(registry);
    server.run().await?;

    Ok(())
}
