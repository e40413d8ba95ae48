//! Main MCP server orchestration

use std::sync::Arc;
use tracing::info;

use crate::protocol::RequestHandler;
use crate::transport::{HttpTransport, StdioTransport};

/// Default HTTP bind host
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8008;

/// Server mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerMode {
    /// stdio transport (for desktop MCP clients)
    #[default]
    Stdio,
    /// HTTP transport; `host` may be an IP literal or a hostname
    Http { host: String, port: u16 },
}

/// MCP server
pub struct McpServer {
    handler: Arc<RequestHandler>,
    mode: ServerMode,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new() -> Self {
        Self {
            handler: Arc::new(RequestHandler::new()),
            mode: ServerMode::default(),
        }
    }

    /// Set the server mode
    pub fn with_mode(mut self, mode: ServerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> &ServerMode {
        &self.mode
    }

    /// Run the server until the transport shuts down
    pub async fn run(&self) -> std::io::Result<()> {
        match &self.mode {
            ServerMode::Stdio => {
                info!("Starting QR code MCP server in stdio mode");
                StdioTransport::new(self.handler.clone()).run().await
            }
            ServerMode::Http { host, port } => {
                info!("Starting QR code MCP server in HTTP mode on {}:{}", host, port);
                HttpTransport::new(self.handler.clone(), host.clone(), *port)
                    .run()
                    .await
            }
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}
