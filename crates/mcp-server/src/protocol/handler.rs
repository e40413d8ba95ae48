//! MCP request handler

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::capabilities::ServerCapabilities;
use super::types::*;
use crate::tools::{ToolExecutor, ToolGenerator};

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "qrcode-mcp";

/// Handler for MCP requests.
///
/// Holds no per-session state, so one handler can serve any number of
/// concurrent requests.
pub struct RequestHandler {
    /// Tool generator
    tool_generator: ToolGenerator,
    /// Tool executor
    tool_executor: ToolExecutor,
    /// Server name
    server_name: String,
    /// Server version
    server_version: String,
}

impl RequestHandler {
    /// Create a new request handler
    pub fn new() -> Self {
        Self {
            tool_generator: ToolGenerator::new(),
            tool_executor: ToolExecutor::new(),
            server_name: SERVER_NAME.to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Handle an incoming message
    pub async fn handle(&self, message: McpMessage) -> Option<McpMessage> {
        if message.is_response() {
            // Response - we don't expect these in server mode
            debug!("Received unexpected response");
            return None;
        }

        match (message.method, message.id) {
            (Some(method), Some(id)) => {
                debug!("Handling request: {}", method);

                let result = match method.as_str() {
                    "initialize" => self.handle_initialize(message.params).await,
                    "ping" => self.handle_ping().await,
                    "tools/list" => self.handle_tools_list().await,
                    "tools/call" => self.handle_tools_call(message.params).await,
                    _ => Err(McpError::method_not_found()),
                };

                Some(match result {
                    Ok(result) => McpMessage::response(id, result),
                    Err(error) => McpMessage::error_response(Some(id), error),
                })
            }
            (Some(method), None) => {
                debug!("Received notification: {}", method);

                match method.as_str() {
                    "notifications/initialized" | "initialized" => {
                        info!("Client initialized");
                    }
                    "notifications/cancelled" => {
                        debug!("Request cancelled");
                    }
                    _ => {
                        debug!("Unknown notification: {}", method);
                    }
                }

                None
            }
            (None, id) => Some(McpMessage::error_response(id, McpError::invalid_request())),
        }
    }

    /// Handle initialize request
    async fn handle_initialize(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: InitializeParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        info!(
            "Initializing session with client: {} v{} (protocol {})",
            params.client_info.name, params.client_info.version, params.protocol_version
        );

        let result = InitializeResult {
            protocol_version: negotiate_version(&params.protocol_version).to_string(),
            capabilities: ServerCapabilities::with_tools(),
            server_info: ServerInfo {
                name: self.server_name.clone(),
                version: self.server_version.clone(),
            },
        };

        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    /// Handle ping request
    async fn handle_ping(&self) -> Result<Value, McpError> {
        Ok(serde_json::json!({}))
    }

    /// Handle tools/list request
    async fn handle_tools_list(&self) -> Result<Value, McpError> {
        let result = ToolsListResult {
            tools: self.tool_generator.generate_tools(),
        };
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    /// Handle tools/call request
    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ToolCallParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        debug!("Calling tool: {}", params.name);

        let result = self
            .tool_executor
            .execute(&params.name, params.arguments)
            .await;

        match result {
            Ok(tool_result) => {
                serde_json::to_value(tool_result).map_err(|e| McpError::internal_error(e.to_string()))
            }
            Err(e) => {
                if e.is_client_error() {
                    warn!("Tool {} rejected call: {}", params.name, e);
                } else {
                    error!("Tool execution failed: {}", e);
                }
                let error_result =
                    ToolCallResult::error(format!("Error executing tool {}: {}", params.name, e));
                serde_json::to_value(error_result).map_err(|e| McpError::internal_error(e.to_string()))
            }
        }
    }
}

impl Default for RequestHandler {
    fn default() -> Self {
        Self::new()
    }
}
