//! # mcp-server
//!
//! MCP (Model Context Protocol) server exposing QR code generation as the
//! `generate_qr_code` tool. Supports both stdio and HTTP transports.

pub mod protocol;
mod server;
pub mod tools;
pub mod transport;

pub use protocol::{McpError, McpMessage, RequestHandler, ServerCapabilities};
pub use server::{McpServer, ServerMode, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
pub use tools::{GenerateQrArgs, ToolError, ToolExecutor, ToolGenerator};
pub use transport::{HttpTransport, StdioTransport};
