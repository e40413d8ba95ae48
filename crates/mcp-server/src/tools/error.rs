//! Tool invocation errors

use qr_core::QrError;
use thiserror::Error;

/// Error raised while executing an MCP tool
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed to parse or were out of range
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Failed to generate QR code: {0}")]
    Failed(#[from] QrError),

    #[error("Failed to generate QR code: {0}")]
    Internal(String),
}

impl ToolError {
    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::UnknownTool(_) | Self::InvalidArguments(_) => true,
            Self::Failed(e) => e.is_invalid_input(),
            Self::Internal(_) => false,
        }
    }
}
