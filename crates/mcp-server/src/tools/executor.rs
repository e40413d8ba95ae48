//! Execute MCP tools against qr-core

use std::ops::RangeInclusive;

use qr_core::{text_to_qr_base64, Color, OutputFormat, QrOptions};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::error::ToolError;
use super::generator::GENERATE_QR_CODE;
use crate::protocol::ToolCallResult;

pub const DEFAULT_BOX_SIZE: i64 = 10;
pub const DEFAULT_BORDER: i64 = 4;
pub const DEFAULT_FILL_COLOR: &str = "black";
pub const DEFAULT_BACK_COLOR: &str = "white";

pub const BOX_SIZE_RANGE: RangeInclusive<i64> = 1..=50;
pub const BORDER_RANGE: RangeInclusive<i64> = 0..=20;

/// Image format returned by `generate_qr_code`
const TOOL_OUTPUT_FORMAT: OutputFormat = OutputFormat::Jpeg;

/// Arguments of `generate_qr_code`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQrArgs {
    pub text: String,
    #[serde(default = "default_box_size")]
    pub box_size: i64,
    #[serde(default = "default_border")]
    pub border: i64,
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
    #[serde(default = "default_back_color")]
    pub back_color: String,
}

fn default_box_size() -> i64 {
    DEFAULT_BOX_SIZE
}

fn default_border() -> i64 {
    DEFAULT_BORDER
}

fn default_fill_color() -> String {
    DEFAULT_FILL_COLOR.to_string()
}

fn default_back_color() -> String {
    DEFAULT_BACK_COLOR.to_string()
}

impl GenerateQrArgs {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            fill_color: default_fill_color(),
            back_color: default_back_color(),
        }
    }

    /// Parse tool arguments; missing arguments are treated as an empty object
    pub fn from_arguments(arguments: Option<Value>) -> Result<Self, ToolError> {
        let args = arguments.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        serde_json::from_value(args)
            .map_err(|e| ToolError::InvalidArguments(format!("Invalid arguments: {}", e)))
    }

    /// Range checks, run before any encoding is attempted
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.text.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "Text content cannot be empty".to_string(),
            ));
        }

        if !BOX_SIZE_RANGE.contains(&self.box_size) {
            return Err(ToolError::InvalidArguments(format!(
                "box_size must be between {} and {}",
                BOX_SIZE_RANGE.start(),
                BOX_SIZE_RANGE.end()
            )));
        }

        if !BORDER_RANGE.contains(&self.border) {
            return Err(ToolError::InvalidArguments(format!(
                "border must be between {} and {}",
                BORDER_RANGE.start(),
                BORDER_RANGE.end()
            )));
        }

        Ok(())
    }

    /// Encoder options for validated arguments
    fn to_options(&self) -> Result<QrOptions, ToolError> {
        let fill_color: Color = self.fill_color.parse()?;
        let back_color: Color = self.back_color.parse()?;

        // Ranges checked in `validate`
        let box_size = u32::try_from(self.box_size)
            .map_err(|_| ToolError::InvalidArguments("box_size out of range".to_string()))?;
        let border = u32::try_from(self.border)
            .map_err(|_| ToolError::InvalidArguments("border out of range".to_string()))?;

        Ok(QrOptions::default()
            .with_box_size(box_size)
            .with_border(border)
            .with_fill_color(fill_color)
            .with_back_color(back_color)
            .with_format(TOOL_OUTPUT_FORMAT))
    }
}

/// Executor for MCP tools
#[derive(Debug, Clone, Default)]
pub struct ToolExecutor;

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new() -> Self {
        Self
    }

    /// Execute a tool by name
    pub async fn execute(
        &self,
        tool_name: &str,
        arguments: Option<Value>,
    ) -> Result<ToolCallResult, ToolError> {
        match tool_name {
            GENERATE_QR_CODE => {
                let args = GenerateQrArgs::from_arguments(arguments)?;
                self.generate_qr_code(args).await
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    /// Validate arguments, then render the QR code as a JPEG image result
    pub async fn generate_qr_code(&self, args: GenerateQrArgs) -> Result<ToolCallResult, ToolError> {
        args.validate()?;

        debug!(
            "Generating QR code: {} chars, box_size={}, border={}",
            args.text.chars().count(),
            args.box_size,
            args.border
        );

        // Rendering is CPU-bound; keep it off the async workers.
        let encoded = tokio::task::spawn_blocking(move || -> Result<String, ToolError> {
            let options = args.to_options()?;
            Ok(text_to_qr_base64(&args.text, &options)?)
        })
        .await
        .map_err(|e| ToolError::Internal(e.to_string()))?;

        match encoded {
            Ok(data) => Ok(ToolCallResult::image(data, TOOL_OUTPUT_FORMAT.mime_type())),
            Err(e) => {
                error!("Failed to generate QR code: {}", e);
                Err(e)
            }
        }
    }
}
