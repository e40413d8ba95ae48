//! MCP tool definitions

use crate::protocol::{McpInputSchema, McpTool};
use serde_json::{json, Map, Value};

use super::executor::{
    BORDER_RANGE, BOX_SIZE_RANGE, DEFAULT_BACK_COLOR, DEFAULT_BORDER, DEFAULT_BOX_SIZE,
    DEFAULT_FILL_COLOR,
};

/// Name of the QR generation tool
pub const GENERATE_QR_CODE: &str = "generate_qr_code";

/// A single argument of a tool's input schema
struct ToolParameter {
    name: &'static str,
    schema: Value,
    description: &'static str,
    required: bool,
}

/// Generator for the server's MCP tool definitions
pub struct ToolGenerator;

impl ToolGenerator {
    /// Create a new tool generator
    pub fn new() -> Self {
        Self
    }

    /// All tools exposed by this server
    pub fn generate_tools(&self) -> Vec<McpTool> {
        vec![self.generate_qr_tool()]
    }

    /// Definition of `generate_qr_code`
    pub fn generate_qr_tool(&self) -> McpTool {
        let parameters = [
            ToolParameter {
                name: "text",
                schema: json!({"type": "string"}),
                description: "Text content to convert to QR code",
                required: true,
            },
            ToolParameter {
                name: "box_size",
                schema: json!({
                    "type": "integer",
                    "default": DEFAULT_BOX_SIZE,
                    "minimum": BOX_SIZE_RANGE.start(),
                    "maximum": BOX_SIZE_RANGE.end(),
                }),
                description: "Size of each box in pixels (1-50)",
                required: false,
            },
            ToolParameter {
                name: "border",
                schema: json!({
                    "type": "integer",
                    "default": DEFAULT_BORDER,
                    "minimum": BORDER_RANGE.start(),
                    "maximum": BORDER_RANGE.end(),
                }),
                description: "Number of boxes for border (0-20)",
                required: false,
            },
            ToolParameter {
                name: "fill_color",
                schema: json!({"type": "string", "default": DEFAULT_FILL_COLOR}),
                description: "Foreground color",
                required: false,
            },
            ToolParameter {
                name: "back_color",
                schema: json!({"type": "string", "default": DEFAULT_BACK_COLOR}),
                description: "Background color",
                required: false,
            },
        ];

        McpTool {
            name: GENERATE_QR_CODE.to_string(),
            description: Some(
                "Generate QR code from text and return it as a JPEG image.".to_string(),
            ),
            input_schema: self.build_input_schema(&parameters),
        }
    }

    /// Build JSON Schema for tool inputs
    fn build_input_schema(&self, parameters: &[ToolParameter]) -> McpInputSchema {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in parameters {
            self.add_parameter(&mut properties, &mut required, param);
        }

        McpInputSchema {
            schema_type: "object".to_string(),
            properties: if properties.is_empty() { None } else { Some(properties) },
            required: if required.is_empty() { None } else { Some(required) },
        }
    }

    /// Add a parameter to the schema
    fn add_parameter(
        &self,
        properties: &mut Map<String, Value>,
        required: &mut Vec<String>,
        param: &ToolParameter,
    ) {
        let mut prop = param.schema.as_object().cloned().unwrap_or_default();
        prop.insert("title".to_string(), json!(title_case(param.name)));
        prop.insert("description".to_string(), json!(param.description));

        properties.insert(param.name.to_string(), Value::Object(prop));

        if param.required {
            required.push(param.name.to_string());
        }
    }
}

impl Default for ToolGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// `box_size` -> `Box Size`
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tool() {
        let tools = ToolGenerator::new().generate_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "generate_qr_code");
    }

    #[test]
    fn test_input_schema() {
        let tool = ToolGenerator::new().generate_qr_tool();

        let props = tool.input_schema.properties.as_ref().unwrap();
        for key in ["text", "box_size", "border", "fill_color", "back_color"] {
            assert!(props.contains_key(key), "missing {}", key);
        }
        assert_eq!(props["box_size"]["default"], json!(10));
        assert_eq!(props["box_size"]["maximum"], json!(50));
        assert_eq!(props["border"]["minimum"], json!(0));
        assert_eq!(props["fill_color"]["default"], json!("black"));
        assert_eq!(props["box_size"]["title"], json!("Box Size"));

        let required = tool.input_schema.required.as_ref().unwrap();
        assert_eq!(required, &vec!["text".to_string()]);
    }
}
