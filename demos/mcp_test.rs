//! MCP Protocol Test - drives the request handler with simulated messages
//!
//! Run with: cargo run --example mcp_test

use mcp_server::protocol::{McpMessage, RequestHandler};

async fn exchange(
    handler: &RequestHandler,
    label: &str,
    request: McpMessage,
) -> Result<Option<McpMessage>, Box<dyn std::error::Error>> {
    println!("{}", label);
    println!("   Request:  {}", serde_json::to_string(&request)?);

    let response = handler.handle(request).await;
    match &response {
        Some(response) => {
            let mut shown = serde_json::to_value(response)?;
            // Base64 image payloads are long; show only the head
            if let Some(data) = shown.pointer_mut("/result/content/0/data") {
                let summary = data
                    .as_str()
                    .map(|s| format!("{}... ({} chars)", &s[..s.len().min(40)], s.len()));
                if let Some(summary) = summary {
                    *data = serde_json::json!(summary);
                }
            }
            println!("   Response: {}", serde_json::to_string_pretty(&shown)?);
        }
        None => println!("   (no response)"),
    }
    println!();

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== MCP Protocol Test ===\n");

    let handler = RequestHandler::new();

    exchange(
        &handler,
        "1. Testing 'initialize' method:",
        McpMessage::request(
            1,
            "initialize",
            Some(serde_json::json!({
                "protocolVersion": "2025-06-18",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "1.0.0"
                }
            })),
        ),
    )
    .await?;

    exchange(
        &handler,
        "2. Testing 'notifications/initialized':",
        McpMessage::notification("notifications/initialized", None),
    )
    .await?;

    exchange(
        &handler,
        "3. Testing 'tools/list' method:",
        McpMessage::request(2, "tools/list", None),
    )
    .await?;

    exchange(
        &handler,
        "4. Testing 'tools/call' method:",
        McpMessage::request(
            3,
            "tools/call",
            Some(serde_json::json!({
                "name": "generate_qr_code",
                "arguments": {"text": "Hello MCP World!", "box_size": 10, "border": 4}
            })),
        ),
    )
    .await?;

    exchange(
        &handler,
        "5. Testing 'tools/call' with out-of-range box_size (should be a tool error):",
        McpMessage::request(
            4,
            "tools/call",
            Some(serde_json::json!({
                "name": "generate_qr_code",
                "arguments": {"text": "Hello", "box_size": 99}
            })),
        ),
    )
    .await?;

    exchange(
        &handler,
        "6. Testing unknown method (should return error):",
        McpMessage::request(5, "unknown/method", None),
    )
    .await?;

    println!("=== Test Complete ===");

    Ok(())
}
