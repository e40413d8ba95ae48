//! HTTP smoke test against a running server
//!
//! Start the server first:
//!   cargo run -p mcp-server --bin qrcode-mcp-server -- --http
//! then run:
//!   cargo run --example http_client [-- http://127.0.0.1:8008/mcp]
//!
//! The generated image is written to `./qr_output/http_qr.png`.

use anyhow::{bail, Context};
use qr_core::{save_qr_base64_to_file, OutputFormat};
use serde_json::{json, Value};

const DEFAULT_URL: &str = "http://127.0.0.1:8008/mcp";

async fn call(client: &reqwest::Client, url: &str, message: Value) -> anyhow::Result<Value> {
    let response = client
        .post(url)
        .header("Accept", "application/json, text/event-stream")
        .json(&message)
        .send()
        .await
        .with_context(|| format!("POST {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("server returned {}", status);
    }
    Ok(response.json().await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_URL.to_string());
    let client = reqwest::Client::new();

    println!("Connecting to {}", url);

    let init = call(
        &client,
        &url,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-06-18",
                "capabilities": {},
                "clientInfo": {"name": "http-client", "version": "1.0.0"}
            }
        }),
    )
    .await?;
    println!("Session initialized: {}", init["result"]["serverInfo"]);

    client
        .post(&url)
        .json(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
        .send()
        .await?;

    let tools = call(&client, &url, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await?;
    let names: Vec<&str> = tools["result"]["tools"]
        .as_array()
        .map(|tools| tools.iter().filter_map(|t| t["name"].as_str()).collect())
        .unwrap_or_default();
    println!("Available tools: {:?}", names);

    let result = call(
        &client,
        &url,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "generate_qr_code",
                "arguments": {"text": "Hello MCP World!", "box_size": 10, "border": 4}
            }
        }),
    )
    .await?;

    let content = &result["result"]["content"][0];
    if result["result"]["isError"] == json!(true) {
        bail!("tool failed: {}", content["text"]);
    }
    println!("QR code generated, content type: {}", content["type"]);

    let data = content["data"].as_str().context("missing image data")?;
    std::fs::create_dir_all("qr_output")?;
    save_qr_base64_to_file(data, "qr_output/http_qr.png", OutputFormat::Png)?;
    println!("Saved qr_output/http_qr.png");

    Ok(())
}
