//! QR Code MCP server - exposes `generate_qr_code` to MCP clients
//!
//! Runs over stdio by default. Pass `--http` to serve on
//! `http://HOST:PORT/mcp` instead.

use clap::Parser;
use tracing::info;

use mcp_server::{McpServer, ServerMode, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};

/// QR Code MCP server - generate QR code images via MCP
#[derive(Parser, Debug)]
#[command(name = "qrcode-mcp-server")]
#[command(version)]
#[command(about = "QR Code MCP server - generate QR code images via MCP")]
struct Args {
    /// Run in stdio mode (for MCP clients like Claude Desktop); this is the default
    #[arg(long, conflicts_with = "http")]
    stdio: bool,

    /// Run in HTTP mode
    #[arg(long)]
    http: bool,

    /// Host (IP address or hostname) to bind the HTTP server to
    #[arg(long, env = "QRCODE_MCP_HOST", default_value = DEFAULT_HTTP_HOST)]
    host: String,

    /// Port for the HTTP server
    #[arg(long, env = "QRCODE_MCP_PORT", default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,
}

impl Args {
    fn mode(&self) -> ServerMode {
        if self.http {
            ServerMode::Http {
                host: self.host.clone(),
                port: self.port,
            }
        } else {
            ServerMode::Stdio
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the stdio protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let server = McpServer::new().with_mode(args.mode());

    match server.mode() {
        ServerMode::Stdio => info!("QR code MCP server starting (stdio transport)"),
        ServerMode::Http { host, port } => {
            info!("QR code MCP server starting (HTTP transport) - {}:{}", host, port)
        }
    }

    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stdio() {
        let args = Args::try_parse_from(["qrcode-mcp-server"]).unwrap();
        assert_eq!(args.mode(), ServerMode::Stdio);
    }

    #[test]
    fn test_http_defaults() {
        let args = Args::try_parse_from(["qrcode-mcp-server", "--http"]).unwrap();
        assert_eq!(
            args.mode(),
            ServerMode::Http {
                host: "127.0.0.1".to_string(),
                port: 8008,
            }
        );
    }

    #[test]
    fn test_http_host_and_port() {
        let args = Args::try_parse_from([
            "qrcode-mcp-server",
            "--http",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(
            args.mode(),
            ServerMode::Http {
                host: "0.0.0.0".to_string(),
                port: 9000,
            }
        );
    }

    #[test]
    fn test_http_hostname() {
        let args =
            Args::try_parse_from(["qrcode-mcp-server", "--http", "--host", "localhost"]).unwrap();
        assert_eq!(
            args.mode(),
            ServerMode::Http {
                host: "localhost".to_string(),
                port: 8008,
            }
        );
    }

    #[test]
    fn test_stdio_and_http_conflict() {
        assert!(Args::try_parse_from(["qrcode-mcp-server", "--stdio", "--http"]).is_err());
    }
}
