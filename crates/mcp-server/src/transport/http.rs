//! HTTP transport for MCP
//!
//! Each POST to `/mcp` carries one JSON-RPC message and gets the response
//! back as a JSON body. No SSE stream is offered.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::protocol::{McpError, McpMessage, RequestHandler};

/// HTTP transport for MCP protocol
pub struct HttpTransport {
    handler: Arc<RequestHandler>,
    host: String,
    port: u16,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(handler: Arc<RequestHandler>, host: impl Into<String>, port: u16) -> Self {
        Self {
            handler,
            host: host.into(),
            port,
        }
    }

    /// Bind the listening socket. Hostnames such as `localhost` are resolved here.
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }

    /// Run the HTTP server
    pub async fn run(&self) -> std::io::Result<()> {
        let app = router(self.handler.clone());

        let listener = self.bind().await?;
        info!("Starting MCP HTTP server on http://{}/mcp", listener.local_addr()?);

        axum::serve(listener, app).await
    }
}

/// Build the axum router serving MCP on `/mcp`
pub fn router(handler: Arc<RequestHandler>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/mcp", post(handle_mcp_request).get(handle_mcp_stream))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(handler)
}

/// Health check endpoint
async fn health() -> &'static str {
    "OK"
}

/// Handle MCP JSON-RPC request via HTTP POST
async fn handle_mcp_request(
    State(handler): State<Arc<RequestHandler>>,
    payload: Result<Json<McpMessage>, JsonRejection>,
) -> Response {
    let message = match payload {
        Ok(Json(message)) => message,
        Err(rejection) => {
            warn!("Rejected HTTP request body: {}", rejection);
            let error = McpMessage::error_response(None, McpError::parse_error());
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    debug!("HTTP request: {:?}", message.method);

    match handler.handle(message).await {
        Some(response) => Json(response).into_response(),
        // Notifications and client responses are acknowledged without a body
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Server-initiated streams are not offered
async fn handle_mcp_stream() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
