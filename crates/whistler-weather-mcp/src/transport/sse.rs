//! HTTP transport: JSON-RPC over POST /mcp, plus /health.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::protocol::ProtocolHandler;
use crate::types::{JsonRpcMessage, McpError, McpResult, RequestId};

/// Shared server state passed to all handlers via axum State.
pub struct ServerState {
    pub handler: Arc<ProtocolHandler>,
}

/// HTTP transport for web-based MCP clients.
pub struct SseTransport {
    state: Arc<ServerState>,
}

impl SseTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            state: Arc::new(ServerState {
                handler: Arc::new(handler),
            }),
        }
    }

    /// The routes served by [`run`](Self::run).
    pub fn router(&self) -> Router {
        Router::new()
            .route("/mcp", post(handle_request))
            .route("/health", get(handle_health))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(McpError::Io)?;

        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))
    }
}

fn rpc_error(status: StatusCode, error: McpError) -> Response {
    let body = serde_json::to_value(error.to_json_rpc_error(RequestId::Null)).unwrap_or_default();
    (status, AxumJson(body)).into_response()
}

async fn handle_request(State(state): State<Arc<ServerState>>, body: String) -> Response {
    let msg: JsonRpcMessage = match serde_json::from_str(&body) {
        Ok(msg) => msg,
        Err(e) => return rpc_error(StatusCode::BAD_REQUEST, McpError::ParseError(e.to_string())),
    };

    match state.handler.handle_message(msg).await {
        Some(response) => AxumJson(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn handle_health(State(state): State<Arc<ServerState>>) -> AxumJson<Value> {
    let service = state.handler.service();
    AxumJson(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream": service.pipeline().url(),
        "response_mode": service.mode().to_string(),
    }))
}
