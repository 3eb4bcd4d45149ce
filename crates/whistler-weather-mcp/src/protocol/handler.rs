//! Main request dispatcher: receives JSON-RPC messages, routes to handlers.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::prompts::PromptRegistry;
use crate::resources::ResourceRegistry;
use crate::service::WeatherService;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::negotiation::NegotiatedCapabilities;
use super::validator::validate_request;

/// The main protocol handler that dispatches incoming JSON-RPC messages.
#[derive(Clone)]
pub struct ProtocolHandler {
    service: Arc<WeatherService>,
    capabilities: Arc<Mutex<NegotiatedCapabilities>>,
}

impl ProtocolHandler {
    pub fn new(service: Arc<WeatherService>) -> Self {
        Self {
            service,
            capabilities: Arc::new(Mutex::new(NegotiatedCapabilities::default())),
        }
    }

    pub fn service(&self) -> &Arc<WeatherService> {
        &self.service
    }

    pub async fn handle_message(&self, msg: JsonRpcMessage) -> Option<Value> {
        match msg {
            JsonRpcMessage::Request(req) => Some(self.handle_request(req).await),
            JsonRpcMessage::Notification(notif) => {
                self.handle_notification(notif).await;
                None
            }
            _ => {
                tracing::warn!("Received unexpected message type from client");
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Value {
        if let Err(e) = validate_request(&request) {
            return serde_json::to_value(e.to_json_rpc_error(request.id)).unwrap_or_default();
        }

        let id = request.id.clone();
        tracing::debug!("Request {id}: {}", request.method);

        match self.dispatch_request(&request).await {
            Ok(value) => serde_json::to_value(JsonRpcResponse::new(id, value)).unwrap_or_default(),
            Err(e) => {
                tracing::debug!("Request {id} failed: {e}");
                serde_json::to_value(e.to_json_rpc_error(id)).unwrap_or_default()
            }
        }
    }

    async fn dispatch_request(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params.clone()).await,
            "shutdown" => self.handle_shutdown().await,

            "tools/list" => to_result(ToolListResult {
                tools: ToolRegistry::list_tools(),
                next_cursor: None,
            }),
            "tools/call" => self.handle_tools_call(request.params.clone()).await,

            "resources/list" => to_result(ResourceListResult {
                resources: ResourceRegistry::list_resources(),
                next_cursor: None,
            }),
            "resources/templates/list" => to_result(ResourceTemplateListResult {
                resource_templates: ResourceRegistry::list_templates(),
            }),
            "resources/read" => self.handle_resources_read(request.params.clone()),
            "resources/subscribe" => Ok(Value::Object(serde_json::Map::new())),
            "resources/unsubscribe" => Ok(Value::Object(serde_json::Map::new())),

            "prompts/list" => to_result(PromptListResult {
                prompts: PromptRegistry::list_prompts(),
            }),
            "prompts/get" => self.handle_prompts_get(request.params.clone()).await,

            "ping" => Ok(Value::Object(serde_json::Map::new())),

            _ => Err(McpError::MethodNotFound(request.method.clone())),
        }
    }

    async fn handle_notification(&self, notification: JsonRpcNotification) {
        match notification.method.as_str() {
            "initialized" | "notifications/initialized" => {
                let mut caps = self.capabilities.lock().await;
                if let Err(e) = caps.mark_initialized() {
                    tracing::error!("Failed to mark initialized: {e}");
                }
            }
            "notifications/cancelled" | "$/cancelRequest" => {
                tracing::info!("Received cancellation notification");
            }
            _ => {
                tracing::debug!("Unknown notification: {}", notification.method);
            }
        }
    }

    async fn handle_initialize(&self, params: Option<Value>) -> McpResult<Value> {
        let init_params: InitializeParams = required_params(params, "Initialize")?;

        let mut caps = self.capabilities.lock().await;
        let result = caps.negotiate(init_params)?;
        to_result(result)
    }

    async fn handle_shutdown(&self) -> McpResult<Value> {
        tracing::info!("Shutdown requested");
        Ok(Value::Object(serde_json::Map::new()))
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> McpResult<Value> {
        let call_params: ToolCallParams = required_params(params, "Tool call")?;

        let result =
            ToolRegistry::call(&call_params.name, call_params.arguments, &self.service).await?;
        to_result(result)
    }

    fn handle_resources_read(&self, params: Option<Value>) -> McpResult<Value> {
        let read_params: ResourceReadParams = required_params(params, "Resource read")?;
        to_result(ResourceRegistry::read(&read_params.uri)?)
    }

    async fn handle_prompts_get(&self, params: Option<Value>) -> McpResult<Value> {
        let get_params: PromptGetParams = required_params(params, "Prompt get")?;

        let result = PromptRegistry::get(&get_params.name, get_params.arguments).await?;
        to_result(result)
    }
}

fn required_params<T: serde::de::DeserializeOwned>(
    params: Option<Value>,
    what: &str,
) -> McpResult<T> {
    params
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError::InvalidParams(e.to_string()))?
        .ok_or_else(|| McpError::InvalidParams(format!("{what} params required")))
}

fn to_result(value: impl Serialize) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}
