//! Tool registration and dispatch.

use std::sync::Arc;

use serde_json::Value;

use crate::service::WeatherService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::whistler_weather;

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![whistler_weather::definition()]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        service: &Arc<WeatherService>,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            whistler_weather::NAME => whistler_weather::execute(args, service).await,
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}
