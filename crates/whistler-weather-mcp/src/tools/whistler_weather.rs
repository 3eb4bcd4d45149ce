//! Tool: whistler_weather. Fetch the latest Whistler Blackcomb conditions.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::service::WeatherService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

pub const NAME: &str = "whistler_weather";

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: Some(
            "Fetches the latest weather data from Whistler Blackcomb: alpine and village \
             forecasts with multi-day breakdowns"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<WeatherService>) -> McpResult<ToolCallResult> {
    if !args.is_object() {
        return Err(McpError::InvalidParams(
            "whistler_weather takes no arguments".to_string(),
        ));
    }

    tracing::debug!("Running {NAME} ({} mode)", service.mode());
    Ok(service.weather().await)
}
