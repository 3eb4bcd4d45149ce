//! Prompt registration and dispatch.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult};

use super::ski_briefing;

pub struct PromptRegistry;

impl PromptRegistry {
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![PromptDefinition {
            name: ski_briefing::NAME.to_string(),
            description: Some(
                "Guide for summarising today's conditions into a ski day plan".to_string(),
            ),
            arguments: Some(vec![PromptArgument {
                name: "zone".to_string(),
                description: Some("Optional zone to focus on: alpine or village".to_string()),
                required: false,
            }]),
        }]
    }

    pub async fn get(name: &str, arguments: Option<Value>) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            ski_briefing::NAME => ski_briefing::expand(args),
            _ => Err(McpError::PromptNotFound(name.to_string())),
        }
    }
}
