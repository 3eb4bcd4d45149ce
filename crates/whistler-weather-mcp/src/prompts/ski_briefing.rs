//! Prompt: ski_briefing. Guide for turning the weather report into a ski day plan.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptGetResult, PromptMessage, ToolContent};

pub const NAME: &str = "ski_briefing";

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let zone = match args.get("zone") {
        None | Some(Value::Null) => None,
        Some(Value::String(z)) => match z.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "alpine" => Some("alpine"),
            "village" => Some("village"),
            other => {
                return Err(McpError::InvalidParams(format!(
                    "zone must be \"alpine\" or \"village\", got \"{other}\""
                )))
            }
        },
        Some(_) => {
            return Err(McpError::InvalidParams(
                "zone must be a string".to_string(),
            ))
        }
    };

    let focus = match zone {
        Some("alpine") => "\nFocus on the alpine forecast (alpineForecast).\n",
        Some(_) => "\nFocus on the village forecast (villageForecast).\n",
        None => "",
    };

    let text = format!(
        "I'm planning a ski day at Whistler Blackcomb.\n\
         {focus}\n\
         Please:\n\
         1. Use whistler_weather to fetch the latest report\n\
         2. Summarise current temperature, highs and lows, and wind\n\
         3. Note fresh snow (day and night) and the freezing level\n\
         4. Walk through the multi-day breakdown in ForecastData\n\
         5. If the report carries an error, say so rather than guessing"
    );

    Ok(PromptGetResult {
        description: Some("Guide for a Whistler Blackcomb ski briefing".to_string()),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_without_zone() {
        let result = expand(json!({})).unwrap();
        let text = result.messages[0].content.as_text();
        assert!(text.contains("whistler_weather"));
        assert!(!text.contains("Focus on"));
    }

    #[test]
    fn test_alpine_zone() {
        let result = expand(json!({ "zone": "Alpine" })).unwrap();
        assert!(result.messages[0].content.as_text().contains("alpineForecast"));
    }

    #[test]
    fn test_invalid_zone() {
        assert!(expand(json!({ "zone": "peak" })).is_err());
        assert!(expand(json!({ "zone": 3 })).is_err());
    }
}
