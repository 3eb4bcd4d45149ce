//! Newline-delimited JSON framing.

use serde_json::Value;

use crate::types::{JsonRpcMessage, McpError, McpResult, RequestId};

/// Parse a single line of text as a JSON-RPC message.
pub fn parse_message(line: &str) -> McpResult<JsonRpcMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(McpError::ParseError("Empty message".to_string()));
    }

    serde_json::from_str(trimmed).map_err(|e| McpError::ParseError(e.to_string()))
}

/// Serialize a value to one line, newline included.
pub fn frame_message(value: &Value) -> McpResult<String> {
    let mut json = serde_json::to_string(value).map_err(McpError::Json)?;
    json.push('\n');
    Ok(json)
}

/// Error reply for a line that could not be read as a message.
pub fn parse_error_response(error: &McpError) -> McpResult<Value> {
    serde_json::to_value(error.to_json_rpc_error(RequestId::Null)).map_err(McpError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request() {
        let msg = parse_message(r#" {"jsonrpc":"2.0","id":1,"method":"ping"} "#).unwrap();
        assert!(matches!(msg, JsonRpcMessage::Request(_)));
    }

    #[test]
    fn test_parse_notification() {
        let msg = parse_message(r#"{"jsonrpc":"2.0","method":"initialized"}"#).unwrap();
        assert!(matches!(msg, JsonRpcMessage::Notification(_)));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse_message("{"), Err(McpError::ParseError(_))));
        assert!(matches!(parse_message("   "), Err(McpError::ParseError(_))));
    }

    #[test]
    fn test_frame_is_single_line() {
        let framed = frame_message(&json!({ "text": "a\nb" })).unwrap();
        assert!(framed.ends_with('\n'));
        assert_eq!(framed.matches('\n').count(), 1);
    }

    #[test]
    fn test_parse_error_response() {
        let value = parse_error_response(&McpError::ParseError("bad".to_string())).unwrap();
        assert_eq!(value["id"], json!(null));
        assert_eq!(value["error"]["code"], json!(-32700));
    }
}
