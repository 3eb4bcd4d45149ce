//! JSON-RPC request validation.

use crate::types::{JsonRpcRequest, McpError, McpResult, RequestId, JSONRPC_VERSION};

/// Reject requests that are not well-formed JSON-RPC 2.0.
pub fn validate_request(request: &JsonRpcRequest) -> McpResult<()> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(McpError::InvalidRequest(format!(
            "Expected jsonrpc version \"{JSONRPC_VERSION}\", got \"{}\"",
            request.jsonrpc
        )));
    }

    if request.id == RequestId::Null {
        return Err(McpError::InvalidRequest(
            "Request id must not be null".to_string(),
        ));
    }

    if request.method.trim().is_empty() {
        return Err(McpError::InvalidRequest(
            "Method name must not be empty".to_string(),
        ));
    }

    if request.method.starts_with("rpc.") {
        return Err(McpError::InvalidRequest(format!(
            "Method names starting with \"rpc.\" are reserved: {}",
            request.method
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(jsonrpc: &str, id: RequestId, method: &str) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: jsonrpc.to_string(),
            id,
            method: method.to_string(),
            params: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&request("2.0", RequestId::Number(1), "ping")).is_ok());
    }

    #[test]
    fn test_rejections() {
        assert!(validate_request(&request("1.0", RequestId::Number(1), "ping")).is_err());
        assert!(validate_request(&request("2.0", RequestId::Null, "ping")).is_err());
        assert!(validate_request(&request("2.0", RequestId::Number(1), " ")).is_err());
        assert!(validate_request(&request("2.0", RequestId::Number(1), "rpc.discover")).is_err());
    }
}
