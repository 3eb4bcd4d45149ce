//! Capability negotiation during initialization.

use crate::types::{
    ClientCapabilities, Implementation, InitializeParams, InitializeResult, McpResult, MCP_VERSION,
};

/// Protocol revisions this server answers in kind.
pub const SUPPORTED_VERSIONS: &[&str] = &[MCP_VERSION, "2025-03-26"];

/// What the client told us during the handshake.
#[derive(Debug, Clone, Default)]
pub struct NegotiatedCapabilities {
    pub client: ClientCapabilities,
    pub client_info: Option<Implementation>,
    pub protocol_version: Option<String>,
    pub initialized: bool,
}

impl NegotiatedCapabilities {
    pub fn negotiate(&mut self, params: InitializeParams) -> McpResult<InitializeResult> {
        let mut result = InitializeResult::default_result();

        if SUPPORTED_VERSIONS.contains(&params.protocol_version.as_str()) {
            result.protocol_version = params.protocol_version.clone();
        } else {
            tracing::warn!(
                "Client requested protocol version {}, answering with {}",
                params.protocol_version,
                MCP_VERSION
            );
        }

        tracing::info!(
            "Initialized with client: {} v{}",
            params.client_info.name,
            params.client_info.version
        );

        self.client = params.capabilities;
        self.client_info = Some(params.client_info);
        self.protocol_version = Some(result.protocol_version.clone());

        Ok(result)
    }

    pub fn mark_initialized(&mut self) -> McpResult<()> {
        if self.protocol_version.is_none() {
            tracing::warn!("Client sent initialized before initialize");
        }
        self.initialized = true;
        tracing::info!("MCP handshake complete");
        Ok(())
    }
}
