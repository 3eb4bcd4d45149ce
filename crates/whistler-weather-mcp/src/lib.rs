//! Whistler Weather MCP Server: Whistler Blackcomb conditions for LLM agents.

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod service;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::{resolve_response_mode, resolve_timeout, ResponseMode};
pub use protocol::ProtocolHandler;
pub use service::WeatherService;
pub use transport::StdioTransport;
