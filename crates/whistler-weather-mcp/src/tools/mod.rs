//! MCP tool implementations.

pub mod registry;
pub mod whistler_weather;

pub use registry::ToolRegistry;
