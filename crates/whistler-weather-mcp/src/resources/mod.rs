//! MCP resource implementations.

pub mod discovery;
pub mod registry;
pub mod templates;

pub use registry::ResourceRegistry;
