//! MCP prompt implementations.

pub mod registry;
pub mod ski_briefing;

pub use registry::PromptRegistry;
