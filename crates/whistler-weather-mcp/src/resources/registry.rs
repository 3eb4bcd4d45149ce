//! Resource registration and dispatch.

use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition,
};

use super::{discovery, templates};

pub struct ResourceRegistry;

impl ResourceRegistry {
    /// No parameterised resources are offered.
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        Vec::new()
    }

    pub fn list_resources() -> Vec<ResourceDefinition> {
        templates::list_resources()
    }

    pub fn read(uri: &str) -> McpResult<ReadResourceResult> {
        match uri {
            templates::VERSION_URI => Ok(discovery::read_version()),
            templates::CATEGORIES_URI => Ok(discovery::read_categories()),
            _ => Err(McpError::ResourceNotFound(uri.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_resource_is_readable() {
        for resource in ResourceRegistry::list_resources() {
            let result = ResourceRegistry::read(&resource.uri).unwrap();
            assert_eq!(result.contents[0].uri, resource.uri);
            assert_eq!(result.contents[0].mime_type, resource.mime_type);
        }
    }

    #[test]
    fn test_categories_content() {
        let result = ResourceRegistry::read("whistler://categories").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(result.contents[0].text.as_deref().unwrap()).unwrap();
        assert_eq!(value["categories"][0], "weather");
    }

    #[test]
    fn test_unknown_resource() {
        let err = ResourceRegistry::read("whistler://history").unwrap_err();
        assert!(matches!(err, McpError::ResourceNotFound(_)));
    }
}
