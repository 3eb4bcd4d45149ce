//! Static resource definitions.

use crate::types::ResourceDefinition;

pub const VERSION_URI: &str = "whistler://version";
pub const CATEGORIES_URI: &str = "whistler://categories";

pub fn list_resources() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: VERSION_URI.to_string(),
            name: "Server Version".to_string(),
            description: Some("Version string of this weather server".to_string()),
            mime_type: Some("text/plain".to_string()),
        },
        ResourceDefinition {
            uri: CATEGORIES_URI.to_string(),
            name: "Categories".to_string(),
            description: Some("Categories of data this server provides".to_string()),
            mime_type: Some("application/json".to_string()),
        },
    ]
}
