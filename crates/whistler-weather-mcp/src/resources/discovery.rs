//! Resources: whistler://version and whistler://categories

use serde_json::json;

use crate::types::{pretty, ReadResourceResult, ResourceContent, SERVER_VERSION};

use super::templates::{CATEGORIES_URI, VERSION_URI};

pub const CATEGORIES: &[&str] = &["weather", "snow", "ski-resort"];

pub fn read_version() -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContent {
            uri: VERSION_URI.to_string(),
            mime_type: Some("text/plain".to_string()),
            text: Some(SERVER_VERSION.to_string()),
        }],
    }
}

pub fn read_categories() -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContent {
            uri: CATEGORIES_URI.to_string(),
            mime_type: Some("application/json".to_string()),
            text: Some(pretty(&json!({ "categories": CATEGORIES }))),
        }],
    }
}
