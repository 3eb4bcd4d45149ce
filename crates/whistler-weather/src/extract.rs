//! Embedded forecast extraction.
//!
//! Only the first script whose literal the locator captures is decoded. A
//! decode failure is reported in-band as [`ExtractedForecasts::Unparseable`];
//! later scripts are never consulted.

use serde_json::Value;

use crate::document::Document;
use crate::locate::BlobLocator;
use crate::project::{kind, project_forecast};
use crate::types::{ExtractError, ExtractResult, ExtractedForecasts};

/// Scan the document's scripts for the embedded forecast blob and shape it.
pub fn extract(doc: &Document, locator: &dyn BlobLocator) -> ExtractResult<ExtractedForecasts> {
    let scripts = doc.scripts();

    match scripts.iter().find_map(|script| locator.locate(script)) {
        Some(span) => decode(span),
        None => {
            tracing::debug!("No script carried an embedded forecast assignment");
            Ok(ExtractedForecasts::Missing)
        }
    }
}

/// Decode a captured literal into zone forecasts or pass-through day data.
pub fn decode(span: &str) -> ExtractResult<ExtractedForecasts> {
    let value: Value = match serde_json::from_str(span) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Could not parse forecast JSON data: {e}");
            return Ok(ExtractedForecasts::Unparseable(e.to_string()));
        }
    };

    match value {
        Value::Array(items) => {
            if items.len() > 2 {
                tracing::debug!("Ignoring {} forecasts beyond alpine and village", items.len() - 2);
            }

            let mut zones = items.iter().take(2).map(|item| {
                item.as_object().map(project_forecast).unwrap_or_else(|| {
                    Err(ExtractError::UnexpectedShape(format!(
                        "forecast entry is {}, expected an object",
                        kind(item)
                    )))
                })
            });

            let alpine = zones.next().transpose()?;
            let village = zones.next().transpose()?;
            Ok(ExtractedForecasts::Zones { alpine, village })
        }
        Value::Object(days) => Ok(ExtractedForecasts::Detailed(days)),
        other => Err(ExtractError::UnexpectedShape(format!(
            "forecast data is {}, expected an array or object",
            kind(&other)
        ))),
    }
}
