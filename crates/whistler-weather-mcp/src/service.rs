//! The weather service behind the `whistler_weather` tool.

use whistler_weather::{ForecastPipeline, WeatherReport};

use crate::config::ResponseMode;
use crate::types::{pretty, ToolCallResult};

pub const SUCCESS_PREFIX: &str = "Weather data fetched successfully: ";
pub const FAILURE_PREFIX: &str = "Failed to fetch weather data: ";

/// Runs the pipeline and renders its outcome in the deployment's response mode.
#[derive(Debug, Clone)]
pub struct WeatherService {
    pipeline: ForecastPipeline,
    mode: ResponseMode,
}

impl WeatherService {
    pub fn new(pipeline: ForecastPipeline, mode: ResponseMode) -> Self {
        Self { pipeline, mode }
    }

    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    pub fn pipeline(&self) -> &ForecastPipeline {
        &self.pipeline
    }

    /// Fetch a fresh report. Upstream failures come back in-band.
    pub async fn weather(&self) -> ToolCallResult {
        let report = self.pipeline.report().await;
        render(&report, self.mode)
    }
}

/// Render a report as tool output.
pub fn render(report: &WeatherReport, mode: ResponseMode) -> ToolCallResult {
    match (mode, report) {
        (ResponseMode::Structured, WeatherReport::Failed { .. }) => ToolCallResult::json_error(report),
        (ResponseMode::Structured, WeatherReport::Report(_)) => ToolCallResult::json(report),
        (ResponseMode::Text, WeatherReport::Failed { error }) => {
            ToolCallResult::error(format!("{FAILURE_PREFIX}{error}"))
        }
        (ResponseMode::Text, WeatherReport::Report(_)) => {
            ToolCallResult::text(format!("{SUCCESS_PREFIX}{}", pretty(report)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whistler_weather::{ExtractedForecasts, ForecastReport};

    fn empty_report() -> WeatherReport {
        WeatherReport::Report(ForecastReport::new(ExtractedForecasts::Missing, None))
    }

    #[test]
    fn test_structured_success() {
        let result = render(&empty_report(), ResponseMode::Structured);
        assert!(result.is_error.is_none());
        let value: serde_json::Value =
            serde_json::from_str(result.content[0].as_text()).unwrap();
        assert!(value["alpineForecast"].is_null());
    }

    #[test]
    fn test_text_success() {
        let result = render(&empty_report(), ResponseMode::Text);
        let text = result.content[0].as_text();
        let json = text.strip_prefix(SUCCESS_PREFIX).unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert!(value.get("villageForecast").is_some());
    }

    #[test]
    fn test_text_failure() {
        let report = WeatherReport::Failed {
            error: "connection refused".to_string(),
        };
        let result = render(&report, ResponseMode::Text);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.content[0].as_text(),
            "Failed to fetch weather data: connection refused"
        );
    }

    #[test]
    fn test_structured_failure() {
        let report = WeatherReport::Failed {
            error: "HTTP 503".to_string(),
        };
        let result = render(&report, ResponseMode::Structured);
        assert_eq!(result.is_error, Some(true));
        let value: serde_json::Value =
            serde_json::from_str(result.content[0].as_text()).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "HTTP 503" }));
    }
}
