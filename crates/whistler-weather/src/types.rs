//! Core data types for forecast records and weather reports.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One sub-period of a multi-day breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForecastDay {
    pub high_temp_metric: Option<f64>,
    pub low_temp_metric: Option<f64>,
    pub wind_speed: Option<f64>,
    pub freezing_level_metric: Option<f64>,
    pub snow_fall_day_metric: Option<f64>,
    pub snow_fall_night_metric: Option<f64>,
    pub date: Option<String>,
    pub weather_short_description: Option<String>,
}

/// A top-level zone forecast: the current reading plus an optional breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    #[serde(rename = "CurrentTempMetric")]
    pub current_temp_metric: Option<f64>,
    #[serde(flatten)]
    pub period: ForecastDay,
    #[serde(
        rename = "ForecastData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forecast_data: Option<Vec<ForecastDay>>,
}

/// Conditions scraped from the visible page text rather than the embedded blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_high: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_low: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freezing_level: Option<String>,
}

impl CurrentConditions {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.temperature_high.is_none()
            && self.temperature_low.is_none()
            && self.freezing_level.is_none()
    }
}

/// What the embedded-data scan produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedForecasts {
    /// No script carried the forecast assignment.
    Missing,
    /// Array-shaped blob: element 0 is alpine, element 1 is village.
    Zones {
        alpine: Option<ForecastRecord>,
        village: Option<ForecastRecord>,
    },
    /// Object-shaped blob keyed by day identifier, passed through as decoded.
    Detailed(Map<String, Value>),
    /// The captured span was not valid JSON.
    Unparseable(String),
}

/// Successful report shape.
///
/// When `forecast_parse_error` is set both zone slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    #[serde(rename = "alpineForecast")]
    pub alpine: Option<ForecastRecord>,
    #[serde(rename = "villageForecast")]
    pub village: Option<ForecastRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_forecasts: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_conditions: Option<CurrentConditions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_parse_error: Option<String>,
}

impl ForecastReport {
    /// Assemble a report from the extractor output and any scraped conditions.
    pub fn new(extracted: ExtractedForecasts, conditions: Option<CurrentConditions>) -> Self {
        let mut report = Self {
            current_conditions: conditions,
            ..Self::default()
        };

        match extracted {
            ExtractedForecasts::Missing => {}
            ExtractedForecasts::Zones { alpine, village } => {
                report.alpine = alpine;
                report.village = village;
            }
            ExtractedForecasts::Detailed(days) => report.detailed_forecasts = Some(days),
            ExtractedForecasts::Unparseable(reason) => {
                report.forecast_parse_error =
                    Some(format!("Could not parse forecast JSON data: {reason}"));
            }
        }

        report
    }
}

/// The value handed back to callers: a report, or a single error description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherReport {
    Failed { error: String },
    Report(ForecastReport),
}

impl WeatherReport {
    pub fn is_failed(&self) -> bool {
        matches!(self, WeatherReport::Failed { .. })
    }
}

/// Failure while retrieving the page.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Structural failure while reading the page.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Unexpected forecast data shape: {0}")]
    UnexpectedShape(String),
}

/// Errors that can occur in the weather pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Convenience result types.
pub type WeatherResult<T> = Result<T, WeatherError>;
pub type ExtractResult<T> = Result<T, ExtractError>;
