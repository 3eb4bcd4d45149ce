//! Projection of decoded forecast objects onto the fixed record fields.
//!
//! Absent keys become `None`. Numbers are accepted as JSON numbers or numeric
//! strings; the upstream page uses placeholders such as `"Nil"` for readings it
//! does not have, and those project to `None` as well.

use serde_json::{Map, Value};

use crate::types::{ExtractError, ExtractResult, ForecastDay, ForecastRecord};

/// Project a top-level zone forecast, including its multi-day breakdown.
pub fn project_forecast(raw: &Map<String, Value>) -> ExtractResult<ForecastRecord> {
    let forecast_data = match raw.get("ForecastData") {
        Some(Value::Array(days)) => Some(
            days.iter()
                .map(|day| {
                    day.as_object().map(project_day).ok_or_else(|| {
                        ExtractError::UnexpectedShape(format!(
                            "ForecastData entry is {}, expected an object",
                            kind(day)
                        ))
                    })
                })
                .collect::<ExtractResult<Vec<_>>>()?,
        ),
        _ => None,
    };

    Ok(ForecastRecord {
        current_temp_metric: number(raw, "CurrentTempMetric"),
        period: project_day(raw),
        forecast_data,
    })
}

/// Project one sub-period. Never carries a current temperature.
pub fn project_day(raw: &Map<String, Value>) -> ForecastDay {
    ForecastDay {
        high_temp_metric: number(raw, "HighTempMetric"),
        low_temp_metric: number(raw, "LowTempMetric"),
        wind_speed: number(raw, "WindSpeed"),
        freezing_level_metric: number(raw, "FreezingLevelMetric"),
        snow_fall_day_metric: number(raw, "SnowFallDayMetric"),
        snow_fall_night_metric: number(raw, "SnowFallNightMetric"),
        date: text(raw, "Date"),
        weather_short_description: text(raw, "WeatherShortDescription"),
    }
}

fn number(raw: &Map<String, Value>, key: &str) -> Option<f64> {
    match raw.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(raw: &Map<String, Value>, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
