//! Whistler Weather: scrape the Whistler Blackcomb snow and weather report
//! into alpine and village forecast records.

pub mod conditions;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod locate;
pub mod pipeline;
pub mod project;
pub mod types;

pub use conditions::ConditionsScraper;
pub use document::Document;
pub use extract::{decode, extract};
pub use fetch::{HttpFetcher, PageSource, BROWSER_USER_AGENT, WHISTLER_WEATHER_URL};
pub use locate::{BlobLocator, MarkerPatternLocator, FORECAST_MARKER};
pub use pipeline::{report_from_html, ForecastPipeline};
pub use project::{project_day, project_forecast};
pub use types::*;
