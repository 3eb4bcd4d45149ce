//! Fetch → parse → extract → shape.

use std::sync::Arc;
use std::time::Duration;

use crate::conditions::ConditionsScraper;
use crate::document::Document;
use crate::extract::extract;
use crate::fetch::{HttpFetcher, PageSource, WHISTLER_WEATHER_URL};
use crate::locate::{BlobLocator, MarkerPatternLocator};
use crate::types::{ForecastReport, WeatherReport, WeatherResult};

/// Build a report from already-fetched page HTML.
///
/// Pure and synchronous; the parsed document is dropped before returning.
pub fn report_from_html(html: &str, locator: &dyn BlobLocator) -> WeatherResult<ForecastReport> {
    let doc = Document::parse(html);
    let extracted = extract(&doc, locator)?;
    let conditions = ConditionsScraper::new().scrape(&doc);
    Ok(ForecastReport::new(extracted, conditions))
}

/// The end-to-end weather pipeline for one page.
#[derive(Clone)]
pub struct ForecastPipeline {
    source: Arc<dyn PageSource>,
    locator: Arc<dyn BlobLocator>,
    url: String,
}

impl ForecastPipeline {
    pub fn new(source: Arc<dyn PageSource>, url: impl Into<String>) -> Self {
        Self {
            source,
            locator: Arc::new(MarkerPatternLocator::default()),
            url: url.into(),
        }
    }

    /// Pipeline for the Whistler Blackcomb report page over HTTP.
    pub fn whistler(timeout: Option<Duration>) -> Self {
        let fetcher = match timeout {
            Some(t) => HttpFetcher::with_timeout(t),
            None => HttpFetcher::new(),
        };
        Self::new(Arc::new(fetcher), WHISTLER_WEATHER_URL)
    }

    /// Swap the strategy used to capture the embedded literal.
    pub fn with_locator(mut self, locator: Arc<dyn BlobLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run the pipeline, propagating fetch and structural errors.
    pub async fn try_report(&self) -> WeatherResult<ForecastReport> {
        let html = self.source.fetch(&self.url).await?;
        let report = report_from_html(&html, self.locator.as_ref())?;

        tracing::info!(
            "Weather report ready (alpine: {}, village: {}, parse error: {})",
            report.alpine.is_some(),
            report.village.is_some(),
            report.forecast_parse_error.is_some()
        );
        Ok(report)
    }

    /// Run the pipeline. Never fails; errors come back as [`WeatherReport::Failed`].
    pub async fn report(&self) -> WeatherReport {
        match self.try_report().await {
            Ok(report) => WeatherReport::Report(report),
            Err(e) => {
                tracing::error!("Failed to fetch weather data: {e}");
                WeatherReport::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

impl std::fmt::Debug for ForecastPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastPipeline")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::types::{FetchError, WeatherError};

    struct FixedPage(&'static str);

    #[async_trait]
    impl PageSource for FixedPage {
        async fn fetch(&self, _url: &str) -> WeatherResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl PageSource for Unreachable {
        async fn fetch(&self, url: &str) -> WeatherResult<String> {
            Err(FetchError::Transport {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }
            .into())
        }
    }

    /// Captures the whole script body regardless of content.
    struct WholeScript;

    impl BlobLocator for WholeScript {
        fn locate<'a>(&self, script: &'a str) -> Option<&'a str> {
            Some(script.trim())
        }
    }

    const PAGE: &str = r#"<html><body>
        <div class="weather-summary">Snow showers</div>
        <script>
          FR.forecasts = [
            {"CurrentTempMetric": -1, "Date": "day1", "FreezingLevelMetric": 1700,
             "ForecastData": [{"CurrentTempMetric": -3, "Date": "day2"}]},
            {"CurrentTempMetric": 2, "Date": "day2"}
          ];
        </script>
        </body></html>"#;

    #[test]
    fn test_report_from_html() {
        let report = report_from_html(PAGE, &MarkerPatternLocator::default()).unwrap();
        let alpine = report.alpine.unwrap();
        assert_eq!(alpine.current_temp_metric, Some(-1.0));
        assert_eq!(alpine.forecast_data.as_ref().unwrap().len(), 1);
        let village = report.village.unwrap();
        assert_eq!(village.period.date.as_deref(), Some("day2"));
        assert_eq!(village.period.freezing_level_metric, None);
        assert_eq!(
            report.current_conditions.unwrap().summary.as_deref(),
            Some("Snow showers")
        );
    }

    #[test]
    fn test_unexpected_shape_propagates() {
        let html = "<script>FR.forecasts = [1, 2];</script>";
        let err = report_from_html(html, &MarkerPatternLocator::default()).unwrap_err();
        assert!(matches!(err, WeatherError::Extract(_)));
    }

    #[tokio::test]
    async fn test_pipeline_report() {
        let pipeline = ForecastPipeline::new(Arc::new(FixedPage(PAGE)), "https://example.test/");
        let report = pipeline.report().await;
        match report {
            WeatherReport::Report(r) => assert!(r.alpine.is_some() && r.village.is_some()),
            WeatherReport::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_in_band() {
        let pipeline = ForecastPipeline::new(Arc::new(Unreachable), "https://example.test/");
        assert!(pipeline.try_report().await.is_err());

        match pipeline.report().await {
            WeatherReport::Failed { error } => {
                assert!(error.contains("connection refused"), "{error}");
                assert!(error.contains("https://example.test/"), "{error}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_structural_failure_is_in_band() {
        let pipeline = ForecastPipeline::new(
            Arc::new(FixedPage("<script>7</script>")),
            "https://example.test/",
        )
        .with_locator(Arc::new(WholeScript));

        let report = pipeline.report().await;
        assert!(report.is_failed());
    }

    #[tokio::test]
    async fn test_swapped_locator_feeds_same_decoder() {
        let pipeline = ForecastPipeline::new(
            Arc::new(FixedPage(r#"<script>[{"Date": "only"}]</script>"#)),
            "https://example.test/",
        )
        .with_locator(Arc::new(WholeScript));

        match pipeline.report().await {
            WeatherReport::Report(r) => {
                assert_eq!(r.alpine.unwrap().period.date.as_deref(), Some("only"));
                assert!(r.village.is_none());
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn test_whistler_pipeline_url() {
        let pipeline = ForecastPipeline::whistler(Some(Duration::from_secs(5)));
        assert_eq!(pipeline.url(), WHISTLER_WEATHER_URL);
        assert!(format!("{pipeline:?}").contains("snow-and-weather-report"));
    }
}
