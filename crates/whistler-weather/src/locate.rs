//! Locating the embedded forecast literal inside a script block.

use regex::Regex;

/// Variable the page's own client-side code assigns the forecast data to.
pub const FORECAST_MARKER: &str = "FR.forecasts";

/// Finds the literal span of an embedded data assignment in script text.
pub trait BlobLocator: Send + Sync {
    /// Return the captured literal, or `None` if this script does not carry one.
    fn locate<'a>(&self, script: &'a str) -> Option<&'a str>;
}

/// Substring pre-check followed by a dot-matches-newline capture of the
/// right-hand-side array or object literal.
#[derive(Debug, Clone)]
pub struct MarkerPatternLocator {
    marker: String,
    pattern: Regex,
}

impl MarkerPatternLocator {
    /// Locator for an arbitrary `name = <literal>;` assignment.
    pub fn new(marker: &str) -> Self {
        let pattern = Regex::new(&format!(
            r"(?s){}\s*=\s*(\[.*?\]|\{{.*?\}})\s*;",
            regex::escape(marker)
        ))
        .expect("escaped marker forms a valid pattern");

        Self {
            marker: marker.to_string(),
            pattern,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for MarkerPatternLocator {
    fn default() -> Self {
        Self::new(FORECAST_MARKER)
    }
}

impl BlobLocator for MarkerPatternLocator {
    fn locate<'a>(&self, script: &'a str) -> Option<&'a str> {
        if !script.contains(&self.marker) {
            return None;
        }

        self.pattern
            .captures(script)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_literal_across_lines() {
        let script = "var FR = FR || {};\nFR.forecasts = [\n  {\"Date\": \"day1\"},\n  {\"Date\": \"day2\"}\n];\nFR.init();";
        let span = MarkerPatternLocator::default().locate(script).unwrap();
        assert!(span.starts_with('['));
        assert!(span.ends_with(']'));
        assert!(span.contains("day2"));
    }

    #[test]
    fn test_object_literal() {
        let script = r#"FR.forecasts={"day1":{"high":"High -1 °C"}};"#;
        let span = MarkerPatternLocator::default().locate(script).unwrap();
        assert_eq!(span, r#"{"day1":{"high":"High -1 °C"}}"#);
    }

    #[test]
    fn test_no_marker() {
        let locator = MarkerPatternLocator::default();
        assert!(locator.locate("var forecasts = [1, 2];").is_none());
    }

    #[test]
    fn test_marker_without_assignment() {
        let locator = MarkerPatternLocator::default();
        assert!(locator.locate("render(FR.forecasts);").is_none());
    }

    #[test]
    fn test_dot_in_marker_is_literal() {
        let locator = MarkerPatternLocator::default();
        assert!(locator.locate("FRxforecasts = [1]; // FR.forecasts").is_none());
    }

    #[test]
    fn test_custom_marker() {
        let locator = MarkerPatternLocator::new("window.__DATA__");
        assert_eq!(locator.marker(), "window.__DATA__");
        assert_eq!(locator.locate("window.__DATA__ = [1,2] ;"), Some("[1,2]"));
    }
}
