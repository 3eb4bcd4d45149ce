//! Current conditions read from the visible page text.
//!
//! Page variants that do not embed a forecast blob still render the day's
//! summary, temperatures and freezing level as plain text.

use regex::Regex;

use crate::document::Document;
use crate::types::CurrentConditions;

/// Selectors tried in order for the conditions summary.
pub const SUMMARY_SELECTORS: &[&str] = &[
    ".weather-summary",
    ".forecast-summary",
    "#weather-summary",
    ".conditions-summary",
];

/// Pattern-based scraper for the visible conditions text.
#[derive(Debug, Clone)]
pub struct ConditionsScraper {
    high: Regex,
    low: Regex,
    freezing_level: Regex,
}

impl Default for ConditionsScraper {
    fn default() -> Self {
        Self {
            high: Regex::new(r"\bHigh\s+-?\d+(?:\.\d+)?\s*°\s*C\b").expect("valid regex"),
            low: Regex::new(r"\bLow\s+-?\d+(?:\.\d+)?\s*°\s*C\b").expect("valid regex"),
            freezing_level: Regex::new(
                r"(?i)freezing\s+level\D{0,40}?(\d[\d,]*(?:\.\d+)?\s*(?:metres|meters|m)\b)",
            )
            .expect("valid regex"),
        }
    }
}

impl ConditionsScraper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scrape the page. Returns `None` when nothing recognisable was found.
    pub fn scrape(&self, doc: &Document) -> Option<CurrentConditions> {
        let text = doc.visible_text();

        let conditions = CurrentConditions {
            summary: summary(doc),
            temperature_high: self.high.find(&text).map(|m| collapse(m.as_str())),
            temperature_low: self.low.find(&text).map(|m| collapse(m.as_str())),
            freezing_level: self
                .freezing_level
                .captures(&text)
                .and_then(|caps| caps.get(1))
                .map(|m| collapse(m.as_str())),
        };

        if conditions.is_empty() {
            None
        } else {
            Some(conditions)
        }
    }
}

fn summary(doc: &Document) -> Option<String> {
    SUMMARY_SELECTORS.iter().find_map(|selector| match doc.select_text(selector) {
        Ok(texts) => texts.into_iter().find(|t| !t.is_empty()),
        Err(e) => {
            tracing::warn!("Skipping summary selector: {e}");
            None
        }
    })
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
