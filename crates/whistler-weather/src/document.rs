//! Tolerant HTML document wrapper.
//!
//! `scraper::Html` is `!Send`; a `Document` must be built and dropped between
//! await points.

use scraper::{ElementRef, Html, Selector};

use crate::types::{ExtractError, ExtractResult};

/// Elements whose text never shows up on the rendered page.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed, traversable HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse HTML text. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Text of every element matching a CSS selector, whitespace-collapsed.
    pub fn select_text(&self, selector: &str) -> ExtractResult<Vec<String>> {
        let sel = Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(self.html.select(&sel).map(|el| element_text(&el)).collect())
    }

    /// Contents of every inline `<script>` block, in document order.
    pub fn scripts(&self) -> Vec<String> {
        let sel = Selector::parse("script").expect("script selector is valid");
        self.html
            .select(&sel)
            .filter(|el| el.value().attr("src").is_none())
            .map(|el| el.text().collect::<String>())
            .filter(|text| !text.trim().is_empty())
            .collect()
    }

    /// Rendered text of the page body, excluding script and style content.
    pub fn visible_text(&self) -> String {
        let sel = Selector::parse("body").expect("body selector is valid");
        let root = match self.html.select(&sel).next() {
            Some(body) => body,
            None => self.html.root_element(),
        };

        let chunks: Vec<&str> = root
            .descendants()
            .filter(|node| {
                !node.ancestors().any(|a| {
                    a.value()
                        .as_element()
                        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
                })
            })
            .filter_map(|node| node.value().as_text())
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .collect();

        chunks.join(" ")
    }
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_in_document_order() {
        let doc = Document::parse(
            r#"<html><head>
            <script>var a = 1;</script>
            <script src="/bundle.js"></script>
            </head><body>
            <script>  </script>
            <script>var b = 2;</script>
            </body></html>"#,
        );

        let scripts = doc.scripts();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains("var a"));
        assert!(scripts[1].contains("var b"));
    }

    #[test]
    fn test_script_text_is_raw() {
        let doc = Document::parse("<script>if (a < b && c > d) { x = \"<p>\"; }</script>");
        assert_eq!(doc.scripts(), vec!["if (a < b && c > d) { x = \"<p>\"; }"]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let doc = Document::parse(
            "<html><body><div class=\"weather-summary\">Light <b>snow</div><p>unclosed<script>var x;</script>",
        );
        assert_eq!(
            doc.select_text(".weather-summary").unwrap(),
            vec!["Light snow".to_string()]
        );
        assert_eq!(doc.scripts().len(), 1);
    }

    #[test]
    fn test_select_text_collapses_whitespace() {
        let doc = Document::parse("<ul><li>  High\n  -1 °C </li><li>Low -5 °C</li></ul>");
        assert_eq!(
            doc.select_text("li").unwrap(),
            vec!["High -1 °C".to_string(), "Low -5 °C".to_string()]
        );
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse("<p>hi</p>");
        let err = doc.select_text("[[nope").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn test_visible_text_skips_scripts() {
        let doc = Document::parse(
            "<body><h1>Report</h1><script>FR.forecasts = [];</script><style>p{}</style><template><p>Hidden</p></template><p>Sunny</p></body>",
        );
        let text = doc.visible_text();
        assert_eq!(text, "Report Sunny");
    }

    #[test]
    fn test_empty_input() {
        let doc = Document::parse("");
        assert!(doc.scripts().is_empty());
        assert!(doc.visible_text().is_empty());
    }
}
