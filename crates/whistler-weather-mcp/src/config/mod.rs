//! Configuration loading and resolution.

use std::time::Duration;

/// Environment variable consulted when no `--response-mode` flag is given.
pub const RESPONSE_MODE_ENV: &str = "WHISTLER_RESPONSE_MODE";

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shape of the `whistler_weather` tool output for this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResponseMode {
    /// The report as pretty-printed JSON.
    #[default]
    Structured,
    /// The report wrapped in a human-readable sentence.
    Text,
}

impl std::str::FromStr for ResponseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(ResponseMode::Structured),
            "text" | "string" => Ok(ResponseMode::Text),
            other => Err(format!("unknown response mode '{other}'")),
        }
    }
}

impl std::fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseMode::Structured => write!(f, "structured"),
            ResponseMode::Text => write!(f, "text"),
        }
    }
}

/// Resolve the response mode: explicit flag, then environment, then default.
pub fn resolve_response_mode(explicit: Option<ResponseMode>) -> ResponseMode {
    if let Some(mode) = explicit {
        return mode;
    }

    match std::env::var(RESPONSE_MODE_ENV) {
        Ok(value) => parse_env_mode(&value),
        Err(_) => ResponseMode::default(),
    }
}

fn parse_env_mode(value: &str) -> ResponseMode {
    value.parse().unwrap_or_else(|e| {
        tracing::warn!("Ignoring {RESPONSE_MODE_ENV}: {e}");
        ResponseMode::default()
    })
}

/// Upstream timeout; `0` leaves it to the transport default.
pub fn resolve_timeout(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_mode_wins() {
        assert_eq!(
            resolve_response_mode(Some(ResponseMode::Text)),
            ResponseMode::Text
        );
    }

    #[test]
    fn test_env_mode_parsing() {
        assert_eq!(parse_env_mode("TEXT"), ResponseMode::Text);
        assert_eq!(parse_env_mode(" json "), ResponseMode::Structured);
        assert_eq!(parse_env_mode("xml"), ResponseMode::Structured);
    }

    #[test]
    fn test_timeout() {
        assert_eq!(resolve_timeout(0), None);
        assert_eq!(resolve_timeout(12), Some(Duration::from_secs(12)));
    }

    #[test]
    fn test_display_round_trip() {
        for mode in [ResponseMode::Structured, ResponseMode::Text] {
            assert_eq!(mode.to_string().parse::<ResponseMode>().unwrap(), mode);
        }
    }
}
