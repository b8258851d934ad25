use crate::DECISION_TIMEOUT;
use std::time::Duration;

/// Configuration for turn timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub decision: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            decision: Duration::from_secs(DECISION_TIMEOUT),
        }
    }
}

impl TimerConfig {
    pub fn new(decision: Duration) -> Self {
        Self { decision }
    }
    /// Defaults, overridden by the DECISION_TIMEOUT env var (e.g., "30s", "2m").
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var("DECISION_TIMEOUT") {
            Err(_) => Ok(Self::default()),
            Ok(s) => parse_duration(&s)
                .map(Self::new)
                .ok_or_else(|| anyhow::anyhow!("invalid DECISION_TIMEOUT: {}", s))
                .inspect(|c| log::info!("decision timeout set to {:?}", c.decision)),
        }
    }
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let unit = s.chars().last()?;
    let value: u64 = s[..s.len() - unit.len_utf8()].parse().ok()?;
    match unit {
        's' => Some(Duration::from_secs(value)),
        'm' => Some(Duration::from_secs(value * 60)),
        'h' => Some(Duration::from_secs(value * 3600)),
        'd' => Some(Duration::from_secs(value * 86400)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let config = TimerConfig::default();
        assert_eq!(config.decision, Duration::from_secs(DECISION_TIMEOUT));
    }
    #[test]
    fn parses_suffixes() {
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration(" 2m "), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
    }
    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_duration("30"), None);
        assert_eq!(parse_duration("s"), None);
        assert_eq!(parse_duration("tens"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("5µ"), None);
    }
}
