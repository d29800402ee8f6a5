const DEFAULT_RETRY_AFTER_SECS: u64 = 3600;

/// Server-side settings that are not part of the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Value of the `Retry-After` header sent with maintenance responses.
    pub retry_after_secs: u64,
    /// When false, HTML is served with its normal status.
    pub mark_unavailable: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            retry_after_secs: DEFAULT_RETRY_AFTER_SECS,
            mark_unavailable: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let retry_after_secs = match lookup("MAINTENANCE_RETRY_AFTER_SECS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "MAINTENANCE_RETRY_AFTER_SECS={:?} is not a number, using {}",
                    raw,
                    defaults.retry_after_secs
                );
                defaults.retry_after_secs
            }),
            None => defaults.retry_after_secs,
        };

        let mark_unavailable = match lookup("MAINTENANCE_MARK_UNAVAILABLE") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "MAINTENANCE_MARK_UNAVAILABLE={:?} is not a boolean, using {}",
                    raw,
                    defaults.mark_unavailable
                );
                defaults.mark_unavailable
            }),
            None => defaults.mark_unavailable,
        };

        Self {
            retry_after_secs,
            mark_unavailable,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
