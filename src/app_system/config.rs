use std::env;

use tracing::warn;

pub const DEFAULT_CHANNEL_BUFFER: usize = 100;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for [`super::VendingSystem`] and [`super::setup_tracing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the service's request channel. Must be at least 1.
    pub channel_buffer: usize,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads `VENDING_CHANNEL_BUFFER` and `VENDING_LOG`, falling back to the
    /// defaults for anything unset or invalid.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("VENDING_CHANNEL_BUFFER") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.channel_buffer = size,
                _ => warn!(
                    value = %raw,
                    default = DEFAULT_CHANNEL_BUFFER,
                    "Invalid VENDING_CHANNEL_BUFFER, using default"
                ),
            }
        }

        if let Some(filter) = lookup("VENDING_LOG") {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("VENDING_CHANNEL_BUFFER", "8"),
            ("VENDING_LOG", "debug"),
        ]));
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn invalid_buffer_falls_back() {
        for raw in ["0", "-3", "lots"] {
            let config = SystemConfig::from_lookup(lookup(&[("VENDING_CHANNEL_BUFFER", raw)]));
            assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
        }
    }
}
