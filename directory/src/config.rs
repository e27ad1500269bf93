use std::time::Duration;

/// Pause applied before every store operation when nothing overrides it,
/// sized like a small network round-trip.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(500);

const LATENCY_ENV: &str = "DIRECTORY_LATENCY_MS";

/// Runtime knobs for the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Artificial pause before each operation, standing in for the network
    /// hop a remote backend would cost.
    pub simulated_latency: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulated_latency: DEFAULT_SIMULATED_LATENCY,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the environment.
    ///
    /// `DIRECTORY_LATENCY_MS` overrides the simulated latency in whole
    /// milliseconds; unset or unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            simulated_latency: latency_from(std::env::var(LATENCY_ENV).ok()),
        }
    }

    /// Configuration with the latency simulation switched off.
    pub fn no_latency() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
        }
    }
}

fn latency_from(raw: Option<String>) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_SIMULATED_LATENCY)
}
