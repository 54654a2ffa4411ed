//! Log subscriber setup.
//!
//! Provides [`Telemetry`] for installing a `tracing` fmt subscriber that
//! writes to stderr. Only available with the `telemetry` feature.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level filter used when neither `RUST_LOG` nor [`Telemetry::with_log_level`]
/// is set.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Subscriber configuration.
///
/// `RUST_LOG` always takes precedence over the programmatic level.
#[derive(Debug, Default)]
pub struct Telemetry {
    log_level: Option<String>,
    ansi: bool,
}

impl Telemetry {
    /// Creates a new, empty [`Telemetry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level filter used when `RUST_LOG` is not set.
    ///
    /// Accepts any valid [`EnvFilter`] directive string (e.g. `"debug"`,
    /// `"polar_networks=debug"`).
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enables ANSI colours in the output.
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))
        })
    }

    /// Installs the subscriber globally. A second call is a no-op.
    pub fn register(self) {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.ansi)
            .with_target(false);
        let _ = tracing_subscriber::registry()
            .with(self.filter())
            .with(layer)
            .try_init();
    }
}
