//! Application configuration. Display toggles for the terminal UI.

use serde::Deserialize;

/// Decimals shown for the average when unset.
pub const DEFAULT_AVERAGE_DECIMALS: usize = 2;
/// Upper bound for `average_decimals`.
pub const MAX_AVERAGE_DECIMALS: usize = 6;
/// Prompts share the terminal with log output, so only warnings show by default.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Print the figlet banner at startup. Read from GRADE_GATE_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,

    /// Show the demo hint on the login screen. Read from GRADE_GATE_SHOW_DEMO_HINT.
    #[serde(default)]
    pub show_demo_hint: Option<bool>,

    /// Decimals used when printing the average (0..=6). Read from GRADE_GATE_AVERAGE_DECIMALS.
    #[serde(default)]
    pub average_decimals: Option<usize>,

    /// tracing filter used when RUST_LOG is unset. Read from GRADE_GATE_LOG_FILTER.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("GRADE_GATE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("GRADE_GATE").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Defaults to true.
    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    /// Defaults to true.
    pub fn show_demo_hint_or_default(&self) -> bool {
        self.show_demo_hint.unwrap_or(true)
    }

    /// Defaults to DEFAULT_LOG_FILTER.
    pub fn log_filter_or_default(&self) -> String {
        self.log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Defaults to DEFAULT_AVERAGE_DECIMALS; values above MAX_AVERAGE_DECIMALS are clamped.
    pub fn average_decimals_or_default(&self) -> usize {
        self.average_decimals
            .unwrap_or(DEFAULT_AVERAGE_DECIMALS)
            .min(MAX_AVERAGE_DECIMALS)
    }
}
