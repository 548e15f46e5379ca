//! # Site Configuration
//!
//! The page has no server to read settings from, so configuration is taken
//! from environment variables at **build** time:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CLOVER_DEFAULT_LOCALE` | `en` | Locale used when nothing else selects one |
//! | `CLOVER_BREAKPOINT_PX` | `768` | Viewport width where the desktop layout starts |
//! | `CLOVER_LOG_LEVEL` | `info` | Console log level |
//! | `CLOVER_THEME` | built-in palette | JSON object overriding theme colors, e.g. `{"accent": "#FF8800"}` |
//!
//! Call [`init_config()`] once at startup, then read it with [`site_config()`].

use std::sync::OnceLock;

use shared::i18n::Locale;
use shared::layout::BREAKPOINT_PX;
use shared::theme::Theme;
use thiserror::Error;

/// Accepted breakpoint range, in CSS pixels.
const BREAKPOINT_RANGE: std::ops::RangeInclusive<u32> = 320..=2560;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CLOVER_DEFAULT_LOCALE '{0}' is not a supported locale")]
    InvalidLocale(String),

    #[error("CLOVER_BREAKPOINT_PX must be a number: '{0}'")]
    InvalidBreakpoint(String),

    #[error("CLOVER_BREAKPOINT_PX must be between 320 and 2560, got {0}")]
    BreakpointOutOfRange(u32),

    #[error("CLOVER_LOG_LEVEL '{0}' is not a log level")]
    InvalidLogLevel(String),

    #[error("CLOVER_THEME is invalid: {0}")]
    InvalidTheme(String),

    #[error("Config has already been initialized")]
    AlreadyInitialized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub default_locale: Locale,
    pub breakpoint_px: u32,
    pub log_level: log::Level,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            breakpoint_px: BREAKPOINT_PX,
            log_level: log::Level::Info,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Load configuration from variables captured when the crate was compiled.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("CLOVER_DEFAULT_LOCALE"),
            option_env!("CLOVER_BREAKPOINT_PX"),
            option_env!("CLOVER_LOG_LEVEL"),
            option_env!("CLOVER_THEME"),
        )
    }

    /// Build a config from raw values; `None` keeps the default.
    pub fn from_values(
        default_locale: Option<&str>,
        breakpoint_px: Option<&str>,
        log_level: Option<&str>,
        theme: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = default_locale {
            config.default_locale =
                Locale::from_tag(raw).ok_or_else(|| ConfigError::InvalidLocale(raw.to_string()))?;
        }

        if let Some(raw) = breakpoint_px {
            config.breakpoint_px = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBreakpoint(raw.to_string()))?;
        }

        if let Some(raw) = log_level {
            config.log_level = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?;
        }

        if let Some(raw) = theme {
            config.theme =
                Theme::from_json(raw).map_err(|e| ConfigError::InvalidTheme(e.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BREAKPOINT_RANGE.contains(&self.breakpoint_px) {
            return Err(ConfigError::BreakpointOutOfRange(self.breakpoint_px));
        }
        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration from the build environment.
///
/// On error nothing is stored and [`site_config()`] serves the defaults.
pub fn init_config() -> Result<(), ConfigError> {
    let config = Config::from_build_env()?;
    CONFIG.set(config).map_err(|_| ConfigError::AlreadyInitialized)
}

/// The active configuration, or the defaults if [`init_config()`] has not stored one.
pub fn site_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
