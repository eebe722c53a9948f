// =============================================================================
// Timeless Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Constants
// 2. Environment
// 3. Site Config
// =============================================================================

use std::str::FromStr;

// -----------------------------------------------------------------------------
// 1. Constants
// -----------------------------------------------------------------------------

/// Vertical offset (px) past which the navbar switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 60.0;

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Default full run time of a counter animation.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Counter tick period, roughly one 60Hz frame.
pub const COUNTER_TICK_MS: u32 = 16;

/// Fraction of a counter's area that must be visible before it starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

// -----------------------------------------------------------------------------
// 2. Environment
// -----------------------------------------------------------------------------

/// Build environment, chosen with the `ENVIRONMENT` variable at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name. Anything unrecognized is production.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("development") | Some("dev") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// Build-time site configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub environment: Environment,
    pub log_level: log::Level,
}

impl SiteConfig {
    /// Read configuration baked in at compile time.
    pub fn from_env() -> Self {
        Self::resolve(option_env!("ENVIRONMENT"), option_env!("TIMELESS_LOG_LEVEL"))
    }

    /// Build a config from raw environment values.
    pub fn resolve(environment: Option<&str>, log_level: Option<&str>) -> Self {
        let environment = Environment::parse(environment);
        let default_level = match environment {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        };
        let log_level = log_level
            .and_then(|raw| log::Level::from_str(raw).ok())
            .unwrap_or(default_level);

        Self {
            environment,
            log_level,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_production_info() {
        let config = SiteConfig::resolve(None, None);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_development_logs_debug() {
        let config = SiteConfig::resolve(Some("development"), None);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_explicit_level_wins() {
        let config = SiteConfig::resolve(Some("development"), Some("warn"));
        assert_eq!(config.log_level, log::Level::Warn);

        // Garbage falls back to the environment default
        let config = SiteConfig::resolve(None, Some("loud"));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
