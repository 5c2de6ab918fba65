//! Configuration management for the dashboard

use crate::navigation::{Navigator, Section};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "COMPLAINTDESK";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Shell configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shell configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// Sidebar heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Section shown on load, by identifier
    #[serde(default = "default_section")]
    pub default_section: String,

    /// Start with the sidebar collapsed
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_title() -> String {
    "Admin Panel".to_string()
}

fn default_section() -> String {
    Section::default().id().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_section: default_section(),
            sidebar_collapsed: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from TOML text
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value has the
    /// wrong type.
    pub fn from_toml_str(toml: &str) -> crate::Result<Self> {
        Self::build(
            Some(config::File::from_str(toml, config::FileFormat::Toml)),
            None,
        )
    }

    /// Load configuration from `dashboard.toml` and the environment
    ///
    /// The file is optional. Environment keys look like
    /// `COMPLAINTDESK_UI__DEFAULT_SECTION`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> crate::Result<Self> {
        Self::build(
            Some(config::File::with_name("dashboard").required(false)),
            Some(environment()),
        )
    }

    fn build<S>(file: Option<S>, env: Option<config::Environment>) -> crate::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Initial navigator state
    ///
    /// An unknown section identifier falls back to the dashboard.
    #[must_use]
    pub fn navigator(&self) -> Navigator {
        let section = self.ui.default_section.parse().unwrap_or_else(|e| {
            warn!("{e}, starting on {}", Section::default());
            Section::default()
        });
        Navigator::new(section, self.ui.sidebar_collapsed)
    }
}

#[cfg(any(test, not(target_arch = "wasm32")))]
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
