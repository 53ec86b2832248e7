//! Renderer configuration, read from `schemadoc.toml`

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up by [`RenderConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "schemadoc.toml";

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options controlling how a schema document is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Page title used by the standalone wrapper
    pub title: String,

    /// Wrap the document in a complete HTML page
    pub standalone: bool,

    /// Stylesheet hrefs linked from the page head
    pub stylesheets: Vec<String>,

    /// Render built-in scalars and directives as declarations too
    pub include_builtins: bool,

    /// Floating navigation panel
    pub navigation: NavigationConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "GraphQL Schema".to_string(),
            standalone: true,
            stylesheets: Vec::new(),
            include_builtins: false,
            navigation: NavigationConfig::default(),
        }
    }
}

/// Labels and captions of the floating navigation buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    pub top_label: String,
    pub top_caption: String,
    pub query_label: String,
    pub query_caption: String,
    pub mutation_label: String,
    pub mutation_caption: String,
    pub subscription_label: String,
    pub subscription_caption: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            top_label: "\u{2191}".to_string(),
            top_caption: "Go to top".to_string(),
            query_label: "Q".to_string(),
            query_caption: "Query root type".to_string(),
            mutation_label: "M".to_string(),
            mutation_caption: "Mutation root type".to_string(),
            subscription_label: "S".to_string(),
            subscription_caption: "Subscription root type".to_string(),
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or names unknown options.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `schemadoc.toml` from `dir` if it exists
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "using discovered configuration");
        Self::load(path).map(Some)
    }
}
