//! Storage configuration.
//!
//! This module provides TOML-based configuration for the attachment store.
//! The configuration system supports:
//! - Bundled defaults (include_str! from fresco.toml)
//! - User overrides (./fresco.toml or ~/.config/fresco/fresco.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use fresco_core::Variant;
use fresco_error::{ConfigError, FrescoError, FrescoResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::VariantSpec;

/// Size configuration for one rendered variant.
///
/// # Example
///
/// ```toml
/// [[variants]]
/// variant = "thumb_medium"
/// width = 100
/// height = 100
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct VariantConfig {
    /// Which variant this entry configures
    pub variant: Variant,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels; omit to preserve aspect ratio
    #[serde(default)]
    pub height: Option<u32>,
}

impl VariantConfig {
    /// Convert to the renderer-facing spec.
    pub fn to_spec(&self) -> VariantSpec {
        VariantSpec::new(self.variant, self.width, self.height)
    }
}

/// Top-level storage configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from fresco.toml)
/// 2. User override (~/.config/fresco/fresco.toml, then ./fresco.toml)
///
/// # Example
///
/// ```no_run
/// use fresco_storage::StorageConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorageConfig::load()?;
/// println!("Pod base URL: {}", config.base_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base URL the pod serves attachments from (no trailing slash)
    pub base_url: String,
    /// Deadline in seconds for a single backend or renderer call
    pub timeout_secs: u64,
    /// Rendered variants and their dimensions
    #[serde(default)]
    pub variants: Vec<VariantConfig>,
}

impl StorageConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> FrescoResult<Self> {
        debug!("Loading storage configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (fresco.toml shipped with the library)
    /// 2. User config in home directory (~/.config/fresco/fresco.toml)
    /// 3. User config in current directory (./fresco.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> FrescoResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../fresco.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fresco/fresco.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("fresco").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FrescoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The configured call deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Renderer specs for every configured variant.
    pub fn variant_specs(&self) -> Vec<VariantSpec> {
        self.variants.iter().map(VariantConfig::to_spec).collect()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/uploads/images".to_string(),
            timeout_secs: 30,
            variants: vec![
                VariantConfig {
                    variant: Variant::ThumbSmall,
                    width: 50,
                    height: Some(50),
                },
                VariantConfig {
                    variant: Variant::ThumbMedium,
                    width: 100,
                    height: Some(100),
                },
                VariantConfig {
                    variant: Variant::ThumbLarge,
                    width: 300,
                    height: Some(300),
                },
                VariantConfig {
                    variant: Variant::ScaledFull,
                    width: 700,
                    height: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        const DEFAULT_CONFIG: &str = include_str!("../../../fresco.toml");
        let config: StorageConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config, StorageConfig::default());
    }

    #[test]
    fn default_ladder_renders_four_variants() {
        let config = StorageConfig::default();
        assert_eq!(config.variant_specs().len(), 4);
        assert!(config
            .variants
            .iter()
            .all(|variant_config| variant_config.variant.is_rendered()));
    }
}
