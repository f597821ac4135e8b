//! Bootstrap from the settings file at the application root.

use std::io;
use std::path::Path;

use super::{
    ConfigError,
    LocalizerConfig,
    TranslatableSettings,
};

/// Settings file looked up at the application root.
pub const SETTINGS_FILE_NAME: &str = ".translatable.json";

impl TranslatableSettings {
    /// Reads `.translatable.json` under `root`.
    ///
    /// A missing file yields the defaults, and keys absent from the file keep
    /// their default values. The result is not validated.
    ///
    /// # Errors
    /// - [`ConfigError::IoError`] when the file exists but cannot be read
    /// - [`ConfigError::ParseError`] when the file is not valid JSON
    pub fn read_from_root(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(SETTINGS_FILE_NAME);

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Reading translatable settings");
                Ok(serde_json::from_str(&content)?)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl LocalizerConfig {
    /// Loads, validates and freezes the configuration found under `root`.
    ///
    /// Meant to run once while the application boots; the returned config is
    /// immutable and shared by reference afterwards.
    ///
    /// # Errors
    /// Any error of [`TranslatableSettings::read_from_root`], or
    /// [`ConfigError::ValidationErrors`] when the settings are invalid.
    pub fn load_from_root(root: &Path) -> Result<Self, ConfigError> {
        let settings = TranslatableSettings::read_from_root(root)?;
        let config = Self::from_settings(&settings)?;

        tracing::info!(
            locales = ?config.locales(),
            fallback_locale = config.fallback_locale(),
            "Loaded translatable configuration"
        );

        Ok(config)
    }
}
