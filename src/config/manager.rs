//! Holds the active site settings.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    SiteSettings,
    loader,
};

/// Loads, validates and serves the site settings.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: SiteSettings,

    /// Workspace root the settings were loaded from
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SiteSettings::default(), workspace_root: None }
    }

    /// Loads settings from `workspace_root`, falling back to defaults when
    /// there is no configuration file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation errors
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(SiteSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            SiteSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// Validation errors; the previous settings are kept.
    pub fn update_settings(&mut self, new_settings: SiteSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// Preference file location, resolved against the workspace root.
    ///
    /// `None` when persistent storage is disabled.
    #[must_use]
    pub fn storage_path(&self) -> Option<PathBuf> {
        let storage = &self.current_settings.storage;
        if !storage.enabled {
            return None;
        }
        let root = self.workspace_root.as_deref().unwrap_or_else(|| Path::new("."));
        Some(root.join(&storage.path))
    }
}
