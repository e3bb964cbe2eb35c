//! Shell configuration persistence
//!
//! Stores user preferences in `~/.config/chatshell/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keyboard::CommandModifier;

/// Shell configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub left_panel: LeftPanelConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,

    /// Overrides the platform's primary shortcut modifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_modifier: Option<CommandModifier>,
}

/// Left panel resizer settings, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeftPanelConfig {
    /// Applied when nothing usable is persisted
    #[serde(default = "default_size")]
    pub default_size: f32,

    #[serde(default = "default_min_size")]
    pub min_size: f32,

    #[serde(default = "default_max_size")]
    pub max_size: f32,

    /// Dragging to this size or below collapses the panel
    #[serde(default = "default_toggle_size")]
    pub toggle_size: f32,
}

fn default_size() -> f32 {
    350.0
}

fn default_min_size() -> f32 {
    260.0
}

fn default_max_size() -> f32 {
    f32::MAX
}

fn default_toggle_size() -> f32 {
    210.0
}

impl Default for LeftPanelConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            toggle_size: default_toggle_size(),
        }
    }
}

/// Analytics consent settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Without a policy URL the cookie bar is never shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_url: Option<String>,
}

impl ShellConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if unusable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The command modifier after applying the config override
    pub fn command_modifier_or(&self, platform: CommandModifier) -> CommandModifier {
        self.command_modifier.unwrap_or(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.left_panel.default_size, 350.0);
        assert_eq!(config.left_panel.min_size, 260.0);
        assert_eq!(config.left_panel.toggle_size, 210.0);
        assert!(config.tracking.policy_url.is_none());
        assert!(config.command_modifier.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "left_panel:\n  toggle_size: 180\ncommand_modifier: meta\n";
        let config: ShellConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.left_panel.toggle_size, 180.0);
        assert_eq!(config.left_panel.default_size, 350.0);
        assert_eq!(config.command_modifier, Some(CommandModifier::Meta));
        assert_eq!(
            config.command_modifier_or(CommandModifier::Ctrl),
            CommandModifier::Meta
        );
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config: ShellConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
    }
}
