use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Settings file as written on disk. Every field is optional so override
/// files only need to name what they change.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub default_algorithm: Option<String>,
    #[serde(default)]
    pub max_size: Option<usize>,
    #[serde(default)]
    pub show_stats: Option<bool>,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Effective settings after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Algorithm used when the caller names none
    pub default_algorithm: String,
    /// Maximum input size in bytes (0 = unlimited)
    pub max_size: usize,
    /// Print timing and size metrics after each transform
    pub show_stats: bool,
    /// User alias -> catalog id
    pub aliases: HashMap<String, String>,
}

impl Settings {
    /// Parses a settings layer from TOML content.
    pub fn from_toml(content: &str) -> Result<SettingsFile, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in defaults.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        let layer = Self::from_toml(content)?;

        let mut settings = Settings {
            default_algorithm: String::new(),
            max_size: 0,
            show_stats: false,
            aliases: HashMap::new(),
        };
        settings.merge(layer);
        Ok(settings)
    }

    /// Loads one settings layer from a file path.
    pub fn load_from_file(path: &Path) -> Result<SettingsFile, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Default location of the user settings file.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hashcodec").join("config.toml"))
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/hashcodec/config.toml` (user overrides)
    /// 3. `./hashcodec.toml` (project-local overrides)
    ///
    /// Later layers override earlier ones field by field. A broken override
    /// file is logged and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from("hashcodec.toml")));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(layer) => {
                    log::debug!("loaded settings override from {:?}", path);
                    settings.merge(layer);
                }
                Err(e) => {
                    log::warn!("failed to load settings from {:?}: {}", path, e);
                }
            }
        }

        Ok(settings)
    }

    /// Applies an explicitly requested settings file. Unlike the implicit
    /// layers, this one must exist and parse.
    pub fn apply_file(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let expanded = shellexpand::tilde(path);
        let layer = Self::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("cannot load settings from '{}': {}", path, e))?;
        self.merge(layer);
        Ok(())
    }

    /// Merges another layer into this one.
    pub fn merge(&mut self, other: SettingsFile) {
        if let Some(default_algorithm) = other.default_algorithm {
            self.default_algorithm = default_algorithm;
        }
        if let Some(max_size) = other.max_size {
            self.max_size = max_size;
        }
        if let Some(show_stats) = other.show_stats {
            self.show_stats = show_stats;
        }
        for (alias, target) in other.aliases {
            self.aliases.insert(alias.to_lowercase(), target);
        }
    }

    /// Maps a user alias to its catalog id; other names pass through.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .get(&name.trim().to_lowercase())
            .map(String::as_str)
            .unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_settings() {
        let settings = Settings::load_default().unwrap();
        assert_eq!(settings.default_algorithm, "base64");
        assert_eq!(settings.max_size, 104_857_600);
        assert!(!settings.show_stats);
        assert!(settings.aliases.is_empty());
    }

    #[test]
    fn test_merge_overrides_only_named_fields() {
        let mut settings = Settings::load_default().unwrap();
        let layer = Settings::from_toml(
            r#"
            show_stats = true

            [aliases]
            B = "base64"
            "#,
        )
        .unwrap();
        settings.merge(layer);

        assert!(settings.show_stats);
        assert_eq!(settings.default_algorithm, "base64");
        assert_eq!(settings.max_size, 104_857_600);
        assert_eq!(settings.resolve_alias("b"), "base64");
    }

    #[test]
    fn test_later_layer_wins() {
        let mut settings = Settings::load_default().unwrap();
        settings.merge(Settings::from_toml("default_algorithm = \"hex\"").unwrap());
        settings.merge(Settings::from_toml("default_algorithm = \"rot13\"").unwrap());
        assert_eq!(settings.default_algorithm, "rot13");
    }

    #[test]
    fn test_unknown_alias_passes_through() {
        let settings = Settings::load_default().unwrap();
        assert_eq!(settings.resolve_alias("sha256"), "sha256");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(Settings::from_toml("colour = true").is_err());
    }

    #[test]
    fn test_apply_missing_file_fails() {
        let mut settings = Settings::load_default().unwrap();
        assert!(
            settings
                .apply_file("/nonexistent/hashcodec/settings.toml")
                .is_err()
        );
    }
}
