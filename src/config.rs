use crate::case::Convention;
use crate::tokenizer::Variant;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casekit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convention: Convention,

    #[serde(default)]
    pub variant: Variant,

    #[serde(default = "default_color")]
    pub color: bool,

    #[serde(default)]
    pub json_input: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention: Convention::default(),
            variant: Variant::default(),
            color: default_color(),
            json_input: false,
        }
    }
}

/// One configuration file; only the keys it sets are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    pub convention: Option<Convention>,
    pub variant: Option<Variant>,
    pub color: Option<bool>,
    pub json_input: Option<bool>,
}

/// Settings given on the command line, which win over any file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub convention: Option<Convention>,
    pub variant: Option<Variant>,
    pub no_color: bool,
    pub json_input: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::load_with(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    /// Same as [`Config::load`] with explicit file locations (useful for testing)
    pub fn load_with(global: Option<&Path>, local: &Path, overrides: &Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                config = config.merge(Self::read_layer(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            config = config.merge(Self::read_layer(local)?);
        }

        if let Some(convention) = overrides.convention {
            config.convention = convention;
        }
        if let Some(variant) = overrides.variant {
            config.variant = variant;
        }
        if overrides.no_color {
            config.color = false;
        }
        if overrides.json_input {
            config.json_input = true;
        }

        Ok(config)
    }

    fn read_layer(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(convention) = layer.convention {
            self.convention = convention;
        }
        if let Some(variant) = layer.variant {
            self.variant = variant;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(json_input) = layer.json_input {
            self.json_input = json_input;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casekit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.convention, Convention::Camel);
        assert_eq!(config.variant, Variant::Separator);
        assert!(config.color);
        assert!(!config.json_input);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let layer = ConfigLayer {
            convention: Some(Convention::Kebab),
            ..Default::default()
        };

        let merged = base.merge(layer);
        assert_eq!(merged.convention, Convention::Kebab);
        assert_eq!(merged.variant, Variant::Separator);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("convention = \"snake\"").unwrap();
        assert_eq!(config.convention, Convention::Snake);
        assert!(config.color);
    }

    #[test]
    fn test_local_overrides_global_and_cli_overrides_both() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "convention = \"dot\"\ncolor = false\n").unwrap();
        fs::write(&local, "convention = \"kebab\"\nvariant = \"pattern\"\n").unwrap();

        let config = Config::load_with(Some(&global), &local, &Overrides::default()).unwrap();
        assert_eq!(config.convention, Convention::Kebab);
        assert_eq!(config.variant, Variant::Pattern);
        assert!(!config.color);

        let overrides = Overrides {
            convention: Some(Convention::Snake),
            json_input: true,
            ..Default::default()
        };
        let config = Config::load_with(Some(&global), &local, &overrides).unwrap();
        assert_eq!(config.convention, Convention::Snake);
        assert!(config.json_input);
    }

    #[test]
    fn test_local_can_restore_defaults_over_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(
            &global,
            "convention = \"dot\"\nvariant = \"pattern\"\ncolor = false\njson_input = true\n",
        )
        .unwrap();
        fs::write(
            &local,
            "convention = \"camel\"\nvariant = \"separator\"\ncolor = true\njson_input = false\n",
        )
        .unwrap();

        let config = Config::load_with(Some(&global), &local, &Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unset_local_keys_keep_global_values() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "json_input = true\ncolor = false\n").unwrap();
        fs::write(&local, "convention = \"kebab\"\n").unwrap();

        let config = Config::load_with(Some(&global), &local, &Overrides::default()).unwrap();
        assert_eq!(config.convention, Convention::Kebab);
        assert!(config.json_input);
        assert!(!config.color);
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_with(
            Some(&dir.path().join("nope.toml")),
            &dir.path().join("also-nope.toml"),
            &Overrides::default(),
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join(".casekit.toml");
        fs::write(&local, "convention = \"pascal\"").unwrap();

        let err = Config::load_with(None, &local, &Overrides::default()).unwrap_err();
        assert!(format!("{:#}", err).contains(".casekit.toml"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config {
            convention: Convention::Dot,
            variant: Variant::Pattern,
            color: false,
            json_input: true,
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("convention = \"dot\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
