use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub schemas: HashMap<String, PathBuf>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            color: default_color(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("sp-field-mapper")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".sp-field-mapper")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config with {} schema aliases", config.schemas.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_schema(&mut self, alias: String, path: PathBuf) {
        info!("Adding schema alias: {} -> {:?}", alias, path);
        if let Some(previous) = self.schemas.insert(alias.clone(), path) {
            warn!("Replaced schema alias {} (was {:?})", alias, previous);
        }
    }

    pub fn remove_schema(&mut self, alias: &str) -> Result<()> {
        if self.schemas.remove(alias).is_none() {
            anyhow::bail!("Schema alias '{}' not found", alias);
        }
        info!("Removed schema alias: {}", alias);
        Ok(())
    }

    pub fn list_schemas(&self) -> Vec<(&String, &PathBuf)> {
        let mut schemas: Vec<_> = self.schemas.iter().collect();
        schemas.sort_by_key(|(alias, _)| alias.as_str());
        schemas
    }

    /// Resolve a command-line schema argument: a registered alias or a path
    pub fn resolve_schema_path(&self, schema: &str) -> PathBuf {
        match self.schemas.get(schema) {
            Some(path) => path.clone(),
            None => PathBuf::from(schema),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.settings.output_format, OutputFormat::Table);
        assert!(config.settings.color);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.output_format = OutputFormat::Json;
        config.add_schema("employee".to_string(), PathBuf::from("/schemas/employee.toml"));
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(
            reloaded.resolve_schema_path("employee"),
            PathBuf::from("/schemas/employee.toml")
        );
        assert_eq!(reloaded.resolve_schema_path("other.json"), PathBuf::from("other.json"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[settings]\ncolor = false\n").unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.output_format, OutputFormat::Table);
        assert!(config.schemas.is_empty());
    }

    #[test]
    fn test_remove_missing_alias_fails() {
        let mut config = Config::default();
        assert!(config.remove_schema("nope").is_err());
    }
}
