use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::WriteMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub write: WriteConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How the document is written back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteConfig {
    /// Replace the file through a temp file and rename (default: true)
    /// When disabled the file is overwritten in place
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            atomic: default_atomic(),
        }
    }
}

fn default_atomic() -> bool {
    true
}

/// Console reporting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Skip the success message (default: false)
    #[serde(default)]
    pub quiet: bool,
}

impl Config {
    /// Get the XDG-style config file path (~/.config/mdindex/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mdindex").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdindex/config.toml
    /// - Linux: ~/.config/mdindex/config.toml
    /// - Windows: %APPDATA%/mdindex/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdindex").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/mdindex first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(config) = Self::xdg_config_path().and_then(|path| Self::load_from(&path)) {
                return config;
            }
        }

        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("ignoring invalid config {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.write.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::Direct
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.write.atomic);
        assert!(!config.output.quiet);
        assert_eq!(config.write_mode(), WriteMode::Atomic);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str("[write]\natomic = false\n").unwrap();
        assert_eq!(config.write_mode(), WriteMode::Direct);
        assert!(!config.output.quiet);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nquiet = \"loud\"\n").unwrap();

        assert_eq!(Config::load_from(&path), None);
    }

    #[test]
    fn test_load_from_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nquiet = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.output.quiet);
        assert!(config.write.atomic);
    }
}
