//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::format::FormatChoice;

/// Suffix appended to the input file stem when deriving the output path
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_Testomatio";

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".tcmconv.yaml";

/// Converter configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix appended to the output file name
    pub output_suffix: Option<String>,

    /// Source format selection
    pub format: Option<FormatChoice>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/tcmconv/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Working directory config (.tcmconv.yaml)
        if let Ok(cwd) = std::env::current_dir() {
            if let Some(local) = Self::read_file(&cwd.join(LOCAL_CONFIG_FILE)) {
                config.merge(local);
            }
        }

        // 4. Environment variables
        if let Ok(suffix) = std::env::var("TCMCONV_OUTPUT_SUFFIX") {
            config.output_suffix = Some(suffix);
        }
        if let Ok(format) = std::env::var("TCMCONV_FORMAT") {
            match format.parse() {
                Ok(choice) => config.format = Some(choice),
                Err(e) => warn!(error = %e, "ignoring TCMCONV_FORMAT"),
            }
        }

        config
    }

    /// Read one config layer, skipping it when missing or malformed
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config file");
                return None;
            }
        };
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tcmconv")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.output_suffix.is_some() {
            self.output_suffix = other.output_suffix;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
    }

    /// Get the output suffix, falling back to the default
    pub fn output_suffix(&self) -> &str {
        self.output_suffix.as_deref().unwrap_or(DEFAULT_OUTPUT_SUFFIX)
    }

    /// Get the configured format selection
    pub fn format(&self) -> FormatChoice {
        self.format.unwrap_or_default()
    }

    /// Derive the output path: same directory and extension, suffixed stem
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = match input.extension() {
            Some(ext) => format!("{}{}.{}", stem, self.output_suffix(), ext.to_string_lossy()),
            None => format!("{}{}", stem, self.output_suffix()),
        };
        input.with_file_name(file_name)
    }
}
