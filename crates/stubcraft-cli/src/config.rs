//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the [`Layout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (must exist when given)
//! 2. `.stubcraft.toml` in the current directory
//! 3. `config.toml` in the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stubcraft_core::domain::Layout;

use crate::error::{CliError, CliResult};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stubcraft.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory and namespace conventions of the target project.
    pub layout: Layout,
    /// Stub override settings.
    pub stubs: StubConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubConfig {
    /// Directory holding `<kind>.stub` overrides.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the standard locations plus `config_file`.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::load_from(
            Some(&Self::config_path()),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    /// Layered load with explicit paths.
    ///
    /// `global` and `local` are optional sources; `explicit` is required
    /// when present.
    pub fn load_from(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
    ) -> CliResult<Self> {
        let defaults = toml::to_string(&Self::default()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        })?;

        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        if let Some(global) = global {
            builder =
                builder.add_source(File::from(global).format(FileFormat::Toml).required(false));
        }
        builder = builder.add_source(File::from(local).format(FileFormat::Toml).required(false));
        if let Some(explicit) = explicit {
            debug!(path = %explicit.display(), "Using explicit config file");
            builder =
                builder.add_source(File::from(explicit).format(FileFormat::Toml).required(true));
        }

        let config: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        config.layout.validate().map_err(|e| CliError::ConfigError {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stubcraft.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stubcraft", "stubcraft")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load(dir: &TempDir, explicit: Option<&Path>) -> CliResult<AppConfig> {
        AppConfig::load_from(
            Some(&dir.path().join("global.toml")),
            &dir.path().join(LOCAL_CONFIG_FILE),
            explicit,
        )
    }

    #[test]
    fn defaults_without_files() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load(&dir, None).unwrap(), AppConfig::default());
    }

    #[test]
    fn default_marker_survives_round_trip() {
        let dir = TempDir::new().unwrap();
        let cfg = load(&dir, None).unwrap();
        assert_eq!(cfg.layout.marker, "//:end-bindings:");
    }

    #[test]
    fn local_overrides_global() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("global.toml"),
            "[layout]\nmarker = \"// GLOBAL\"\ncontract_suffix = \"Contract\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[layout]\nmarker = \"// LOCAL\"\n",
        )
        .unwrap();

        let cfg = load(&dir, None).unwrap();
        assert_eq!(cfg.layout.marker, "// LOCAL");
        assert_eq!(cfg.layout.contract_suffix, "Contract");
        assert_eq!(cfg.layout.root_namespace, "App");
    }

    #[test]
    fn explicit_file_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.conf");
        fs::write(&explicit, "[stubs]\npath = \"stubs\"\n[output]\nno_color = true\n").unwrap();

        let cfg = load(&dir, Some(&explicit)).unwrap();
        assert_eq!(cfg.stubs.path, Some(PathBuf::from("stubs")));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir, Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn invalid_layout_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(LOCAL_CONFIG_FILE), "[layout]\nmarker = \"\"\n").unwrap();
        let err = load(&dir, None).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let written = AppConfig::default().to_toml().unwrap();
        fs::write(dir.path().join(LOCAL_CONFIG_FILE), written).unwrap();
        assert_eq!(load(&dir, None).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
