//! Shared configuration loader for the kiste toolchain.
//!
//! `defaults/kiste.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer project files and command
//! line overrides on top of those defaults via [`Loader`] before deserializing
//! into [`KisteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use kiste_compiler::CompileOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/kiste.default.toml");

/// File picked up from the working directory when present.
pub const PROJECT_CONFIG_FILE: &str = "kiste.toml";

/// Top-level configuration consumed by kiste applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KisteConfig {
    pub compile: CompileConfig,
}

/// Mirrors [`CompileOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompileConfig {
    pub report_exceptions: bool,
    pub line_directives: bool,
    pub runtime_path: String,
}

impl CompileConfig {
    pub fn to_options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_report_exceptions(self.report_exceptions)
            .with_line_directives(self.line_directives)
            .with_runtime_path(self.runtime_path.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KisteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KisteConfig, ConfigError> {
    Loader::new().build()
}
