//! Shared configuration loader for the gsheets-syntax toolchain.
//!
//! `defaults/gsheets.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`GrammarToolConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use gsheets_grammar::GrammarMetadata;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/gsheets.default.toml");

/// Top-level configuration consumed by gsheets-syntax applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarToolConfig {
    pub language: LanguageConfig,
    pub assembler: AssemblerConfig,
}

/// Fixed metadata of the generated grammar document.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub name: String,
    pub scope_name: String,
    pub schema: String,
    pub function_scope: String,
}

impl LanguageConfig {
    /// The metadata value the assembler consumes.
    pub fn metadata(&self) -> GrammarMetadata {
        GrammarMetadata {
            name: self.name.clone(),
            scope_name: self.scope_name.clone(),
            schema: self.schema.clone(),
            function_scope: self.function_scope.clone(),
        }
    }
}

/// Mirrors the knobs exposed by the grammar assembler.
#[derive(Debug, Clone, Deserialize)]
pub struct AssemblerConfig {
    pub fragments_dir: PathBuf,
    pub output: PathBuf,
    pub sort_functions: bool,
    /// Optional grammar to merge into; absent means build from scratch.
    pub base_grammar: Option<PathBuf>,
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
    pub fn build(self) -> Result<GrammarToolConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GrammarToolConfig, ConfigError> {
    Loader::new().build()
}
