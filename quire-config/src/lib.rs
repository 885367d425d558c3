//! Shared configuration loader for the quire toolchain.
//!
//! `defaults/quire.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuireConfig`],
//! which then builds the engine's style registry and content transforms.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use quire_engine::style::{Color, FontDescriptor, StyleRegistry};
use quire_engine::transform::{DiagramSettings, StyleSheet, TransformRegistry};
use quire_engine::Converter;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub use config::{ConfigError, ValueKind};

const DEFAULT_TOML: &str = include_str!("../defaults/quire.default.toml");

/// Top-level configuration consumed by quire applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuireConfig {
    pub styles: StylesConfig,
    pub highlight: HighlightConfig,
    pub diagram: DiagramConfig,
}

/// Font and color roles layered over the built-in styles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesConfig {
    #[serde(default)]
    pub fonts: BTreeMap<String, FontDescriptor>,
    #[serde(default)]
    pub colors: BTreeMap<String, Color>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    /// Style sheet name, see [`StyleSheet::NAMES`].
    pub style: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiagramConfig {
    pub languages: Vec<String>,
    pub scale: f32,
    pub image_scale_percent: f32,
}

impl From<&DiagramConfig> for DiagramSettings {
    fn from(config: &DiagramConfig) -> Self {
        DiagramSettings {
            languages: config.languages.clone(),
            scale: config.scale,
            image_scale_percent: config.image_scale_percent,
        }
    }
}

impl QuireConfig {
    /// The built-in styles with every configured role registered on top.
    pub fn style_registry(&self) -> StyleRegistry {
        let mut registry = StyleRegistry::with_defaults();
        let builtin = StyleRegistry::with_defaults();
        for (role, descriptor) in &self.styles.fonts {
            registry.register(canonical_role(role, &builtin.font_roles()), descriptor.clone());
        }
        for (role, color) in &self.styles.colors {
            registry.register_color(canonical_role(role, &builtin.color_roles()), *color);
        }
        registry
    }

    /// The highlighting style sheet named by `[highlight] style`.
    pub fn stylesheet(&self) -> Result<StyleSheet, ConfigError> {
        StyleSheet::named(&self.highlight.style).ok_or_else(|| {
            ConfigError::Message(format!(
                "unknown highlight style '{}', expected one of: {}",
                self.highlight.style,
                StyleSheet::NAMES.join(", ")
            ))
        })
    }

    pub fn diagram_settings(&self) -> DiagramSettings {
        DiagramSettings::from(&self.diagram)
    }

    /// A converter using the configured styles, highlighting and diagram rendering.
    pub fn converter(&self) -> Result<Converter, ConfigError> {
        self.validate()?;
        let styles = self.style_registry();
        let highlighter =
            Converter::highlighter(&styles, self.stylesheet()?, self.highlight.font_size);
        let transforms = TransformRegistry::with_defaults(highlighter, self.diagram_settings());
        Ok(Converter::new(styles, transforms))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("highlight.font_size", self.highlight.font_size),
            ("diagram.scale", self.diagram.scale),
            ("diagram.image_scale_percent", self.diagram.image_scale_percent),
        ];
        for (key, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Message(format!(
                    "{key} must be positive, got {value}"
                )));
            }
        }
        for (role, descriptor) in &self.styles.fonts {
            if descriptor.size.is_nan() || descriptor.size <= 0.0 {
                return Err(ConfigError::Message(format!(
                    "styles.fonts.{role}.size must be positive, got {}",
                    descriptor.size
                )));
            }
        }
        Ok(())
    }
}

/// Matches configured role names to the built-in ones regardless of case, since configuration
/// keys may come back lowercased.
fn canonical_role(role: &str, builtin: &[&str]) -> String {
    builtin
        .iter()
        .find(|known| known.eq_ignore_ascii_case(role))
        .map(|known| known.to_string())
        .unwrap_or_else(|| role.to_string())
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
    pub fn build(self) -> Result<QuireConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuireConfig, ConfigError> {
    Loader::new().build()
}
