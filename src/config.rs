use crate::input::MaskedInput;
use crate::mask::format::{DEFAULT_MASK_CHAR, LiteralMode};
use crate::mask::{PatternCache, presets};
use crate::validation::{
    ReportChannel, Trigger, ValidationConfig, ValidationReporter, ValidatorRegistry,
    ValidityCallback, validators,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_ATTRIBUTE: &str = "data-valid";

/// One masked field as written in a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Preset name or pattern string.
    pub pattern: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
    #[serde(default)]
    pub literals: LiteralMode,
    #[serde(default)]
    pub value: Option<String>,
    /// Extra regex validators, registered under their key.
    #[serde(default)]
    pub validators: IndexMap<String, String>,
    #[serde(default)]
    pub validation: Option<ValidationSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSpec {
    pub validator: String,
    #[serde(default)]
    pub report_as: ReportKind,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub trigger: Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    #[default]
    State,
    Attribute,
    Callback,
}

fn default_mask_char() -> char {
    DEFAULT_MASK_CHAR
}

impl FieldConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: None,
            mask_char: DEFAULT_MASK_CHAR,
            literals: LiteralMode::default(),
            value: None,
            validators: IndexMap::new(),
            validation: None,
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(ConfigError::Yaml)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_yaml_str(source.as_str())?;
        tracing::debug!(path = %path.display(), pattern = config.pattern.as_str(), "loaded field config");
        Ok(config)
    }

    pub fn pattern_source(&self) -> &str {
        presets::resolve(self.pattern.as_str())
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.pattern.as_str())
    }

    /// Built-in validators plus the regex entries of this field.
    pub fn registry(&self) -> Result<ValidatorRegistry, ConfigError> {
        let mut registry = ValidatorRegistry::with_builtins();
        for (key, pattern) in &self.validators {
            let validator = validators::matching(pattern).map_err(|source| ConfigError::Regex {
                key: key.clone(),
                source,
            })?;
            registry.register(key.as_str(), validator);
        }
        Ok(registry)
    }

    /// `callback` backs `report_as: callback`; without one that channel
    /// falls back to state flags.
    pub fn validation_config(&self, callback: Option<ValidityCallback>) -> Option<ValidationConfig> {
        let spec = self.validation.as_ref()?;
        let channel = match (spec.report_as, callback) {
            (ReportKind::State, _) => ReportChannel::StateFlag,
            (ReportKind::Attribute, _) => ReportChannel::Attribute(
                spec.attribute
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ATTRIBUTE.to_string()),
            ),
            (ReportKind::Callback, Some(callback)) => ReportChannel::Callback(callback),
            (ReportKind::Callback, None) => {
                tracing::warn!("callback reporting requested without a callback; using state flags");
                ReportChannel::StateFlag
            }
        };

        Some(
            ValidationConfig::key(spec.validator.clone())
                .with_trigger(spec.trigger)
                .report_as(channel),
        )
    }

    pub fn build_input(
        &self,
        cache: &mut PatternCache,
        callback: Option<ValidityCallback>,
    ) -> Result<MaskedInput, ConfigError> {
        let mut input = MaskedInput::new(cache.get_or_compile(self.pattern_source()))
            .with_mask_char(self.mask_char)
            .with_literal_mode(self.literals);

        if let Some(value) = &self.value {
            input = input.with_value(value.as_str());
        }
        if let Some(config) = self.validation_config(callback) {
            let registry = self.registry()?;
            input = input.with_validation(ValidationReporter::new(config, &registry));
        }
        Ok(input)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Regex { key: String, source: regex::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read config: {err}"),
            Self::Yaml(err) => write!(f, "invalid config: {err}"),
            Self::Regex { key, source } => write!(f, "validator '{key}' has an invalid regex: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            Self::Regex { source, .. } => Some(source),
        }
    }
}
