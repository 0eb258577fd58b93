use super::validators::{Validator, ValidatorRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which input events run validation.
///
/// `OnChange` runs on every accepted edit, so partial values are reported
/// too. `OnCommit` runs only when the session is finalized (Enter, blur).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Trigger {
    #[default]
    #[serde(rename = "change")]
    OnChange,
    #[serde(rename = "commit")]
    OnCommit,
    #[serde(rename = "both")]
    Both,
}

impl Trigger {
    pub fn fires_on(self, event: ValidationEvent) -> bool {
        matches!(
            (self, event),
            (Self::Both, _)
                | (Self::OnChange, ValidationEvent::Change)
                | (Self::OnCommit, ValidationEvent::Commit)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationEvent {
    Change,
    Commit,
}

pub type ValidityCallback = Box<dyn FnMut(bool) + Send>;

/// Exactly one of these carries a validation result.
pub enum ReportChannel {
    /// Mutually exclusive `valid` / `invalid` states for the host to style.
    StateFlag,
    /// A named attribute holding `"true"` or `"false"`.
    Attribute(String),
    Callback(ValidityCallback),
}

impl fmt::Debug for ReportChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateFlag => f.write_str("StateFlag"),
            Self::Attribute(name) => f.debug_tuple("Attribute").field(name).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

pub enum ValidatorSource {
    Key(String),
    Direct(Validator),
}

impl fmt::Debug for ValidatorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Direct(_) => f.write_str("Direct(..)"),
        }
    }
}

#[derive(Debug)]
pub struct ValidationConfig {
    pub report_as: ReportChannel,
    pub trigger: Trigger,
    pub validator: ValidatorSource,
}

impl ValidationConfig {
    pub fn new(validator: ValidatorSource) -> Self {
        Self {
            report_as: ReportChannel::StateFlag,
            trigger: Trigger::default(),
            validator,
        }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::new(ValidatorSource::Key(key.into()))
    }

    pub fn direct(validator: Validator) -> Self {
        Self::new(ValidatorSource::Direct(validator))
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn report_as(mut self, channel: ReportChannel) -> Self {
        self.report_as = channel;
        self
    }
}

/// Runs the configured validator on gated events and publishes the
/// result through its single channel. Nothing is reported before the
/// first gated event.
pub struct ValidationReporter {
    channel: ReportChannel,
    trigger: Trigger,
    validator: Option<Validator>,
    last: Option<bool>,
}

impl ValidationReporter {
    pub fn new(config: ValidationConfig, registry: &ValidatorRegistry) -> Self {
        let validator = match config.validator {
            ValidatorSource::Direct(validator) => Some(validator),
            ValidatorSource::Key(key) => {
                let resolved = registry.resolve(key.as_str());
                if resolved.is_none() {
                    tracing::warn!(key = key.as_str(), "validator not registered; validation disabled");
                }
                resolved
            }
        };

        Self {
            channel: config.report_as,
            trigger: config.trigger,
            validator,
            last: None,
        }
    }

    /// Validates `raw` if `event` passes the trigger. The absence marker
    /// is handed to the validator as an empty string.
    pub fn report(&mut self, event: ValidationEvent, raw: Option<&str>) -> Option<bool> {
        if !self.trigger.fires_on(event) {
            return None;
        }
        let validator = self.validator.as_ref()?;
        let valid = validator(raw.unwrap_or_default());
        tracing::debug!(?event, valid, "validation reported");

        self.last = Some(valid);
        if let ReportChannel::Callback(callback) = &mut self.channel {
            callback(valid);
        }
        Some(valid)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn channel(&self) -> &ReportChannel {
        &self.channel
    }

    pub fn is_resolved(&self) -> bool {
        self.validator.is_some()
    }

    pub fn last_result(&self) -> Option<bool> {
        self.last
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.channel, ReportChannel::StateFlag) && self.last == Some(true)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.channel, ReportChannel::StateFlag) && self.last == Some(false)
    }

    pub fn state_class(&self) -> Option<&'static str> {
        if self.is_valid() {
            Some("valid")
        } else if self.is_invalid() {
            Some("invalid")
        } else {
            None
        }
    }

    pub fn attribute(&self) -> Option<(&str, &'static str)> {
        let ReportChannel::Attribute(name) = &self.channel else {
            return None;
        };
        let value = if self.last? { "true" } else { "false" };
        Some((name.as_str(), value))
    }
}

impl fmt::Debug for ValidationReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationReporter")
            .field("channel", &self.channel)
            .field("trigger", &self.trigger)
            .field("resolved", &self.validator.is_some())
            .field("last", &self.last)
            .finish()
    }
}
