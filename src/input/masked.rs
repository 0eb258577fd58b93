use crate::input::text_edit;
use crate::mask::format::{self, DEFAULT_MASK_CHAR, LiteralMode, MaskOutput};
use crate::mask::{Pattern, PatternCache, presets};
use crate::validation::{ValidationEvent, ValidationReporter};
use std::fmt;
use std::sync::Arc;

/// Receives `(raw, formatted)`; `raw` is `None` when nothing is filled.
pub type ValueCallback = Box<dyn FnMut(Option<&str>, &str) + Send>;

/// One bound input. Owns its current raw/formatted pair; every edit
/// re-derives that pair from the full edited display text.
pub struct MaskedInput {
    pattern: Arc<Pattern>,
    mask_char: char,
    literal_mode: LiteralMode,
    output: MaskOutput,
    on_input: Option<ValueCallback>,
    on_change: Option<ValueCallback>,
    validation: Option<ValidationReporter>,
}

impl MaskedInput {
    pub fn new(pattern: Arc<Pattern>) -> Self {
        Self {
            pattern,
            mask_char: DEFAULT_MASK_CHAR,
            literal_mode: LiteralMode::default(),
            output: MaskOutput::empty(),
            on_input: None,
            on_change: None,
            validation: None,
        }
    }

    /// Accepts a preset name (`PHONE_US`) or a pattern string.
    pub fn from_source(cache: &mut PatternCache, source: &str) -> Self {
        Self::new(cache.get_or_compile(presets::resolve(source)))
    }

    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub fn with_literal_mode(mut self, literal_mode: LiteralMode) -> Self {
        self.literal_mode = literal_mode;
        self.output = format::apply(&self.pattern, self.output.formatted.as_str(), literal_mode);
        self
    }

    /// Initial value; formats it without firing callbacks or validation.
    pub fn with_value(mut self, value: &str) -> Self {
        self.output = format::apply(&self.pattern, value, self.literal_mode);
        self
    }

    pub fn with_on_input<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&str>, &str) + Send + 'static,
    {
        self.on_input = Some(Box::new(callback));
        self
    }

    pub fn with_on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&str>, &str) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn with_validation(mut self, reporter: ValidationReporter) -> Self {
        self.validation = Some(reporter);
        self
    }

    /// Edit event: `text` is the whole edited display text.
    pub fn input(&mut self, text: &str) -> &MaskOutput {
        self.output = format::apply(&self.pattern, text, self.literal_mode);
        tracing::debug!(
            pattern = self.pattern.source(),
            raw = ?self.output.raw,
            formatted = self.output.formatted.as_str(),
            "mask input"
        );

        if let Some(callback) = &mut self.on_input {
            callback(self.output.raw.as_deref(), self.output.formatted.as_str());
        }
        if let Some(reporter) = &mut self.validation {
            reporter.report(ValidationEvent::Change, self.output.raw.as_deref());
        }
        &self.output
    }

    /// Commit event carrying new text, e.g. a paste followed by blur.
    pub fn change(&mut self, text: &str) -> &MaskOutput {
        self.output = format::apply(&self.pattern, text, self.literal_mode);
        self.commit();
        &self.output
    }

    /// Finalizes the current value.
    pub fn commit(&mut self) {
        tracing::debug!(
            pattern = self.pattern.source(),
            raw = ?self.output.raw,
            "mask commit"
        );
        if let Some(callback) = &mut self.on_change {
            callback(self.output.raw.as_deref(), self.output.formatted.as_str());
        }
        if let Some(reporter) = &mut self.validation {
            reporter.report(ValidationEvent::Commit, self.output.raw.as_deref());
        }
    }

    pub fn clear(&mut self) -> &MaskOutput {
        self.input("")
    }

    /// Types `ch` at display position `caret`; returns the next caret.
    pub fn insert_at(&mut self, caret: usize, ch: char) -> usize {
        let caret = self.clamp_caret(caret);
        let raw_before = format::raw_index_at(&self.pattern, caret);

        let mut text = self.output.formatted.clone();
        let mut cursor = caret;
        text_edit::insert_char(&mut text, &mut cursor, ch);
        self.input(text.as_str());

        let accepted = self.output.raw_str().chars().nth(raw_before) == Some(ch);
        if accepted {
            self.clamp_caret(format::display_pos_after(&self.pattern, raw_before + 1))
        } else {
            self.clamp_caret(caret)
        }
    }

    /// Removes the filled character before `caret`, skipping literals.
    pub fn backspace_at(&mut self, caret: usize) -> usize {
        let caret = self.clamp_caret(caret);
        let raw_before = format::raw_index_at(&self.pattern, caret);
        if raw_before == 0 {
            return caret;
        }

        let target = format::display_pos_after(&self.pattern, raw_before) - 1;
        let mut text = self.output.formatted.clone();
        text_edit::remove_char_at(&mut text, target);
        self.input(text.as_str());

        self.clamp_caret(format::display_pos_after(&self.pattern, raw_before - 1))
    }

    /// Removes the filled character at or after `caret`.
    pub fn delete_at(&mut self, caret: usize) -> usize {
        let caret = self.clamp_caret(caret);
        let raw_at = format::raw_index_at(&self.pattern, caret);
        if raw_at >= self.output.raw_len() {
            return caret;
        }

        let target = format::display_pos_after(&self.pattern, raw_at + 1) - 1;
        let mut text = self.output.formatted.clone();
        text_edit::remove_char_at(&mut text, target);
        self.input(text.as_str());

        self.clamp_caret(caret)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn output(&self) -> &MaskOutput {
        &self.output
    }

    pub fn raw(&self) -> Option<&str> {
        self.output.raw.as_deref()
    }

    pub fn formatted(&self) -> &str {
        self.output.formatted.as_str()
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    pub fn placeholder(&self) -> String {
        format::placeholder(&self.pattern, self.mask_char)
    }

    /// Formatted value padded with the remaining placeholder.
    pub fn display(&self) -> String {
        format::display_with_placeholder(&self.pattern, &self.output, self.mask_char)
    }

    pub fn is_complete(&self) -> bool {
        format::is_complete(&self.pattern, &self.output)
    }

    pub fn validation(&self) -> Option<&ValidationReporter> {
        self.validation.as_ref()
    }

    fn clamp_caret(&self, caret: usize) -> usize {
        caret.min(self.output.formatted_len())
    }
}

impl fmt::Debug for MaskedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedInput")
            .field("pattern", &self.pattern.source())
            .field("mask_char", &self.mask_char)
            .field("literal_mode", &self.literal_mode)
            .field("output", &self.output)
            .field("validation", &self.validation)
            .finish()
    }
}
