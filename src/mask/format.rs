use super::model::{Pattern, Slot};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MASK_CHAR: char = '_';

/// When literal separators show up in the formatted value.
///
/// `Lazy` writes a separator run once the slot after it is filled, plus
/// the pattern's tail once every slot is filled. `Eager` always writes
/// the run right after the last filled slot, so `12` in `##/##` reads `12/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralMode {
    #[default]
    Lazy,
    Eager,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MaskOutput {
    /// `None` when no input slot is filled; never an empty string.
    pub raw: Option<String>,
    pub formatted: String,
}

impl MaskOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn raw_str(&self) -> &str {
        self.raw.as_deref().unwrap_or_default()
    }

    pub fn raw_len(&self) -> usize {
        self.raw.as_deref().map_or(0, |raw| raw.chars().count())
    }

    pub fn formatted_len(&self) -> usize {
        self.formatted.chars().count()
    }
}

/// Re-derives raw and formatted values from arbitrary edited text.
///
/// Characters no input slot could take are stripped first. Each input
/// slot then takes the next character of its class, dropping the ones
/// in between. Literal slots consume nothing, except that a candidate
/// identical to the literal is read as its echo and skipped; this keeps
/// `apply(apply(x).formatted) == apply(x)` for letter/digit literals.
pub fn apply(pattern: &Pattern, candidate: &str, mode: LiteralMode) -> MaskOutput {
    let mut candidates = candidate
        .chars()
        .filter(|ch| pattern.accepts_anywhere(*ch))
        .peekable();

    let mut raw = String::new();
    let mut formatted = String::new();
    let mut pending = String::new();
    let mut complete = true;

    for slot in pattern.slots() {
        match *slot {
            Slot::Literal(literal) => {
                if candidates.peek() == Some(&literal) {
                    candidates.next();
                }
                pending.push(literal);
            }
            Slot::Input(kind) => {
                let Some(ch) = candidates.by_ref().find(|ch| kind.accepts(*ch)) else {
                    complete = false;
                    break;
                };
                formatted.push_str(pending.as_str());
                pending.clear();
                formatted.push(ch);
                raw.push(ch);
            }
        }
    }

    if raw.is_empty() {
        return MaskOutput::empty();
    }

    if complete || mode == LiteralMode::Eager {
        formatted.push_str(pending.as_str());
    }

    MaskOutput {
        raw: Some(raw),
        formatted,
    }
}

pub fn placeholder(pattern: &Pattern, mask_char: char) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Input(_) => mask_char,
            Slot::Literal(ch) => *ch,
        })
        .collect()
}

/// Formatted value followed by the rest of the placeholder. The
/// formatted value is always a slot-aligned prefix, so the tail starts
/// at its char count.
pub fn display_with_placeholder(pattern: &Pattern, output: &MaskOutput, mask_char: char) -> String {
    let mut out = output.formatted.clone();
    out.extend(
        placeholder(pattern, mask_char)
            .chars()
            .skip(output.formatted_len()),
    );
    out
}

pub fn is_complete(pattern: &Pattern, output: &MaskOutput) -> bool {
    output.raw_len() == pattern.input_len()
}

/// Number of input slots strictly before `display_pos`.
pub fn raw_index_at(pattern: &Pattern, display_pos: usize) -> usize {
    pattern
        .slots()
        .iter()
        .take(display_pos)
        .filter(|slot| !slot.is_literal())
        .count()
}

/// Caret position right after the `raw_count`-th input slot. For zero it
/// is the first input slot, skipping leading literals.
pub fn display_pos_after(pattern: &Pattern, raw_count: usize) -> usize {
    let slots = pattern.slots();
    if raw_count == 0 {
        return slots
            .iter()
            .position(|slot| !slot.is_literal())
            .unwrap_or(slots.len());
    }

    let mut seen = 0usize;
    for (idx, slot) in slots.iter().enumerate() {
        if slot.is_literal() {
            continue;
        }
        seen += 1;
        if seen == raw_count {
            return idx + 1;
        }
    }
    slots.len()
}
