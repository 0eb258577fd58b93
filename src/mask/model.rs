#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Digit,
    Letter,
    Alphanumeric,
}

impl SlotKind {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Digit => ch.is_ascii_digit(),
            Self::Letter => ch.is_ascii_alphabetic(),
            Self::Alphanumeric => ch.is_ascii_alphanumeric(),
        }
    }

    pub fn mask_char(self) -> char {
        match self {
            Self::Digit => '#',
            Self::Letter => 'A',
            Self::Alphanumeric => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Input(SlotKind),
    Literal(char),
}

impl Slot {
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Self::Input(kind) => kind.accepts(ch),
            Self::Literal(_) => false,
        }
    }
}

/// A compiled mask. Immutable once built; the source string is kept so
/// caches and diagnostics can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    slots: Vec<Slot>,
}

impl Pattern {
    pub(super) fn new(source: impl Into<String>, slots: Vec<Slot>) -> Self {
        Self {
            source: source.into(),
            slots,
        }
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots the user fills.
    pub fn input_len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_literal()).count()
    }

    pub fn has_input_slots(&self) -> bool {
        self.slots.iter().any(|slot| !slot.is_literal())
    }

    /// True when at least one input slot would take `ch`.
    pub fn accepts_anywhere(&self, ch: char) -> bool {
        self.slots.iter().any(|slot| slot.accepts(ch))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source.as_str())
    }
}
