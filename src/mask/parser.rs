use super::model::{Pattern, Slot, SlotKind};

/// Compiles a mask string. `#` is a digit, `A` a letter, `*` either;
/// every other character is a literal. There is no escape syntax, so
/// those three characters can never appear as literals.
pub fn compile(mask: &str) -> Pattern {
    let slots = mask.chars().map(parse_slot).collect::<Vec<_>>();
    Pattern::new(mask, slots)
}

fn parse_slot(ch: char) -> Slot {
    match ch {
        '#' => Slot::Input(SlotKind::Digit),
        'A' => Slot::Input(SlotKind::Letter),
        '*' => Slot::Input(SlotKind::Alphanumeric),
        _ => Slot::Literal(ch),
    }
}
