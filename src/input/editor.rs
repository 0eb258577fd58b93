use crate::input::MaskedInput;
use crate::input::text_edit;
use crate::terminal::{FieldLine, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    Committed,
    Exit,
}

/// Drives a `MaskedInput` from key events and tracks the caret.
#[derive(Debug)]
pub struct MaskEditor {
    input: MaskedInput,
    caret: usize,
}

impl MaskEditor {
    pub fn new(input: MaskedInput) -> Self {
        let caret = input.output().formatted_len();
        Self { input, caret }
    }

    pub fn input(&self) -> &MaskedInput {
        &self.input
    }

    pub fn into_input(self) -> MaskedInput {
        self.input
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => KeyOutcome::Exit,
                KeyCode::Char('u') => {
                    self.input.clear();
                    self.caret = 0;
                    KeyOutcome::Handled
                }
                _ => KeyOutcome::Ignored,
            };
        }

        match key.code {
            KeyCode::Char(ch) => {
                self.caret = self.input.insert_at(self.caret, ch);
                KeyOutcome::Handled
            }
            KeyCode::Backspace => {
                self.caret = self.input.backspace_at(self.caret);
                KeyOutcome::Handled
            }
            KeyCode::Delete => {
                self.caret = self.input.delete_at(self.caret);
                KeyOutcome::Handled
            }
            KeyCode::Left => self.move_to(self.caret.saturating_sub(1)),
            KeyCode::Right => self.move_to(self.caret + 1),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(usize::MAX),
            KeyCode::Enter | KeyCode::Tab => {
                self.input.commit();
                KeyOutcome::Committed
            }
            KeyCode::Esc => KeyOutcome::Exit,
            KeyCode::Unknown => KeyOutcome::Ignored,
        }
    }

    fn move_to(&mut self, caret: usize) -> KeyOutcome {
        let next = caret.min(self.input.output().formatted_len());
        if next == self.caret {
            return KeyOutcome::Ignored;
        }
        self.caret = next;
        KeyOutcome::Handled
    }

    /// Renders into `buf` and returns the line view borrowing it.
    pub fn field_line<'a>(&'a self, label: &'a str, buf: &'a mut String) -> FieldLine<'a> {
        *buf = self.input.display();
        let display: &'a str = buf.as_str();
        let formatted = self.input.formatted();
        // The formatted value is a byte prefix of the display text.
        let tail_start = formatted.len().min(display.len());
        let valid = self.input.validation().and_then(|reporter| reporter.last_result());

        FieldLine {
            label,
            formatted,
            placeholder_tail: &display[tail_start..],
            caret_col: text_edit::column_at(display, self.caret),
            valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::PatternCache;
    use crate::validation::{Trigger, ValidationConfig, ValidationReporter, ValidatorRegistry};

    fn editor(source: &str) -> MaskEditor {
        MaskEditor::new(MaskedInput::from_source(&mut PatternCache::new(), source))
    }

    fn type_str(editor: &mut MaskEditor, text: &str) {
        for ch in text.chars() {
            editor.on_key(KeyEvent::plain(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_builds_formatted_value() {
        let mut editor = editor("PHONE_US");
        type_str(&mut editor, "555abc1234567");
        assert_eq!(editor.input().formatted(), "(555) 123-4567");
        assert_eq!(editor.input().raw(), Some("5551234567"));
        assert_eq!(editor.caret(), 14);
    }

    #[test]
    fn arrows_stay_inside_formatted_value() {
        let mut editor = editor("##/##");
        type_str(&mut editor, "123");
        assert_eq!(editor.caret(), 4);
        assert_eq!(editor.on_key(KeyEvent::plain(KeyCode::Right)), KeyOutcome::Ignored);
        assert_eq!(editor.on_key(KeyEvent::plain(KeyCode::Home)), KeyOutcome::Handled);
        assert_eq!(editor.caret(), 0);
        assert_eq!(editor.on_key(KeyEvent::plain(KeyCode::Left)), KeyOutcome::Ignored);
        editor.on_key(KeyEvent::plain(KeyCode::End));
        assert_eq!(editor.caret(), 4);
    }

    #[test]
    fn backspace_and_clear() {
        let mut editor = editor("##/##");
        type_str(&mut editor, "1234");
        editor.on_key(KeyEvent::plain(KeyCode::Backspace));
        assert_eq!(editor.input().formatted(), "12/3");
        assert_eq!(editor.caret(), 4);

        editor.on_key(KeyEvent::ctrl(KeyCode::Char('u')));
        assert_eq!(editor.input().raw(), None);
        assert_eq!(editor.caret(), 0);
    }

    #[test]
    fn enter_commits_and_escape_exits() {
        let config = ValidationConfig::key("BRAZILIAN_CPF").with_trigger(Trigger::OnCommit);
        let reporter = ValidationReporter::new(config, &ValidatorRegistry::default());
        let input = MaskedInput::from_source(&mut PatternCache::new(), "BRAZILIAN_CPF")
            .with_validation(reporter);
        let mut editor = MaskEditor::new(input);

        type_str(&mut editor, "14550200286");
        assert_eq!(editor.input().validation().and_then(|r| r.last_result()), None);

        assert_eq!(editor.on_key(KeyEvent::plain(KeyCode::Enter)), KeyOutcome::Committed);
        assert_eq!(editor.input().validation().and_then(|r| r.last_result()), Some(true));
        assert_eq!(editor.on_key(KeyEvent::plain(KeyCode::Esc)), KeyOutcome::Exit);
        assert_eq!(editor.on_key(KeyEvent::ctrl(KeyCode::Char('c'))), KeyOutcome::Exit);
    }

    #[test]
    fn field_line_splits_value_and_placeholder() {
        let mut editor = editor("##/##");
        type_str(&mut editor, "12");
        let mut buf = String::new();
        let line = editor.field_line("Date", &mut buf);
        assert_eq!(line.formatted, "12");
        assert_eq!(line.placeholder_tail, "/__");
        assert_eq!(line.caret_col, 2);
        assert_eq!(line.prefix_width(), 6);
        assert_eq!(line.valid, None);
    }
}
