use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, TerminalEvent};
use crossterm::event::{Event, KeyEventKind, read};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

/// One rendered masked field: `label: formatted` followed by the dimmed
/// placeholder tail and an optional validity marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine<'a> {
    pub label: &'a str,
    pub formatted: &'a str,
    pub placeholder_tail: &'a str,
    /// Display column of the caret inside `formatted + placeholder_tail`.
    pub caret_col: usize,
    pub valid: Option<bool>,
}

impl FieldLine<'_> {
    pub fn prefix_width(&self) -> usize {
        UnicodeWidthStr::width(self.label) + 2
    }
}

pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn read_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    return Ok(TerminalEvent::Key(map_key_event(key)));
                }
                Event::Resize(width, height) => {
                    return Ok(TerminalEvent::Resize { width, height });
                }
                _ => continue,
            }
        }
    }

    pub fn render_field(&mut self, line: &FieldLine<'_>) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(line.label),
            Print(": "),
            Print(line.formatted),
            SetForegroundColor(Color::DarkGrey),
            Print(line.placeholder_tail),
            ResetColor,
        )?;

        match line.valid {
            Some(true) => queue!(
                self.stdout,
                SetForegroundColor(Color::Green),
                Print("  ✓"),
                ResetColor
            )?,
            Some(false) => queue!(
                self.stdout,
                SetForegroundColor(Color::Red),
                Print("  ✗"),
                ResetColor
            )?,
            None => {}
        }

        let col = line.prefix_width() + line.caret_col;
        queue!(
            self.stdout,
            cursor::MoveToColumn(u16::try_from(col).unwrap_or(u16::MAX))
        )?;
        self.stdout.flush()
    }

    pub fn finish_line(&mut self) -> io::Result<()> {
        execute!(self.stdout, Print("\r\n"))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(event.code),
        modifiers: map_key_modifiers(event.modifiers),
    }
}

fn map_key_code(code: crossterm::event::KeyCode) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut mapped = KeyModifiers::NONE;
    if modifiers.contains(crossterm::event::KeyModifiers::SHIFT) {
        mapped |= KeyModifiers::SHIFT;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::CONTROL) {
        mapped |= KeyModifiers::CONTROL;
    }
    if modifiers.contains(crossterm::event::KeyModifiers::ALT) {
        mapped |= KeyModifiers::ALT;
    }
    mapped
}
