use crate::terminal::terminal_event::{
    KeyCode, KeyEvent, KeyModifiers, TerminalEvent, TerminalSize,
};
use crate::ui::frame::RenderFrame;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::event::{Event, KeyEventKind, poll, read};
use crossterm::style::{Attribute, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Inline terminal surface: frames are drawn in place starting at the row the
/// cursor was on when the terminal was opened.
pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    block_start_row: u16,
    last_line_count: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let (_, row) = cursor::position()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            block_start_row: row,
            last_line_count: 0,
        })
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn set_line_wrap(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(self.stdout, terminal::EnableLineWrap)?;
        } else {
            execute!(self.stdout, terminal::DisableLineWrap)?;
        }
        Ok(())
    }

    pub fn size(&self) -> TerminalSize {
        self.size
    }

    pub fn poll(&self, timeout: Duration) -> io::Result<bool> {
        poll(timeout)
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
                    self.size = TerminalSize { width, height };
                    return Ok(TerminalEvent::Resize(self.size));
                }
                _ => continue,
            }
        }
    }

    pub fn draw(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let line_count = u16::try_from(frame.lines.len()).unwrap_or(u16::MAX);
        let overflow = self
            .block_start_row
            .saturating_add(line_count)
            .saturating_sub(self.size.height);
        self.block_start_row = self.block_start_row.saturating_sub(overflow);

        queue!(
            self.stdout,
            cursor::Hide,
            cursor::MoveTo(0, self.block_start_row),
            terminal::Clear(terminal::ClearType::FromCursorDown)
        )?;
        for (idx, line) in frame.lines.iter().enumerate() {
            if idx > 0 {
                write!(self.stdout, "\r\n")?;
            }
            self.write_line(line)?;
        }

        if let Some(pos) = frame.cursor {
            queue!(
                self.stdout,
                cursor::MoveTo(pos.col, self.block_start_row.saturating_add(pos.row)),
                cursor::Show
            )?;
        }
        self.last_line_count = line_count;
        self.stdout.flush()
    }

    /// Leave the cursor below the last drawn frame.
    pub fn finish(&mut self) -> io::Result<()> {
        let row = self.block_start_row.saturating_add(self.last_line_count);
        if row >= self.size.height {
            write!(self.stdout, "\r\n")?;
        } else {
            queue!(self.stdout, cursor::MoveTo(0, row))?;
        }
        queue!(self.stdout, cursor::Show)?;
        self.stdout.flush()
    }

    /// Undo everything the session changed. Every step runs even when an
    /// earlier one fails; the first failure is reported.
    pub fn restore(&mut self) -> io::Result<()> {
        first_error([
            self.finish(),
            self.set_line_wrap(true),
            self.exit_raw_mode(),
        ])
    }

    fn write_line(&mut self, line: &SpanLine) -> io::Result<()> {
        for span in line {
            let styled = !span.style.is_plain();
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }

            write!(self.stdout, "{}", span.text)?;

            if styled {
                queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        Ok(())
    }
}

fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().collect()
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Reset => crossterm::style::Color::Reset,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
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
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_reports_earliest_failure() {
        let results = [
            Ok(()),
            Err(io::Error::other("cursor")),
            Err(io::Error::other("raw mode")),
        ];
        let err = first_error(results).expect_err("should fail");
        assert_eq!(err.to_string(), "cursor");
    }

    #[test]
    fn first_error_passes_when_all_steps_succeed() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn first_error_still_evaluates_later_steps() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, fail: bool| {
            ran.push(name);
            if fail {
                Err(io::Error::other(name))
            } else {
                Ok(())
            }
        };
        let results = [step("finish", true), step("wrap", false), step("raw", false)];
        assert!(first_error(results).is_err());
        assert_eq!(ran, vec!["finish", "wrap", "raw"]);
    }
}
