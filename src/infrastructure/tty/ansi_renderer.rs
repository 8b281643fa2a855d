use std::io::Write;

use crossterm::cursor::{Hide, MoveUp, Show};
use crossterm::queue;
use crossterm::style::{self, Print, PrintStyledContent, Stylize};

use crate::domain::primitive::{Color, LineStyle, MenuLine, Theme};
use crate::shared::error::AppError;

/// Marker drawn in front of the row under the cursor.
const CURSOR_MARKER: &str = "> ";
/// Blank columns in front of every other selectable row.
const CURSOR_BLANK: &str = "  ";

/// Convert a domain `Color` to a crossterm color.
fn to_crossterm_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
        Color::Blue => style::Color::Blue,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
    }
}

/// Writes menu output as VT100/ANSI control sequences.
///
/// Every row starts with a carriage return so a redraw overwrites the row
/// from column 0. Commands are queued on the writer; `flush` pushes them
/// out to the terminal.
pub struct AnsiRenderer<W: Write> {
    out: W,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_prompt(&mut self, prompt: &str, theme: &Theme) -> Result<(), AppError> {
        let accent = to_crossterm_color(theme.accent);
        queue!(
            self.out,
            PrintStyledContent(format!("{prompt}:").bold().with(accent)),
            Print("\n"),
        )
        .map_err(AppError::Output)
    }

    pub fn write_line(
        &mut self,
        line: &MenuLine,
        theme: &Theme,
        newline: bool,
    ) -> Result<(), AppError> {
        queue!(self.out, Print("\r")).map_err(AppError::Output)?;

        let body = match line.style {
            LineStyle::Active => {
                let accent = to_crossterm_color(theme.accent);
                queue!(
                    self.out,
                    PrintStyledContent(CURSOR_MARKER.with(accent)),
                    Print(" "),
                    PrintStyledContent(line.text.as_str().with(accent)),
                )
            }
            LineStyle::Inactive => queue!(
                self.out,
                Print(CURSOR_BLANK),
                Print(" "),
                Print(&line.text),
            ),
            LineStyle::Hint => {
                let hint = to_crossterm_color(theme.hint);
                queue!(self.out, PrintStyledContent(line.text.as_str().with(hint)))
            }
        };
        body.map_err(AppError::Output)?;

        if newline {
            queue!(self.out, Print("\n")).map_err(AppError::Output)?;
        }
        Ok(())
    }

    pub fn cursor_up(&mut self, lines: u16) -> Result<(), AppError> {
        queue!(self.out, MoveUp(lines)).map_err(AppError::Output)
    }

    pub fn hide_cursor(&mut self) -> Result<(), AppError> {
        queue!(self.out, Hide).map_err(AppError::Output)
    }

    pub fn show_cursor(&mut self) -> Result<(), AppError> {
        queue!(self.out, Show).map_err(AppError::Output)
    }

    pub fn finish(&mut self) -> Result<(), AppError> {
        queue!(self.out, Print("\r\n")).map_err(AppError::Output)
    }

    pub fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush().map_err(AppError::Output)
    }
}
