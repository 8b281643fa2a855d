use std::io::{self, Stdout};

use crate::domain::primitive::{Key, MenuLine, Theme};
use crate::infrastructure::tty::{AnsiRenderer, TtyKeyReader};
use crate::interface_adapter::port::TerminalPort;
use crate::shared::error::AppError;

/// Concrete implementation of `TerminalPort` for an interactive session.
///
/// Keys come from the controlling terminal device, output goes to stdout.
pub struct TtyTerminal {
    keys: TtyKeyReader,
    renderer: AnsiRenderer<Stdout>,
}

impl TtyTerminal {
    pub fn new() -> Self {
        Self {
            keys: TtyKeyReader::new(),
            renderer: AnsiRenderer::new(io::stdout()),
        }
    }
}

impl Default for TtyTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPort for TtyTerminal {
    fn read_key(&mut self) -> Result<Key, AppError> {
        self.keys.read_key()
    }

    fn write_prompt(&mut self, prompt: &str, theme: &Theme) -> Result<(), AppError> {
        self.renderer.write_prompt(prompt, theme)
    }

    fn write_line(
        &mut self,
        line: &MenuLine,
        theme: &Theme,
        newline: bool,
    ) -> Result<(), AppError> {
        self.renderer.write_line(line, theme, newline)
    }

    fn cursor_up(&mut self, lines: u16) -> Result<(), AppError> {
        self.renderer.cursor_up(lines)
    }

    fn hide_cursor(&mut self) -> Result<(), AppError> {
        self.renderer.hide_cursor()
    }

    fn show_cursor(&mut self) -> Result<(), AppError> {
        self.renderer.show_cursor()
    }

    fn finish(&mut self) -> Result<(), AppError> {
        self.renderer.finish()
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.renderer.flush()
    }
}
