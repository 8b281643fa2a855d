use crate::domain::primitive::{Key, MenuLine, Theme};
use crate::shared::error::AppError;

/// Terminal side effects of a menu session.
///
/// Defines the boundary between the interaction loop and the real terminal.
/// The concrete implementation (`TtyTerminal`) lives in infrastructure.
pub trait TerminalPort {
    /// Block until one key is pressed and return it decoded.
    fn read_key(&mut self) -> Result<Key, AppError>;

    /// Print the prompt line, followed by a line break.
    fn write_prompt(&mut self, prompt: &str, theme: &Theme) -> Result<(), AppError>;

    /// Print one menu row from column 0, optionally followed by a line break.
    fn write_line(
        &mut self,
        line: &MenuLine,
        theme: &Theme,
        newline: bool,
    ) -> Result<(), AppError>;

    /// Move the output cursor up `lines` rows.
    fn cursor_up(&mut self, lines: u16) -> Result<(), AppError>;

    fn hide_cursor(&mut self) -> Result<(), AppError>;

    fn show_cursor(&mut self) -> Result<(), AppError>;

    /// Terminate the last row so later output starts on a fresh line.
    fn finish(&mut self) -> Result<(), AppError>;

    fn flush(&mut self) -> Result<(), AppError>;
}
