use crate::infrastructure::tty::TtyTerminal;

/// Creates the concrete TerminalPort used by `Menu::display`.
pub fn create_tty_terminal() -> TtyTerminal {
    TtyTerminal::new()
}
