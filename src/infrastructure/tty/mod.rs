pub mod ansi_renderer;
pub mod raw_tty;
pub mod tty_terminal;

pub use ansi_renderer::AnsiRenderer;
pub use raw_tty::{TTY_PATH, TtyKeyReader};
pub use tty_terminal::TtyTerminal;
