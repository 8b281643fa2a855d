//! Interactive single-choice menu for the terminal.
//!
//! ```no_run
//! use cliselect::Menu;
//!
//! let mut menu = Menu::new("Select IDE");
//! menu.add_item("VS Code", "vscode")
//!     .add_item("Vim", "vim")
//!     .add_hint("esc to cancel");
//!
//! let choice = menu.display();
//! if choice.is_empty() {
//!     println!("No selection");
//! }
//! ```

mod domain;
mod infrastructure;
mod interface_adapter;
mod shared;
mod usecase;

pub use domain::model::Menu;
pub use domain::primitive::{Color, Key, LineStyle, MenuItem, MenuLine, Theme, decode_key};
pub use infrastructure::tty::{AnsiRenderer, TtyKeyReader, TtyTerminal};
pub use interface_adapter::port::TerminalPort;
pub use shared::error::AppError;
pub use usecase::menu_session::MenuSession;
