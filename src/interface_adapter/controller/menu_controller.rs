use crate::domain::model::Menu;
use crate::interface_adapter::adapter::terminal_adapter_factory;
use crate::interface_adapter::port::TerminalPort;
use crate::shared::error::AppError;
use crate::usecase::menu_session::MenuSession;

/// Exit status used when the terminal cannot be driven.
const FATAL_EXIT_CODE: i32 = 1;

impl Menu {
    /// Show the menu on the controlling terminal and wait for a choice.
    ///
    /// Returns the selected id, or an empty string if the user cancelled
    /// with Escape. Callers must treat an empty string as "no selection".
    ///
    /// Terminal access failures are fatal: the error is logged and the
    /// process exits. Use [`Menu::try_display`] to handle them instead.
    pub fn display(&mut self) -> String {
        match self.try_display() {
            Ok(id) => id,
            Err(e) => {
                log::error!("menu aborted: {e}");
                eprintln!("cliselect: {e}");
                std::process::exit(FATAL_EXIT_CODE);
            }
        }
    }

    /// Like [`Menu::display`], but returns terminal failures to the caller.
    pub fn try_display(&mut self) -> Result<String, AppError> {
        self.display_with(terminal_adapter_factory::create_tty_terminal())
    }

    /// Run the menu against any terminal implementation.
    pub fn display_with<T: TerminalPort>(&mut self, port: T) -> Result<String, AppError> {
        MenuSession::new(port).run(self)
    }
}
