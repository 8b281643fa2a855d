use std::ops::{Deref, DerefMut};

use crate::domain::model::Menu;
use crate::domain::primitive::Key;
use crate::interface_adapter::port::TerminalPort;
use crate::shared::error::AppError;

/// Drives one interactive menu over a `TerminalPort`.
///
/// The session renders the menu once, then loops read key -> update cursor
/// -> redraw in place until the user confirms or cancels.
pub struct MenuSession<T: TerminalPort> {
    port: T,
}

impl<T: TerminalPort> MenuSession<T> {
    pub fn new(port: T) -> Self {
        Self { port }
    }

    /// Run the menu to completion.
    ///
    /// Returns the selected id, or an empty string when the user pressed
    /// Escape. The terminal cursor is visible again on every exit path.
    pub fn run(&mut self, menu: &mut Menu) -> Result<String, AppError> {
        menu.ensure_not_empty();

        self.port.write_prompt(menu.prompt(), menu.theme())?;
        render(&mut self.port, menu, false)?;

        self.port.hide_cursor()?;
        let mut port = HiddenCursor::new(&mut self.port);
        port.flush()?;

        loop {
            let key = port.read_key()?;
            log::debug!("key {:?} (code {}) at cursor {:?}", key, key.code(), menu.cursor());

            match key {
                Key::Escape => {
                    port.finish()?;
                    log::debug!("menu cancelled");
                    return Ok(String::new());
                }
                Key::Enter => {
                    let id = menu.take_selection();
                    render(&mut *port, menu, true)?;
                    port.finish()?;
                    log::debug!("menu selected {id:?}");
                    return Ok(id);
                }
                Key::Up => {
                    menu.move_up();
                    render(&mut *port, menu, true)?;
                }
                Key::Down => {
                    menu.move_down();
                    render(&mut *port, menu, true)?;
                }
                Key::Char(_) | Key::Ignored => {}
            }
        }
    }
}

/// Print every row of the menu.
///
/// On a redraw the output cursor first moves back to the first row so the
/// rows overwrite the previous render. The last row has no line break, which
/// keeps the output cursor on it.
fn render<T: TerminalPort + ?Sized>(
    port: &mut T,
    menu: &Menu,
    redraw: bool,
) -> Result<(), AppError> {
    let lines = menu.lines();

    if redraw && lines.len() > 1 {
        let up = u16::try_from(lines.len() - 1).unwrap_or(u16::MAX);
        port.cursor_up(up)?;
    }

    let last = lines.len().saturating_sub(1);
    for (index, line) in lines.iter().enumerate() {
        port.write_line(line, menu.theme(), index != last)?;
    }

    port.flush()
}

/// Shows the terminal cursor again when dropped.
struct HiddenCursor<'a, T: TerminalPort> {
    port: &'a mut T,
}

impl<'a, T: TerminalPort> HiddenCursor<'a, T> {
    fn new(port: &'a mut T) -> Self {
        Self { port }
    }
}

impl<T: TerminalPort> Deref for HiddenCursor<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.port
    }
}

impl<T: TerminalPort> DerefMut for HiddenCursor<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.port
    }
}

impl<T: TerminalPort> Drop for HiddenCursor<'_, T> {
    fn drop(&mut self) {
        // Best-effort restore; the session result is already decided.
        let _ = self.port.show_cursor();
        let _ = self.port.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::domain::primitive::{LineStyle, MenuLine, Theme};

    // =========================================================================
    // Mock implementation
    // =========================================================================

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Prompt(String),
        Line(String, LineStyle, bool),
        CursorUp(u16),
        Hide,
        Show,
        Finish,
    }

    /// Replays a fixed key script and records every output call.
    /// Running out of keys reports a read error.
    struct MockTerminalPort {
        keys: VecDeque<Key>,
        calls: Vec<Call>,
        reads: usize,
    }

    impl MockTerminalPort {
        fn new(keys: &[Key]) -> Self {
            Self {
                keys: keys.iter().copied().collect(),
                calls: Vec::new(),
                reads: 0,
            }
        }

        fn count(&self, wanted: &Call) -> usize {
            self.calls.iter().filter(|c| *c == wanted).count()
        }

        fn active_lines(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Line(text, LineStyle::Active, _) => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl TerminalPort for MockTerminalPort {
        fn read_key(&mut self) -> Result<Key, AppError> {
            self.reads += 1;
            self.keys.pop_front().ok_or_else(|| {
                AppError::TtyRead(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "key script exhausted",
                ))
            })
        }

        fn write_prompt(&mut self, prompt: &str, _theme: &Theme) -> Result<(), AppError> {
            self.calls.push(Call::Prompt(prompt.to_string()));
            Ok(())
        }

        fn write_line(
            &mut self,
            line: &MenuLine,
            _theme: &Theme,
            newline: bool,
        ) -> Result<(), AppError> {
            self.calls.push(Call::Line(line.text.clone(), line.style, newline));
            Ok(())
        }

        fn cursor_up(&mut self, lines: u16) -> Result<(), AppError> {
            self.calls.push(Call::CursorUp(lines));
            Ok(())
        }

        fn hide_cursor(&mut self) -> Result<(), AppError> {
            self.calls.push(Call::Hide);
            Ok(())
        }

        fn show_cursor(&mut self) -> Result<(), AppError> {
            self.calls.push(Call::Show);
            Ok(())
        }

        fn finish(&mut self) -> Result<(), AppError> {
            self.calls.push(Call::Finish);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), AppError> {
            Ok(())
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn make_rgb() -> Menu {
        let mut menu = Menu::new("Pick a color");
        menu.add_item("Red", "r")
            .add_item("Green", "g")
            .add_item("Blue", "b");
        menu
    }

    fn run_script(menu: &mut Menu, keys: &[Key]) -> (Result<String, AppError>, MockTerminalPort) {
        let mut session = MenuSession::new(MockTerminalPort::new(keys));
        let result = session.run(menu);
        (result, session.port)
    }

    // =========================================================================
    // Tests: selection
    // =========================================================================

    #[test]
    fn enter_immediately_returns_first_item() {
        let mut menu = make_rgb();
        let (result, _) = run_script(&mut menu, &[Key::Enter]);
        assert_eq!(result.unwrap(), "r");
    }

    #[test]
    fn down_then_enter_returns_second_item() {
        let mut menu = make_rgb();
        let (result, _) = run_script(&mut menu, &[Key::Down, Key::Enter]);
        assert_eq!(result.unwrap(), "g");
    }

    #[test]
    fn up_from_start_wraps_to_last_item() {
        let mut menu = make_rgb();
        let (result, _) = run_script(&mut menu, &[Key::Up, Key::Enter]);
        assert_eq!(result.unwrap(), "b");
    }

    #[test]
    fn other_keys_do_not_move_the_cursor() {
        let mut menu = make_rgb();
        let keys = [Key::Char(b'j'), Key::Ignored, Key::Char(b' '), Key::Enter];
        let (result, port) = run_script(&mut menu, &keys);
        assert_eq!(result.unwrap(), "r");
        assert_eq!(port.reads, 4);
        // No redraw for ignored keys: only the final one after Enter.
        assert_eq!(port.count(&Call::CursorUp(2)), 1);
    }

    #[test]
    fn selection_resets_cursor() {
        let mut menu = make_rgb();
        let (result, _) = run_script(&mut menu, &[Key::Down, Key::Enter]);
        assert!(result.is_ok());
        assert_eq!(menu.cursor(), None);
    }

    #[test]
    fn hints_are_skipped_during_session() {
        let mut menu = Menu::new("p");
        menu.add_hint("choose:")
            .add_item("A", "a")
            .add_hint("--")
            .add_item("B", "b");
        let (result, _) = run_script(&mut menu, &[Key::Down, Key::Enter]);
        assert_eq!(result.unwrap(), "b");
    }

    // =========================================================================
    // Tests: cancellation
    // =========================================================================

    #[test]
    fn escape_returns_empty_string() {
        let mut menu = make_rgb();
        let (result, port) = run_script(&mut menu, &[Key::Escape]);
        assert_eq!(result.unwrap(), "");
        assert_eq!(port.count(&Call::Finish), 1);
    }

    #[test]
    fn escape_leaves_cursor_where_it_was() {
        let mut menu = make_rgb();
        let (result, _) = run_script(&mut menu, &[Key::Down, Key::Down, Key::Escape]);
        assert_eq!(result.unwrap(), "");
        assert_eq!(menu.cursor(), Some(2));
    }

    // =========================================================================
    // Tests: degenerate menus
    // =========================================================================

    #[test]
    fn empty_menu_gets_blank_hint_and_renders_one_line() {
        let mut menu = Menu::new("Nothing here");
        let (result, port) = run_script(&mut menu, &[Key::Down, Key::Escape]);
        assert_eq!(result.unwrap(), "");
        assert_eq!(menu.len(), 1);
        // Single row: redraws never move the cursor up.
        assert!(!port.calls.iter().any(|c| matches!(c, Call::CursorUp(_))));
    }

    #[test]
    fn hint_only_menu_terminates_with_empty_id() {
        let mut menu = Menu::new("p");
        menu.add_hint("A").add_hint("B");
        let (result, _) = run_script(&mut menu, &[Key::Down, Key::Down, Key::Enter]);
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn enter_on_hint_only_menu_without_navigation_is_empty() {
        let mut menu = Menu::new("p");
        menu.add_hint("A");
        let (result, _) = run_script(&mut menu, &[Key::Enter]);
        assert_eq!(result.unwrap(), "");
    }

    // =========================================================================
    // Tests: rendering
    // =========================================================================

    #[test]
    fn initial_render_prints_prompt_then_rows() {
        let mut menu = make_rgb();
        let (_, port) = run_script(&mut menu, &[Key::Escape]);
        assert_eq!(
            &port.calls[..5],
            &[
                Call::Prompt("Pick a color".to_string()),
                Call::Line("Red".to_string(), LineStyle::Active, true),
                Call::Line("Green".to_string(), LineStyle::Inactive, true),
                Call::Line("Blue".to_string(), LineStyle::Inactive, false),
                Call::Hide,
            ]
        );
    }

    #[test]
    fn navigation_redraws_in_place() {
        let mut menu = make_rgb();
        let (_, port) = run_script(&mut menu, &[Key::Down, Key::Escape]);
        assert_eq!(
            &port.calls[5..9],
            &[
                Call::CursorUp(2),
                Call::Line("Red".to_string(), LineStyle::Inactive, true),
                Call::Line("Green".to_string(), LineStyle::Active, true),
                Call::Line("Blue".to_string(), LineStyle::Inactive, false),
            ]
        );
    }

    #[test]
    fn final_redraw_has_no_active_row() {
        let mut menu = make_rgb();
        let (_, port) = run_script(&mut menu, &[Key::Down, Key::Enter]);
        // Active rows: initial render + one navigation redraw, none after Enter.
        assert_eq!(port.active_lines(), vec!["Red".to_string(), "Green".to_string()]);
        let tail = &port.calls[port.calls.len() - 2..];
        assert_eq!(tail, &[Call::Finish, Call::Show]);
    }

    // =========================================================================
    // Tests: cursor visibility
    // =========================================================================

    #[test]
    fn cursor_hidden_once_and_restored_on_escape() {
        let mut menu = make_rgb();
        let (_, port) = run_script(&mut menu, &[Key::Escape]);
        assert_eq!(port.count(&Call::Hide), 1);
        assert_eq!(port.count(&Call::Show), 1);
        assert_eq!(port.calls.last(), Some(&Call::Show));
    }

    #[test]
    fn cursor_restored_when_read_fails() {
        let mut menu = make_rgb();
        let (result, port) = run_script(&mut menu, &[Key::Down]);
        assert!(matches!(result, Err(AppError::TtyRead(_))));
        assert_eq!(port.calls.last(), Some(&Call::Show));
    }

    #[test]
    fn menu_can_be_displayed_again() {
        let mut menu = make_rgb();
        let (first, _) = run_script(&mut menu, &[Key::Down, Key::Enter]);
        assert_eq!(first.unwrap(), "g");

        // Cursor was cleared by the selection; Down starts from the top.
        let (second, _) = run_script(&mut menu, &[Key::Down, Key::Enter]);
        assert_eq!(second.unwrap(), "r");
    }
}
