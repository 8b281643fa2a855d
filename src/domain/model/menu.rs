use crate::domain::primitive::{LineStyle, MenuItem, MenuLine, Theme};

/// An interactive selection list: a prompt, its rows and the cursor.
///
/// Rows are append-only and identified by position. The cursor is `None`
/// until the first selectable row is added, and again right after a
/// selection has been taken.
#[derive(Debug, Clone)]
pub struct Menu {
    prompt: String,
    items: Vec<MenuItem>,
    cursor: Option<usize>,
    theme: Theme,
}

impl Menu {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            items: Vec::new(),
            cursor: None,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Append a selectable row. The first one added while the cursor is
    /// unset receives the cursor, so menus may start with hints.
    pub fn add_item(&mut self, text: impl Into<String>, id: impl Into<String>) -> &mut Self {
        self.items.push(MenuItem::selectable(text, id));
        if self.cursor.is_none() {
            self.cursor = Some(self.items.len() - 1);
        }
        self
    }

    /// Append a display-only row. Never moves the cursor.
    pub fn add_hint(&mut self, text: impl Into<String>) -> &mut Self {
        self.items.push(MenuItem::hint(text));
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selectable_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_selectable()).count()
    }

    /// Guarantee at least one row so rendering and cursor arithmetic never
    /// see an empty list.
    pub fn ensure_not_empty(&mut self) {
        if self.items.is_empty() {
            self.add_hint("");
        }
    }

    pub fn move_up(&mut self) {
        self.step(false);
    }

    pub fn move_down(&mut self) {
        self.step(true);
    }

    /// Move one row with wraparound, then skip hints in the same direction.
    ///
    /// The skip is bounded to one pass over the rows, so a menu made only of
    /// hints leaves the cursor parked on a hint instead of spinning.
    fn step(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        let next = |pos: usize| {
            if forward {
                (pos + 1) % len
            } else {
                (pos + len - 1) % len
            }
        };

        let mut pos = match self.cursor {
            Some(current) => next(current),
            None if forward => 0,
            None => len - 1,
        };

        let mut iter = 0;
        while !self.items[pos].is_selectable() && iter < len {
            pos = next(pos);
            iter += 1;
        }

        self.cursor = Some(pos);
    }

    /// Take the id under the cursor and clear the cursor, so the final
    /// redraw shows no highlighted row. An unset cursor yields an empty id.
    pub fn take_selection(&mut self) -> String {
        let id = self
            .cursor
            .and_then(|pos| self.items.get(pos))
            .map(|item| item.id().to_string())
            .unwrap_or_default();
        self.cursor = None;
        id
    }

    /// Styled rows for the current cursor state, in display order.
    pub fn lines(&self) -> Vec<MenuLine> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if !item.is_selectable() {
                    LineStyle::Hint
                } else if Some(index) == self.cursor {
                    LineStyle::Active
                } else {
                    LineStyle::Inactive
                };
                MenuLine::new(item.text(), style)
            })
            .collect()
    }
}
