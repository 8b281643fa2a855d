#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// The two colors a menu is drawn with.
///
/// `accent` styles the prompt and the row under the cursor, `hint` styles
/// non-selectable rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub hint: Color,
}

impl Theme {
    pub fn new(accent: Color, hint: Color) -> Self {
        Self { accent, hint }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Yellow,
            hint: Color::Cyan,
        }
    }
}
