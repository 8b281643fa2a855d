/// How a rendered row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Selectable row under the cursor: marker plus accent color.
    Active,
    /// Selectable row without the cursor: two blank columns, plain text.
    Inactive,
    /// Non-selectable row in the hint color, no cursor column.
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub text: String,
    pub style: LineStyle,
}

impl MenuLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}
