/// A single row of a menu.
///
/// Hints are display-only rows: they never receive the cursor and always
/// carry an empty id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    text: String,
    id: String,
    selectable: bool,
}

impl MenuItem {
    pub fn selectable(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
            selectable: true,
        }
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: String::new(),
            selectable: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }
}
