pub mod key;
pub mod menu_item;
pub mod menu_line;
pub mod theme;

pub use key::{Key, decode_key};
pub use menu_item::MenuItem;
pub use menu_line::{LineStyle, MenuLine};
pub use theme::{Color, Theme};
