pub const KEY_UP: u8 = 65;
pub const KEY_DOWN: u8 = 66;
pub const KEY_ENTER: u8 = 13;
pub const KEY_ESCAPE: u8 = 27;

/// Logical key produced by one raw terminal read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    /// Any other single byte (printable characters, control codes).
    Char(u8),
    /// An escape sequence that is not an up/down arrow.
    Ignored,
}

impl Key {
    /// Raw byte value of the key as seen by the decoder.
    ///
    /// Arrows report the final byte of their escape sequence, unrecognized
    /// sequences report 0.
    pub fn code(&self) -> u8 {
        match self {
            Self::Up => KEY_UP,
            Self::Down => KEY_DOWN,
            Self::Enter => KEY_ENTER,
            Self::Escape => KEY_ESCAPE,
            Self::Char(b) => *b,
            Self::Ignored => 0,
        }
    }
}

/// Classify the bytes returned by a single raw read.
///
/// Arrow keys arrive as `ESC [ <code>` in one read, so a 3-byte read is an
/// escape sequence and only its last byte matters. Anything shorter is a
/// plain keypress and the first byte is the key.
pub fn decode_key(bytes: &[u8]) -> Key {
    match bytes {
        [_, _, KEY_UP] => Key::Up,
        [_, _, KEY_DOWN] => Key::Down,
        [_, _, _] => Key::Ignored,
        [KEY_ENTER, ..] => Key::Enter,
        [KEY_ESCAPE, ..] => Key::Escape,
        [b, ..] => Key::Char(*b),
        [] => Key::Ignored,
    }
}
