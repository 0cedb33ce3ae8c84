pub mod bitmap;
pub mod display;
pub mod font;
mod font5x7;
pub mod sprite;

pub use bitmap::{Pixels, decode, packed_len};
pub use display::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Display, MAX_BRIGHTNESS};
pub use font::GlyphAtlas;
pub use sprite::Sprite;

/// Logical pixel value of the monochrome display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
}

impl Color {
    /// Map a bit (only the low bit is looked at) to a color.
    pub fn from_bit(bit: u8) -> Self {
        if bit & 1 == 1 { Self::White } else { Self::Black }
    }

    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn inverted(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::White } else { Self::Black }
    }
}
