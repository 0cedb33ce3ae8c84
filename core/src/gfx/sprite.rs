use tracing::warn;

use super::Color;
use super::bitmap::Pixels;
use crate::error::{Error, Result};

/// A packed bitmap with a screen position.
///
/// Geometry and bitmap are fixed at construction; the position is meant to be
/// moved every frame by game logic.
#[derive(Clone, Debug)]
pub struct Sprite {
    width: usize,
    height: usize,
    bitmap: Vec<u8>,
    pub x: i32,
    pub y: i32,
    /// Bit value treated as transparent, or `None` for an opaque sprite.
    pub key: Option<Color>,
    // Stored for API parity; no drawing path applies them.
    pub mirror_x: bool,
    pub mirror_y: bool,
}

impl Sprite {
    pub fn new(width: usize, height: usize, bitmap: impl Into<Vec<u8>>) -> Self {
        Self {
            width,
            height,
            bitmap: bitmap.into(),
            x: 0,
            y: 0,
            key: None,
            mirror_x: false,
            mirror_y: false,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_key(mut self, key: Color) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_mirror(mut self, mirror_x: bool, mirror_y: bool) -> Self {
        self.mirror_x = mirror_x;
        self.mirror_y = mirror_y;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Decoded pixels relative to the sprite origin.
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels::new(&self.bitmap, self.width, self.height, self.key)
    }

    pub fn same_geometry(&self, other: &Sprite) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Animation frames are not emulated.
    pub fn get_frame(&self) -> Result<usize> {
        warn!("Sprite::get_frame called");
        Err(Error::Unsupported("sprite frames"))
    }

    /// Animation frames are not emulated.
    pub fn set_frame(&mut self, _frame: usize) -> Result<()> {
        warn!("Sprite::set_frame called");
        Err(Error::Unsupported("sprite frames"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_position_and_key() {
        let sprite = Sprite::new(2, 6, [0x7Eu8, 0xFF])
            .at(3, -1)
            .with_key(Color::Black);
        assert_eq!((sprite.x, sprite.y), (3, -1));
        assert_eq!(sprite.key, Some(Color::Black));
        assert_eq!((sprite.width(), sprite.height()), (2, 6));
    }

    #[test]
    fn moving_does_not_touch_geometry() {
        let mut sprite = Sprite::new(8, 8, vec![0xFFu8; 8]);
        sprite.set_position(10, 20);
        assert_eq!((sprite.width(), sprite.height()), (8, 8));
        assert_eq!(sprite.bitmap(), &[0xFFu8; 8]);
    }

    #[test]
    fn frames_are_unsupported() {
        let mut sprite = Sprite::new(1, 1, [1u8]);
        assert!(matches!(sprite.get_frame(), Err(Error::Unsupported(_))));
        assert!(matches!(sprite.set_frame(1), Err(Error::Unsupported(_))));
    }

    #[test]
    fn pixels_use_sprite_key() {
        let sprite = Sprite::new(1, 2, [0b01u8]).with_key(Color::White);
        let painted: Vec<_> = sprite.pixels().map(|(_, _, p)| p).collect();
        assert_eq!(painted, vec![None, Some(Color::Black)]);
    }
}
