//! Packed 1-bit bitmap decoding.
//!
//! Sprites and glyph cells share one layout: each byte holds a vertical strip
//! of 8 pixels, least significant bit on top. Strips run left to right across
//! the bitmap width, then continue with the next 8-row band.
//!
//! | Byte index `i` | Bit `j` | Pixel                                |
//! |----------------|---------|--------------------------------------|
//! | `i`            | `j`     | `(i % width, 8 * (i / width) + j)`   |
//!
//! A `width` x `height` bitmap therefore needs [`packed_len`] bytes. Shorter
//! buffers decode as if padded with zeros, and rows of the last band that lie
//! below `height` are discarded.

use super::Color;

/// Bytes needed to store a `width` x `height` packed bitmap.
pub const fn packed_len(width: usize, height: usize) -> usize {
    width * height.div_ceil(8)
}

/// Iterator over the decoded pixels of a packed bitmap.
///
/// Yields `(x, y, paint)` in storage order. `paint` is `None` when the pixel
/// matches the color-key and must leave the destination untouched.
#[derive(Clone, Debug)]
pub struct Pixels<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    key: Option<Color>,
    len: usize,
    index: usize,
    bit: u8,
}

impl<'a> Pixels<'a> {
    pub fn new(data: &'a [u8], width: usize, height: usize, key: Option<Color>) -> Self {
        Self {
            data,
            width,
            height,
            key,
            len: packed_len(width, height),
            index: 0,
            bit: 0,
        }
    }
}

impl Iterator for Pixels<'_> {
    type Item = (usize, usize, Option<Color>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.len {
            let i = self.index;
            let j = self.bit;

            self.bit += 1;
            if self.bit == 8 {
                self.bit = 0;
                self.index += 1;
            }

            let x = i % self.width;
            let y = 8 * (i / self.width) + j as usize;
            if y >= self.height {
                // Padding rows of the last band
                continue;
            }

            let byte = self.data.get(i).copied().unwrap_or(0);
            let color = Color::from_bit(byte >> j);
            let paint = match self.key {
                Some(key) if key == color => None,
                _ => Some(color),
            };
            return Some((x, y, paint));
        }
        None
    }
}

/// Decode a packed bitmap into a row-major `width * height` grid.
///
/// Entries are `None` where the color-key made the pixel transparent.
pub fn decode(data: &[u8], width: usize, height: usize, key: Option<Color>) -> Vec<Option<Color>> {
    let mut out = vec![None; width * height];
    for (x, y, paint) in Pixels::new(data, width, height, key) {
        out[y * width + x] = paint;
    }
    out
}
