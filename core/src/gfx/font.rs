//! Glyph atlases for text rendering.
//!
//! An atlas is a headerless file of fixed-size glyph cells, one per character
//! starting at U+0020 (space). Each cell is a packed bitmap in the same
//! vertical-strip layout as sprites (see [`crate::gfx::bitmap`]), so a cell is
//! `width * ceil(height / 8)` bytes. For the console's fonts (height <= 8)
//! that is exactly `width` bytes per character.

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use super::bitmap::packed_len;
use super::font5x7::FONT_5X7;
use crate::error::{Error, Result};

/// First character stored in an atlas.
pub const FIRST_CHAR: u32 = 0x20;

#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    data: Cow<'static, [u8]>,
    width: usize,
    height: usize,
    spacing: usize,
    char_count: usize,
}

impl GlyphAtlas {
    /// The 5x7 ASCII font used until a game calls `set_font`.
    pub fn builtin() -> Self {
        Self {
            data: Cow::Borrowed(&FONT_5X7[..]),
            width: 5,
            height: 7,
            spacing: 1,
            char_count: FONT_5X7.len() / 5,
        }
    }

    /// Build an atlas from raw cell data.
    pub fn from_bytes(
        data: impl Into<Cow<'static, [u8]>>,
        width: usize,
        height: usize,
        spacing: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidFont { width, height });
        }
        let data = data.into();
        let char_count = data.len() / packed_len(width, height);
        Ok(Self {
            data,
            width,
            height,
            spacing,
            char_count,
        })
    }

    /// Load an atlas file. The file is read whole and closed before returning.
    pub fn open(
        path: impl AsRef<Path>,
        width: usize,
        height: usize,
        spacing: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidFont { width, height });
        }
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let atlas = Self::from_bytes(data, width, height, spacing)?;
        debug!(
            path = %path.display(),
            width,
            height,
            chars = atlas.char_count,
            "loaded glyph atlas"
        );
        Ok(atlas)
    }

    pub fn glyph_width(&self) -> usize {
        self.width
    }

    pub fn glyph_height(&self) -> usize {
        self.height
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Horizontal cursor advance per character, drawn or not.
    pub fn advance(&self) -> usize {
        self.width + self.spacing
    }

    /// Cell index for `ch`, or `None` when the atlas has no cell for it.
    ///
    /// The accepted range is `0..=char_count`; the one-past-the-end index
    /// reads as an all-zero cell.
    pub fn glyph_index(&self, ch: char) -> Option<usize> {
        let index = (ch as u32).checked_sub(FIRST_CHAR)? as usize;
        (index <= self.char_count).then_some(index)
    }

    /// Packed bytes of a cell. May be short (or empty) at the end of the
    /// atlas; decoding pads the rest with zeros.
    pub fn cell(&self, index: usize) -> &[u8] {
        let len = packed_len(self.width, self.height);
        let start = index.saturating_mul(len);
        let end = start.saturating_add(len).min(self.data.len());
        self.data.get(start..end).unwrap_or(&[])
    }
}

impl Default for GlyphAtlas {
    fn default() -> Self {
        Self::builtin()
    }
}
