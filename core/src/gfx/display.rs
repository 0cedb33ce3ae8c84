//! Display context: framebuffer ownership, sprite compositing and text.
//!
//! Games draw into a back buffer between `fill` and `update`. `update` ends
//! the frame by publishing the back buffer to the front buffer, which is what
//! the host presents via [`Display::render_frame`].

use std::ops::Range;

use tracing::debug;

use super::bitmap::Pixels;
use super::font::GlyphAtlas;
use super::sprite::Sprite;
use super::Color;
use crate::error::{Error, Result};

/// Native display width of the console.
pub const DISPLAY_WIDTH: usize = 72;

/// Native display height of the console.
pub const DISPLAY_HEIGHT: usize = 40;

/// Highest accepted brightness level; white renders at full intensity here.
pub const MAX_BRIGHTNESS: u8 = 127;

/// A grid of logical pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::Black; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    // Drawing code offsets coordinates in i64 so nothing overflows near the
    // i32 limits.
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x.into(), y.into()).map(|i| self.pixels[i])
    }

    /// Write one pixel. Coordinates outside the grid are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        self.put(x.into(), y.into(), color);
    }

    /// Write one pixel, returning whether it landed on the grid.
    fn put(&mut self, x: i64, y: i64, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// True when a `w` x `h` box at `(x, y)` lies entirely on the grid.
    pub fn contains_box(&self, x: i32, y: i32, w: usize, h: usize) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => {
                x.checked_add(w).is_some_and(|right| right <= self.width)
                    && y.checked_add(h).is_some_and(|bottom| bottom <= self.height)
            }
            _ => false,
        }
    }
}

/// The part of `start..start + len` that lies within `0..limit`.
fn clip_span(start: i32, len: i32, limit: usize) -> Range<i64> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let start = i64::from(start);
    let end = start + i64::from(len.max(0));
    start.clamp(0, limit)..end.clamp(0, limit)
}

type Point = (i64, i64);

/// Liang-Barsky clip of the segment `from..to` to `-1..=size` on both axes.
/// `None` when the segment misses that box.
fn clip_line(from: Point, to: Point, size: Point) -> Option<(Point, Point)> {
    let (x1, y1) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = (to.0 as f64 - x1, to.1 as f64 - y1);
    let (right, bottom) = (size.0 as f64, size.1 as f64);

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, x1 + 1.0), (dx, right - x1), (-dy, y1 + 1.0), (dy, bottom - y1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x1 + t * dx).round() as i64, (y1 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

/// Screen coordinate of pixel `(x, y)` of something drawn at `origin`.
fn offset(origin: (i32, i32), x: usize, y: usize) -> Point {
    (i64::from(origin.0) + x as i64, i64::from(origin.1) + y as i64)
}

/// The console display.
pub struct Display {
    back: Framebuffer,
    front: Framebuffer,
    font: GlyphAtlas,
    fps: u32,
    brightness: u8,
    frame_count: u64,
}

impl Display {
    pub fn new() -> Self {
        Self::with_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            back: Framebuffer::new(width, height),
            front: Framebuffer::new(width, height),
            font: GlyphAtlas::builtin(),
            fps: 0,
            brightness: MAX_BRIGHTNESS,
            frame_count: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.back.width()
    }

    pub fn height(&self) -> usize {
        self.back.height()
    }

    /// The frame currently being drawn.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.back
    }

    // -----------------------------------------------------------------------
    // Frame lifecycle
    // -----------------------------------------------------------------------

    /// End the frame: the drawn pixels become visible to the host.
    pub fn update(&mut self) {
        self.front.clone_from(&self.back);
        self.frame_count += 1;
    }

    /// Number of completed `update` calls.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Target frame rate for the host pacer. 0 means uncapped.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Set the intensity of lit pixels, clamped to `0..=MAX_BRIGHTNESS`.
    pub fn brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
    }

    pub fn brightness_level(&self) -> u8 {
        self.brightness
    }

    /// Render the last published frame into an RGB24 pixel buffer.
    ///
    /// The buffer must hold at least `width * height * 3` bytes. Pixels are
    /// stored left-to-right, top-to-bottom, 3 bytes per pixel (R, G, B).
    pub fn render_frame(&self, buffer: &mut [u8]) {
        let on = (self.brightness as u32 * 255 / MAX_BRIGHTNESS as u32) as u8;
        for (pixel, rgb) in self.front.pixels().iter().zip(buffer.chunks_exact_mut(3)) {
            let level = match pixel {
                Color::White => on,
                Color::Black => 0,
            };
            rgb.fill(level);
        }
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    pub fn fill(&mut self, color: Color) {
        self.back.fill(color);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.back.set(x, y, color);
    }

    /// Color at `(x, y)` in the frame being drawn, `None` off-screen.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.back.get(x, y)
    }

    /// Bresenham line, both endpoints included.
    ///
    /// Lines reaching off-screen are first cut to the screen plus a one pixel
    /// margin, so far-away endpoints cost nothing extra.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let mut from = (i64::from(x1), i64::from(y1));
        let mut to = (i64::from(x2), i64::from(y2));
        let size = (self.width() as i64, self.height() as i64);
        if self.back.index(from.0, from.1).is_none() || self.back.index(to.0, to.1).is_none() {
            match clip_line(from, to, size) {
                Some((a, b)) => (from, to) = (a, b),
                None => return,
            }
        }

        let (x2, y2) = to;
        let dx = (x2 - from.0).abs();
        let dy = -(y2 - from.1).abs();
        let sx = if from.0 < x2 { 1 } else { -1 };
        let sy = if from.1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = from;

        loop {
            self.back.put(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// One-pixel outline of a `w` x `h` rectangle.
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (left, top) = (i64::from(x), i64::from(y));
        let right = left + i64::from(w) - 1;
        let bottom = top + i64::from(h) - 1;

        for px in clip_span(x, w, self.width()) {
            self.back.put(px, top, color);
            self.back.put(px, bottom, color);
        }
        for py in clip_span(y, h, self.height()) {
            self.back.put(left, py, color);
            self.back.put(right, py, color);
        }
    }

    pub fn draw_filled_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let columns = clip_span(x, w, self.width());
        for py in clip_span(y, h, self.height()) {
            for px in columns.clone() {
                self.back.put(px, py, color);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Sprites
    // -----------------------------------------------------------------------

    /// Draw a sprite at its position. Transparent pixels leave the
    /// destination as it was; off-screen pixels are dropped.
    pub fn draw_sprite(&mut self, sprite: &Sprite) {
        let origin = (sprite.x, sprite.y);
        for (x, y, paint) in sprite.pixels() {
            if let Some(color) = paint {
                let (px, py) = offset(origin, x, y);
                self.back.put(px, py, color);
            }
        }
    }

    /// Draw a sprite through a stencil.
    ///
    /// A pixel is written only where both the sprite and the mask paint; the
    /// written color is the sprite's. The mask's own colors do not matter,
    /// only whether its color-key hides the pixel. Both must have the same
    /// geometry; otherwise nothing is drawn.
    pub fn draw_sprite_with_mask(&mut self, sprite: &Sprite, mask: &Sprite) -> Result<()> {
        if !sprite.same_geometry(mask) {
            return Err(Error::MaskGeometryMismatch {
                sprite_width: sprite.width(),
                sprite_height: sprite.height(),
                mask_width: mask.width(),
                mask_height: mask.height(),
            });
        }

        self.draw_masked(sprite, mask);
        Ok(())
    }

    // Callers guarantee matching geometry, so both iterators walk the same
    // coordinates.
    fn draw_masked(&mut self, sprite: &Sprite, mask: &Sprite) {
        let origin = (sprite.x, sprite.y);
        for ((x, y, paint), (_, _, gate)) in sprite.pixels().zip(mask.pixels()) {
            if let Some(color) = gate.and(paint) {
                let (px, py) = offset(origin, x, y);
                self.back.put(px, py, color);
            }
        }
    }

    /// Draw a raw bitmap as a one-off sprite.
    #[allow(clippy::too_many_arguments)]
    pub fn blit(
        &mut self,
        bitmap: &[u8],
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        key: Option<Color>,
        mirror_x: bool,
        mirror_y: bool,
    ) {
        let mut sprite = Sprite::new(width, height, bitmap)
            .at(x, y)
            .with_mirror(mirror_x, mirror_y);
        sprite.key = key;
        self.draw_sprite(&sprite);
    }

    /// Draw a raw bitmap through a raw mask of the same size. Mask bits that
    /// are 0 hide the corresponding bitmap pixel.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_with_mask(
        &mut self,
        bitmap: &[u8],
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        key: Option<Color>,
        mirror_x: bool,
        mirror_y: bool,
        mask: &[u8],
    ) {
        let mut sprite = Sprite::new(width, height, bitmap)
            .at(x, y)
            .with_mirror(mirror_x, mirror_y);
        sprite.key = key;
        let mask = Sprite::new(width, height, mask).with_key(Color::Black);
        self.draw_masked(&sprite, &mask);
    }

    // -----------------------------------------------------------------------
    // Text
    // -----------------------------------------------------------------------

    /// Switch to the glyph atlas stored at `path`.
    ///
    /// The previous atlas is released once the new one has loaded; on error
    /// the current font stays active.
    pub fn set_font(
        &mut self,
        path: impl AsRef<std::path::Path>,
        width: usize,
        height: usize,
        spacing: usize,
    ) -> Result<()> {
        let atlas = GlyphAtlas::open(path, width, height, spacing)?;
        self.set_font_atlas(atlas);
        Ok(())
    }

    pub fn set_font_atlas(&mut self, atlas: GlyphAtlas) {
        debug!(
            width = atlas.glyph_width(),
            height = atlas.glyph_height(),
            "font swapped"
        );
        self.font = atlas;
    }

    pub fn font(&self) -> &GlyphAtlas {
        &self.font
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Set glyph bits are drawn in `color` and clear bits in the opposite
    /// color. Characters without a glyph, and glyphs that would not fit on
    /// screen entirely, are skipped, but the cursor still advances one cell.
    /// Returns the cursor x after the last character.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> i32 {
        let (w, h) = (self.font.glyph_width(), self.font.glyph_height());
        let advance = i32::try_from(self.font.advance()).unwrap_or(i32::MAX);
        let mut cursor = x;

        for ch in text.chars() {
            if let Some(index) = self.font.glyph_index(ch)
                && self.back.contains_box(cursor, y, w, h)
            {
                let cell = self.font.cell(index);
                for (gx, gy, paint) in Pixels::new(cell, w, h, None) {
                    let ink = match paint {
                        Some(Color::White) => color,
                        _ => color.inverted(),
                    };
                    let (px, py) = offset((cursor, y), gx, gy);
                    self.back.put(px, py, ink);
                }
            }
            cursor = cursor.saturating_add(advance);
        }
        cursor
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_display_is_console_sized_and_black() {
        let display = Display::new();
        assert_eq!((display.width(), display.height()), (72, 40));
        assert!(display.framebuffer().pixels().iter().all(|&p| p == Color::Black));
        assert_eq!(display.fps(), 0);
        assert_eq!(display.brightness_level(), MAX_BRIGHTNESS);
    }

    #[test]
    fn set_pixel_clips_silently() {
        let mut display = Display::with_size(4, 4);
        display.set_pixel(-1, 0, Color::White);
        display.set_pixel(4, 0, Color::White);
        display.set_pixel(0, 4, Color::White);
        assert!(display.framebuffer().pixels().iter().all(|&p| p == Color::Black));
        assert_eq!(display.get_pixel(4, 0), None);
    }

    #[test]
    fn render_frame_shows_published_frame_only() {
        let mut display = Display::with_size(2, 1);
        display.set_pixel(0, 0, Color::White);

        let mut rgb = [0xAAu8; 6];
        display.render_frame(&mut rgb);
        assert_eq!(rgb, [0; 6]);

        display.update();
        display.render_frame(&mut rgb);
        assert_eq!(rgb, [255, 255, 255, 0, 0, 0]);
        assert_eq!(display.frame_count(), 1);
    }

    #[test]
    fn brightness_scales_white_and_clamps() {
        let mut display = Display::with_size(1, 1);
        display.fill(Color::White);
        display.update();

        display.brightness(200);
        assert_eq!(display.brightness_level(), MAX_BRIGHTNESS);

        display.brightness(0);
        let mut rgb = [0u8; 3];
        display.render_frame(&mut rgb);
        assert_eq!(rgb, [0, 0, 0]);

        display.brightness(64);
        display.render_frame(&mut rgb);
        assert_eq!(rgb, [128, 128, 128]);
    }

    #[test]
    fn contains_box_rejects_negative_and_overflowing_boxes() {
        let fb = Framebuffer::new(10, 8);
        assert!(fb.contains_box(0, 0, 10, 8));
        assert!(fb.contains_box(5, 1, 5, 7));
        assert!(!fb.contains_box(6, 0, 5, 7));
        assert!(!fb.contains_box(-1, 0, 1, 1));
        assert!(!fb.contains_box(0, 2, 1, 7));
        assert!(!fb.contains_box(1, 0, usize::MAX, 1));
    }

    #[test]
    fn clip_span_limits_to_grid() {
        assert_eq!(clip_span(2, 3, 10), 2..5);
        assert_eq!(clip_span(-4, 6, 10), 0..2);
        assert_eq!(clip_span(8, i32::MAX, 10), 8..10);
        assert_eq!(clip_span(i32::MIN, i32::MAX, 10), 0..0);
        assert_eq!(clip_span(3, -5, 10), 3..3);
    }

    #[test]
    fn clip_line_cuts_to_margin() {
        assert_eq!(
            clip_line((-100, 5), (100, 5), (72, 40)),
            Some(((-1, 5), (72, 5)))
        );
        assert_eq!(
            clip_line((-10, -10), (10, 10), (72, 40)),
            Some(((-1, -1), (10, 10)))
        );
        assert_eq!(clip_line((-10, 50), (100, 50), (72, 40)), None);
        assert_eq!(clip_line((-10, -1), (-5, 30), (72, 40)), None);
    }
}
