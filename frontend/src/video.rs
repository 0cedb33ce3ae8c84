use anyhow::{Context, anyhow};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// The console screen in a desktop window.
///
/// The window may be resized freely; the screen is drawn at the largest whole
/// multiple of its native size that fits, centered on black.
pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    width: u32,
    height: u32,
}

impl Video {
    pub fn new(
        sdl_video: &sdl2::VideoSubsystem,
        title: &str,
        native_width: u32,
        native_height: u32,
        scale: u32,
    ) -> anyhow::Result<Self> {
        let window = sdl_video
            .window(title, native_width * scale, native_height * scale)
            .position_centered()
            .resizable()
            .build()
            .context("creating window")?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .context("creating canvas")?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));

        let texture_creator = canvas.texture_creator();

        Ok(Self {
            canvas,
            texture_creator,
            width: native_width,
            height: native_height,
        })
    }

    /// Show one RGB24 frame of the console's native size.
    pub fn present(&mut self, frame: &[u8]) -> anyhow::Result<()> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, self.width, self.height)
            .context("creating texture")?;
        texture
            .update(None, frame, (self.width * 3) as usize)
            .context("updating texture")?;

        let output = self
            .canvas
            .output_size()
            .map_err(|e| anyhow!("reading window size: {e}"))?;
        let (x, y, w, h) = fit_rect(output, (self.width, self.height));

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, Rect::new(x, y, w, h))
            .map_err(|e| anyhow!("copying texture: {e}"))?;
        self.canvas.present();
        Ok(())
    }
}

/// Largest integer upscale of `native` that fits `output`, centered.
/// Returns `(x, y, width, height)`. Never scales below 1x.
pub fn fit_rect(output: (u32, u32), native: (u32, u32)) -> (i32, i32, u32, u32) {
    let scale = (output.0 / native.0.max(1))
        .min(output.1 / native.1.max(1))
        .max(1);
    let (w, h) = (native.0 * scale, native.1 * scale);
    let x = (i64::from(output.0) - i64::from(w)) / 2;
    let y = (i64::from(output.1) - i64::from(h)) / 2;
    (x as i32, y as i32, w, h)
}
