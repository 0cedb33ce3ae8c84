//! F12 screenshots: the presented RGB24 frame written as a PNG.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// `<dir>/<game>-<frame>.png`, frame zero-padded so files sort in order.
pub fn screenshot_path(dir: &Path, game: &str, frame: u64) -> PathBuf {
    dir.join(format!("{game}-{frame:06}.png"))
}

/// Encode an RGB24 buffer of `width` x `height` pixels to `path`.
pub fn write_png(path: &Path, width: u32, height: u32, rgb: &[u8]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb)?;
    writer.finish()?;
    Ok(())
}
