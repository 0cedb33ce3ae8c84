use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use thumbox_core::console::{Game, Thumby};
use tracing::{info, warn};

use crate::input::KeyMap;
use crate::screenshot;
use crate::video::Video;

/// Frontend settings for one run.
pub struct RunOptions {
    pub name: &'static str,
    pub title: &'static str,
    pub scale: u32,
    /// Overrides the frame rate the game asks for.
    pub fps: Option<u32>,
    pub screenshot_dir: PathBuf,
}

pub fn run(
    game: &mut dyn Game,
    thumby: &mut Thumby,
    key_map: &KeyMap,
    options: &RunOptions,
) -> anyhow::Result<()> {
    let sdl_context = sdl2::init().map_err(|e| anyhow!("initializing SDL2: {e}"))?;
    let sdl_video = sdl_context
        .video()
        .map_err(|e| anyhow!("initializing SDL video: {e}"))?;

    let (width, height) = (thumby.display.width() as u32, thumby.display.height() as u32);
    let mut video = Video::new(&sdl_video, options.title, width, height, options.scale)?;
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow!("creating event pump: {e}"))?;

    let mut frame = vec![0u8; (width * height * 3) as usize];
    let mut pacer = Pacer::new();

    'main: loop {
        // Poll all pending SDL events, translate to console input
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::F12),
                    repeat: false,
                    ..
                } => save_screenshot(thumby, &frame, options),

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(button) = key_map.get(sc) {
                        thumby.buttons.set_input(button, true);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(button) = key_map.get(sc) {
                        thumby.buttons.set_input(button, false);
                    }
                }

                // Key-up events are lost while unfocused
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => thumby.buttons.release_all(),

                _ => {}
            }
        }

        // Run one frame of the game
        game.update(thumby);

        // Render the last published frame and present
        thumby.display.render_frame(&mut frame);
        video.present(&frame)?;

        pacer.wait(options.fps.unwrap_or(thumby.display.fps()));
    }

    info!(frames = thumby.display.frame_count(), "stopped");
    Ok(())
}

fn save_screenshot(thumby: &Thumby, frame: &[u8], options: &RunOptions) {
    let display = &thumby.display;
    let path = screenshot::screenshot_path(
        &options.screenshot_dir,
        options.name,
        display.frame_count(),
    );
    match screenshot::write_png(&path, display.width() as u32, display.height() as u32, frame) {
        Ok(()) => info!(path = %path.display(), "screenshot saved"),
        Err(e) => warn!("screenshot failed: {e:#}"),
    }
}

/// Length of one frame at `fps`, `None` when uncapped.
pub fn frame_duration(fps: u32) -> Option<Duration> {
    (fps > 0).then(|| Duration::from_secs(1) / fps)
}

/// Sleeps out the remainder of each frame against a running deadline, so
/// short frames make up for long ones.
struct Pacer {
    deadline: Instant,
}

impl Pacer {
    fn new() -> Self {
        Self {
            deadline: Instant::now(),
        }
    }

    fn wait(&mut self, fps: u32) {
        let now = Instant::now();
        let Some(frame) = frame_duration(fps) else {
            self.deadline = now;
            return;
        };

        self.deadline += frame;
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        } else {
            // Too far behind to catch up; start counting again from now
            self.deadline = now;
        }
    }
}
