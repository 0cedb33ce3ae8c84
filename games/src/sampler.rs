use thumbox_core::console::{Game, Thumby};
use thumbox_core::device::Button;
use thumbox_core::error::Result;
use thumbox_core::gfx::{Color, DISPLAY_HEIGHT, DISPLAY_WIDTH, Sprite};
use tracing::{info, warn};

use crate::registry::GameEntry;

const WIDTH: i32 = DISPLAY_WIDTH as i32;
const HEIGHT: i32 = DISPLAY_HEIGHT as i32;

/// Save namespace and the item counting how often the sampler was started.
pub const SAVE_NAME: &str = "sampler";
pub const LAUNCHES_KEY: &str = "launches";

/// Frames a notice stays on screen (2 s at 30 fps).
const NOTICE_FRAMES: u32 = 60;

// 7x6 heart, one byte per column
const HEART_MASK: [u8; 7] = [0x06, 0x0F, 0x1F, 0x3E, 0x1F, 0x0F, 0x06];
// Horizontal stripes, visible only through the heart
const STRIPES: [u8; 7] = [0x15; 7];

/// Feature tour: text, a masked sprite steered with the d-pad, shapes,
/// button edges and a persistent launch counter.
///
/// A inverts the screen, B tries to beep.
pub struct Sampler {
    heart: Sprite,
    heart_mask: Sprite,
    inverted: bool,
    launches: u32,
    notice: Option<(&'static str, u32)>,
}

impl Sampler {
    pub fn new(launches: u32) -> Self {
        Self {
            heart: Sprite::new(7, 6, STRIPES).at(WIDTH / 2 - 3, HEIGHT / 2 - 3),
            heart_mask: Sprite::new(7, 6, HEART_MASK).with_key(Color::Black),
            inverted: false,
            launches,
            notice: None,
        }
    }

    pub fn launches(&self) -> u32 {
        self.launches
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn heart_position(&self) -> (i32, i32) {
        (self.heart.x, self.heart.y)
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice.map(|(text, _)| text)
    }

    fn handle_input(&mut self, thumby: &mut Thumby) {
        let buttons = &mut thumby.buttons;

        let (mut x, mut y) = (self.heart.x, self.heart.y);
        if buttons.pressed(Button::Left) {
            x -= 1;
        }
        if buttons.pressed(Button::Right) {
            x += 1;
        }
        if buttons.pressed(Button::Up) {
            y -= 1;
        }
        if buttons.pressed(Button::Down) {
            y += 1;
        }
        // Keep the heart inside the border
        let max_x = WIDTH - 1 - self.heart.width() as i32;
        let max_y = HEIGHT - 1 - self.heart.height() as i32;
        self.heart.set_position(x.clamp(1, max_x), y.clamp(1, max_y));

        if buttons.just_pressed(Button::A) {
            self.inverted = !self.inverted;
        }
        if buttons.just_pressed(Button::B)
            && let Err(e) = thumby.audio.play(440, 100)
        {
            warn!("beep failed: {e}");
            self.notice = Some(("NO AUDIO", NOTICE_FRAMES));
        }
    }
}

impl Game for Sampler {
    fn update(&mut self, thumby: &mut Thumby) {
        self.handle_input(thumby);

        let fg = Color::from(!self.inverted);
        let display = &mut thumby.display;
        display.fill(fg.inverted());
        display.draw_rectangle(0, 0, WIDTH, HEIGHT, fg);
        display.draw_text("THUMBOX", 2, 2, fg);
        display.draw_line(2, 10, WIDTH - 3, 10, fg);
        display.draw_text(&format!("RUN {}", self.launches), 2, HEIGHT - 9, fg);

        if let Err(e) = display.draw_sprite_with_mask(&self.heart, &self.heart_mask) {
            warn!("heart not drawn: {e}");
        }

        if let Some((text, frames)) = self.notice {
            display.draw_text(text, 2, 12, fg);
            self.notice = (frames > 1).then_some((text, frames - 1));
        }

        display.update();
    }
}

// ---------------------------------------------------------------------------
// Game registry
// ---------------------------------------------------------------------------

fn create_game(thumby: &mut Thumby) -> Result<Box<dyn Game>> {
    thumby.display.set_fps(30);

    let saves = &mut thumby.saves;
    saves.set_name(SAVE_NAME)?;
    let launches = saves.get_item_as::<u32>(LAUNCHES_KEY).unwrap_or(0) + 1;
    saves.set_item(LAUNCHES_KEY, launches)?;
    saves.save()?;
    info!(launches, "sampler started");

    Ok(Box::new(Sampler::new(launches)))
}

inventory::submit! {
    GameEntry::new("sampler", "Thumbox Sampler", create_game)
}
