pub mod console;
pub mod device;
pub mod error;
pub mod gfx;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::console::{Game, Thumby};
    pub use crate::device::{Button, Buttons, SaveData};
    pub use crate::error::{Error, Result};
    pub use crate::gfx::{Color, DISPLAY_HEIGHT, DISPLAY_WIDTH, Display, GlyphAtlas, Sprite};
}
