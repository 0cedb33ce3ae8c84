use std::path::PathBuf;

use crate::device::{Audio, Buttons, Hardware, Link, SaveData};
use crate::gfx::Display;

/// The emulated console as seen by a game.
///
/// Each capability is an independent value; the host drives `buttons` and
/// reads `display`, the game uses all of them.
pub struct Thumby {
    pub hardware: Hardware,
    pub buttons: Buttons,
    pub display: Display,
    pub audio: Audio,
    pub link: Link,
    pub saves: SaveData,
}

impl Thumby {
    /// Create a console whose save data lives under `saves_root`.
    pub fn new(saves_root: impl Into<PathBuf>) -> Self {
        Self {
            hardware: Hardware,
            buttons: Buttons::new(),
            display: Display::new(),
            audio: Audio,
            link: Link,
            saves: SaveData::new(saves_root),
        }
    }
}
