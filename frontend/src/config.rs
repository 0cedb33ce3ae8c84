//! User configuration loaded from `config.toml`.
//!
//! Every field is optional; anything missing falls back to the defaults
//! below. Command-line flags are applied on top by `main`.
//!
//! | Key              | Default     | Meaning                                  |
//! |------------------|-------------|------------------------------------------|
//! | `scale`          | 10          | Window pixels per console pixel          |
//! | `saves_dir`      | `Saves`     | Root of the per-game save directories    |
//! | `screenshot_dir` | `.`         | Where F12 screenshots are written        |
//! | `[keys]`         | `,` `.` arrows | SDL scancode name per console button  |

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use thumbox_core::device::Button;

pub const DEFAULT_SCALE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scale: u32,
    pub saves_dir: PathBuf,
    pub screenshot_dir: PathBuf,
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            saves_dir: PathBuf::from("Saves"),
            screenshot_dir: PathBuf::from("."),
            keys: KeyBindings::default(),
        }
    }
}

/// SDL scancode names bound to each console button.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub a: String,
    pub b: String,
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            a: ",".into(),
            b: ".".into(),
            up: "Up".into(),
            down: "Down".into(),
            left: "Left".into(),
            right: "Right".into(),
        }
    }
}

impl KeyBindings {
    pub fn get(&self, button: Button) -> &str {
        match button {
            Button::A => &self.a,
            Button::B => &self.b,
            Button::Up => &self.up,
            Button::Down => &self.down,
            Button::Left => &self.left,
            Button::Right => &self.right,
        }
    }
}

impl Config {
    /// `<config dir>/thumbox/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("thumbox").join("config.toml"))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load `path`, or the default location when `path` is `None`.
    ///
    /// An explicitly named file must exist; a missing default file just
    /// means defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
