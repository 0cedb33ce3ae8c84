use tracing::warn;

use crate::error::{Error, Result};

/// Piezo tone output.
///
/// Tone synthesis is left to the host and not emulated, so every call
/// fails with [`Error::Unsupported`].
#[derive(Debug, Default)]
pub struct Audio;

impl Audio {
    /// Start a tone of `freq` Hz for `duration_ms` and return immediately.
    pub fn play(&mut self, freq: u32, duration_ms: u32) -> Result<()> {
        warn!(freq, duration_ms, "audio play requested");
        Err(Error::Unsupported("audio play"))
    }

    /// Play a tone and wait for it to finish.
    pub fn play_blocking(&mut self, freq: u32, duration_ms: u32) -> Result<()> {
        warn!(freq, duration_ms, "audio play_blocking requested");
        Err(Error::Unsupported("audio play_blocking"))
    }

    pub fn stop(&mut self) -> Result<()> {
        warn!("audio stop requested");
        Err(Error::Unsupported("audio stop"))
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        warn!(enabled, "audio set_enabled requested");
        Err(Error::Unsupported("audio set_enabled"))
    }

    /// Change the frequency of the current tone.
    pub fn set(&mut self, freq: u32) -> Result<()> {
        warn!(freq, "audio set requested");
        Err(Error::Unsupported("audio set"))
    }
}
