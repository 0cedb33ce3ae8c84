use tracing::warn;

use crate::error::{Error, Result};

/// Board-level controls of the console.
#[derive(Debug, Default)]
pub struct Hardware;

impl Hardware {
    /// A hardware reset would reboot the firmware; there is none to reboot.
    pub fn reset(&mut self) -> Result<()> {
        warn!("hardware reset requested");
        Err(Error::Unsupported("hardware reset"))
    }
}
