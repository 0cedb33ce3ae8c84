use tracing::warn;

use crate::error::{Error, Result};

/// Serial link cable between two consoles. No peer exists on the desktop.
#[derive(Debug, Default)]
pub struct Link;

impl Link {
    pub fn send(&mut self, data: &[u8]) -> Result<()> {
        warn!(len = data.len(), "link send requested");
        Err(Error::Unsupported("link send"))
    }

    pub fn receive(&mut self) -> Result<Vec<u8>> {
        warn!("link receive requested");
        Err(Error::Unsupported("link receive"))
    }
}
