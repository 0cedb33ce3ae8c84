use std::collections::HashMap;

use anyhow::anyhow;
use sdl2::keyboard::Scancode;
use thumbox_core::device::Button;

use crate::config::KeyBindings;

/// Maps SDL scancodes to console buttons.
pub struct KeyMap {
    map: HashMap<Scancode, Button>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a console button. Several keys may share a button.
    pub fn bind(&mut self, scancode: Scancode, button: Button) {
        self.map.insert(scancode, button);
    }

    /// Look up the console button for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<Button> {
        self.map.get(&scancode).copied()
    }

    /// Resolve configured key names into a map.
    pub fn from_bindings(bindings: &KeyBindings) -> anyhow::Result<Self> {
        let mut km = Self::new();
        for button in Button::ALL {
            let name = bindings.get(button);
            let scancode = Scancode::from_name(name)
                .ok_or_else(|| anyhow!("unknown key {name:?} for button {}", button.name()))?;
            km.bind(scancode, button);
        }
        Ok(km)
    }
}
