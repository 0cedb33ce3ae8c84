/// Console buttons
///
/// Six buttons: a d-pad and two action buttons. The host latches key events
/// with [`Buttons::set_input`]; games poll the latched state.
///
/// | Query            | Semantics                                             |
/// |------------------|-------------------------------------------------------|
/// | `pressed`        | Button is held right now                              |
/// | `just_pressed`   | Button went down since the last `just_pressed` query  |
///
/// `just_pressed` clears the latch it reads, so each press is reported once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::A,
        Button::B,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    pub const DPAD: [Button; 4] = [Button::Up, Button::Down, Button::Left, Button::Right];

    pub const ACTION: [Button; 2] = [Button::A, Button::B];

    fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, also used as the config key.
    pub fn name(self) -> &'static str {
        match self {
            Button::A => "a",
            Button::B => "b",
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Buttons {
    held: [bool; 6],
    latched: [bool; 6],
}

impl Buttons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a host key event. Key repeat (pressed while already held) does
    /// not count as a new press.
    pub fn set_input(&mut self, button: Button, pressed: bool) {
        let i = button.index();
        if pressed && !self.held[i] {
            self.latched[i] = true;
        }
        self.held[i] = pressed;
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held = [false; 6];
    }

    pub fn pressed(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    pub fn just_pressed(&mut self, button: Button) -> bool {
        std::mem::take(&mut self.latched[button.index()])
    }

    pub fn input_pressed(&self) -> bool {
        self.any_pressed(&Button::ALL)
    }

    pub fn input_just_pressed(&mut self) -> bool {
        self.any_just_pressed(&Button::ALL)
    }

    pub fn dpad_pressed(&self) -> bool {
        self.any_pressed(&Button::DPAD)
    }

    pub fn dpad_just_pressed(&mut self) -> bool {
        self.any_just_pressed(&Button::DPAD)
    }

    pub fn action_pressed(&self) -> bool {
        self.any_pressed(&Button::ACTION)
    }

    pub fn action_just_pressed(&mut self) -> bool {
        self.any_just_pressed(&Button::ACTION)
    }

    fn any_pressed(&self, buttons: &[Button]) -> bool {
        buttons.iter().any(|&b| self.pressed(b))
    }

    // Reads (and clears) every latch in the group, not just the first hit.
    fn any_just_pressed(&mut self, buttons: &[Button]) -> bool {
        buttons
            .iter()
            .fold(false, |any, &b| self.just_pressed(b) | any)
    }
}
