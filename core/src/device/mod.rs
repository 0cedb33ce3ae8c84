pub mod audio;
pub mod buttons;
pub mod hardware;
pub mod link;
pub mod saves;

pub use audio::Audio;
pub use buttons::{Button, Buttons};
pub use hardware::Hardware;
pub use link::Link;
pub use saves::SaveData;
