pub mod game;
pub mod thumby;

pub use game::Game;
pub use thumby::Thumby;
