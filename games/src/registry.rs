//! Games compiled into the binary.
//!
//! A game module announces itself with `inventory::submit!` and a
//! [`GameEntry`]; nothing else lists the games. The frontend picks one by its
//! short name on the command line and calls its factory with a fresh console.

use thumbox_core::console::{Game, Thumby};
use thumbox_core::error::Result;

/// Prepares the console (frame rate, save namespace) and builds the game.
pub type GameFactory = fn(&mut Thumby) -> Result<Box<dyn Game>>;

pub struct GameEntry {
    /// Short lowercase name, e.g. `pong`.
    pub name: &'static str,
    /// Shown in the window title and in `--list`.
    pub title: &'static str,
    pub create: GameFactory,
}

impl GameEntry {
    pub const fn new(name: &'static str, title: &'static str, create: GameFactory) -> Self {
        Self {
            name,
            title,
            create,
        }
    }
}

inventory::collect!(GameEntry);

/// Every registered game, ordered by name.
pub fn all() -> Vec<&'static GameEntry> {
    let mut games: Vec<_> = inventory::iter::<GameEntry>.into_iter().collect();
    games.sort_by_key(|game| game.name);
    games
}

/// Names of every registered game, ordered.
pub fn names() -> Vec<&'static str> {
    all().into_iter().map(|game| game.name).collect()
}

pub fn find(name: &str) -> Option<&'static GameEntry> {
    inventory::iter::<GameEntry>
        .into_iter()
        .find(|game| game.name == name)
}
