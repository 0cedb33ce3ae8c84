pub mod pong;
pub mod registry;
pub mod sampler;

pub use pong::Pong;
pub use sampler::Sampler;
