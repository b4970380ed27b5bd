//! Application state and screen coordination

pub mod screen;
pub mod session;

pub use screen::Coordinator;
pub use session::{GameSession, Phase};
