//! UI components organized by feature

pub mod board;
pub mod player;

// Re-export commonly used components
pub use board::{BoardInteraction, BoardRenderer, BoardView};
pub use player::PlayerView;
