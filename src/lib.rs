pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod physics;
pub mod table;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{BallPiece, ButtonPiece, Moving, Piece, PieceRadius, Team};
pub use crate::core::config::GameConfig;
