use bevy::prelude::*;

/// Marker component identifying any movable disc (player button or ball).
/// The entity holds the physics body & collider; a circle mesh child holds
/// the visual.
#[derive(Component)]
pub struct Piece;

/// Marker for a player button (a piece the drag gesture can arm).
#[derive(Component)]
pub struct ButtonPiece;

/// Marker for the ball.
#[derive(Component)]
pub struct BallPiece;

/// Which side a button belongs to. Used for color and for deciding which
/// pieces respond to the drag gesture; nothing else keys off it.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Team {
    Home,
    Away,
}

/// Simulation-space radius in table centimeters. Single source of truth for
/// both the collider and the visual scale, so physics and render geometry
/// cannot drift apart. Invariant: `> 0`.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct PieceRadius(pub f32);

/// Present from the moment a shot is applied until the piece's speed drops
/// below the configured stop threshold.
#[derive(Component)]
pub struct Moving;

/// Fired when the last `Moving` piece comes to rest.
#[derive(Event, Debug, Default)]
pub struct PiecesSettled;
