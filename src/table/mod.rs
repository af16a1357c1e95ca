pub mod layout;
pub mod pitch;
pub mod spawn;

/// Full table size in centimeters (the board the pieces slide on).
pub const TABLE_WIDTH: f32 = 184.0;
pub const TABLE_HEIGHT: f32 = 120.0;

/// Playing field painted on the table, centered on it.
pub const PITCH_WIDTH: f32 = 167.0;
pub const PITCH_HEIGHT: f32 = 104.0;

/// Goal mouth: opening height along the goal line and depth behind it.
pub const GOAL_HEIGHT: f32 = 13.0;
pub const GOAL_DEPTH: f32 = 8.0;
