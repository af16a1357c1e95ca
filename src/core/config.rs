use bevy::prelude::*;
use serde::Deserialize;

/// Initial window setup. The table keeps its aspect on resize; these only
/// pick the starting size.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Auto-close after N seconds (0 disables). Used by smoke runs.
    pub auto_close: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Button Football".into(),
            auto_close: 0.0,
        }
    }
}

/// Tuning for the rapier step and the shared fixture material.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed step frequency. Exactly one step runs per rendered frame.
    pub timestep_hz: f32,
    pub linear_damping: f32,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
    /// Below this speed a piece counts as stopped and its velocity is zeroed.
    pub stop_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep_hz: 60.0,
            linear_damping: 3.0,
            density: 1.0,
            friction: 10.0,
            restitution: 0.4,
            stop_speed: 0.01,
        }
    }
}

/// Disc sizes in table centimeters.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PieceConfig {
    pub button_radius: f32,
    pub ball_radius: f32,
}

impl Default for PieceConfig {
    fn default() -> Self {
        Self {
            button_radius: 2.5,
            ball_radius: 1.0,
        }
    }
}

#[derive(Resource, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub pieces: PieceConfig,
    /// Overlay rapier's debug renderer on top of the table.
    pub rapier_debug: bool,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("read {}: {e}", path.as_ref().display()))?;
        ron::from_str(&raw).map_err(|e| format!("parse {}: {e}", path.as_ref().display()))
    }

    /// Returns defaults (plus the load error) when the file is missing or
    /// malformed, so a broken config never prevents startup.
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> (Self, Option<String>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Soft validation: out-of-range values produce warnings, not failures.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            warnings.push(format!(
                "window size {}x{} not positive",
                self.window.width, self.window.height
            ));
        }
        if self.physics.timestep_hz <= 0.0 {
            warnings.push(format!(
                "physics.timestep_hz {} must be > 0",
                self.physics.timestep_hz
            ));
        }
        if self.physics.linear_damping < 0.0 {
            warnings.push(format!(
                "physics.linear_damping {} negative",
                self.physics.linear_damping
            ));
        }
        if !(0.0..=1.0).contains(&self.physics.restitution) {
            warnings.push(format!(
                "physics.restitution {} outside [0,1]",
                self.physics.restitution
            ));
        }
        if self.physics.stop_speed <= 0.0 {
            warnings.push(format!(
                "physics.stop_speed {} must be > 0",
                self.physics.stop_speed
            ));
        }
        if self.pieces.button_radius <= 0.0 || self.pieces.ball_radius <= 0.0 {
            warnings.push(format!(
                "piece radii ({}, {}) must be > 0",
                self.pieces.button_radius, self.pieces.ball_radius
            ));
        }
        warnings
    }

    /// Step frequency actually used for the simulation. A non-positive (or
    /// non-finite) configured value would turn the step dt into inf/NaN or
    /// a negative delta, so it falls back to the default rate; `validate()`
    /// warns about it separately.
    pub fn effective_timestep_hz(&self) -> f32 {
        let hz = self.physics.timestep_hz;
        if hz.is_finite() && hz > 0.0 {
            hz
        } else {
            PhysicsConfig::default().timestep_hz
        }
    }

    /// Seconds of one fixed physics step.
    pub fn step_dt(&self) -> f32 {
        1.0 / self.effective_timestep_hz()
    }
}
