//! Rapier integration: fixed stepping, zero gravity (the table is viewed
//! top-down), and the settle check that marks the end of a shot.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Moving, PiecesSettled};
use crate::core::config::GameConfig;
use crate::core::system_order::PostPhysicsAdjustSet;

pub const GROUP_BUTTON: Group = Group::GROUP_1;
pub const GROUP_BALL: Group = Group::GROUP_2;
pub const GROUP_WALL: Group = Group::GROUP_3;

pub struct PhysicsSetupPlugin {
    pub timestep_hz: f32,
    pub debug_render: bool,
}

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            // One step per rendered frame, always the same dt. Frame pacing
            // jitter changes wall-clock speed, never trajectories.
            .insert_resource(TimestepMode::Fixed {
                dt: 1.0 / self.timestep_hz,
                substeps: 1,
            })
            .add_event::<PiecesSettled>()
            .add_systems(Startup, disable_gravity)
            .add_systems(Update, settle_moving_pieces.in_set(PostPhysicsAdjustSet));

        if self.debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// Top-down view: no gravity, damping alone slows the pieces.
fn disable_gravity(mut rapier_config: Query<&mut RapierConfiguration>) {
    if let Ok(mut config) = rapier_config.single_mut() {
        config.gravity = Vec2::ZERO;
    }
}

/// Zeroes velocities that fall under the stop threshold and clears the
/// `Moving` marker. When the last marker goes, the shot is over and
/// [`PiecesSettled`] fires.
pub fn settle_moving_pieces(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut moving: Query<(Entity, &mut Velocity), With<Moving>>,
    mut settled: EventWriter<PiecesSettled>,
) {
    if moving.is_empty() {
        return;
    }
    let stop_speed_sq = cfg.physics.stop_speed * cfg.physics.stop_speed;
    let mut still_moving = 0usize;
    for (entity, mut velocity) in &mut moving {
        if velocity.linvel.length_squared() < stop_speed_sq {
            velocity.linvel = Vec2::ZERO;
            velocity.angvel = 0.0;
            commands.entity(entity).remove::<Moving>();
        } else {
            still_moving += 1;
        }
    }
    if still_moving == 0 {
        debug!("all pieces settled");
        settled.write(PiecesSettled);
    }
}

/// Shared fixture material for every dynamic piece, mirroring the config.
pub fn piece_physics_bundle(cfg: &GameConfig, radius: f32) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::ball(radius),
        Velocity::zero(),
        Damping {
            linear_damping: cfg.physics.linear_damping,
            angular_damping: cfg.physics.linear_damping,
        },
        ColliderMassProperties::Density(cfg.physics.density),
        Friction {
            coefficient: cfg.physics.friction,
            combine_rule: CoefficientCombineRule::Average,
        },
        Restitution {
            coefficient: cfg.physics.restitution,
            combine_rule: CoefficientCombineRule::Average,
        },
        Ccd::enabled(),
    )
}
