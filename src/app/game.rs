//! Top-level plugin wiring the table, physics, and interaction together.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::fps_overlay::FpsOverlayPlugin;
use crate::interaction::aim::{self, AimGesture};
use crate::physics::PhysicsSetupPlugin;
use crate::table::layout::{self, TableLayout};
use crate::table::{pitch, spawn};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // GameConfig may be pre-inserted (main, tests); default otherwise
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with(GameConfig::default)
            .clone();

        app.add_plugins((
            PhysicsSetupPlugin {
                timestep_hz: cfg.effective_timestep_hz(),
                debug_render: cfg.rapier_debug,
            },
            FpsOverlayPlugin,
        ))
        .insert_resource(TableLayout::from_window(Vec2::new(
            cfg.window.width,
            cfg.window.height,
        )))
        .init_resource::<AimGesture>()
        .configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_systems(
            Startup,
            (layout::spawn_camera, pitch::spawn_table, spawn::spawn_pieces),
        )
        .add_systems(
            Update,
            (
                layout::sync_layout_on_resize,
                aim::begin_drag,
                aim::update_drag,
                aim::release_shot,
            )
                .chain()
                .in_set(PrePhysicsSet),
        )
        .add_systems(Update, (pitch::draw_markings, aim::draw_aim));

        // smoke-test hook
        if cfg.window.auto_close > 0.0 {
            let deadline = cfg.window.auto_close;
            app.add_systems(
                Update,
                move |time: Res<Time>, mut exit: EventWriter<AppExit>| {
                    if time.elapsed_secs() >= deadline {
                        info!("auto-close after {deadline}s");
                        exit.write(AppExit::Success);
                    }
                },
            );
        }
    }
}
