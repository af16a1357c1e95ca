//! Kick-off setup: eleven buttons per team in a 4-4-2 shape plus the ball.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BallPiece, ButtonPiece, Piece, PieceRadius, Team};
use crate::core::config::GameConfig;
use crate::physics::{piece_physics_bundle, GROUP_BALL, GROUP_BUTTON, GROUP_WALL};

use super::PITCH_WIDTH;

const HOME_COLOR: Color = Color::srgb(0.85, 0.15, 0.15);
const AWAY_COLOR: Color = Color::srgb(0.15, 0.25, 0.85);
const BALL_COLOR: Color = Color::srgb(0.05, 0.05, 0.05);

/// Home-side 4-4-2 in table centimeters; the away side mirrors in x.
/// Keeper hugs the goal line like the tabletop original.
fn formation() -> [Vec2; 11] {
    let goal_line = PITCH_WIDTH / 2.0;
    [
        Vec2::new(-(goal_line - 2.5), 0.0),
        Vec2::new(-55.0, -39.0),
        Vec2::new(-55.0, -13.0),
        Vec2::new(-55.0, 13.0),
        Vec2::new(-55.0, 39.0),
        Vec2::new(-28.0, -39.0),
        Vec2::new(-28.0, -13.0),
        Vec2::new(-28.0, 13.0),
        Vec2::new(-28.0, 39.0),
        Vec2::new(-8.0, -22.0),
        Vec2::new(-8.0, 22.0),
    ]
}

pub fn spawn_pieces(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // one unit circle shared by every piece; children scale it to radius
    let circle = meshes.add(Circle::new(1.0));
    let home = materials.add(HOME_COLOR);
    let away = materials.add(AWAY_COLOR);
    let ball = materials.add(BALL_COLOR);

    for position in formation() {
        spawn_button(&mut commands, &cfg, position, Team::Home, &circle, &home);
        spawn_button(
            &mut commands,
            &cfg,
            Vec2::new(-position.x, position.y),
            Team::Away,
            &circle,
            &away,
        );
    }

    let radius = cfg.pieces.ball_radius;
    commands
        .spawn((
            Name::new("ball"),
            Piece,
            BallPiece,
            PieceRadius(radius),
            piece_physics_bundle(&cfg, radius),
            CollisionGroups::new(GROUP_BALL, GROUP_BUTTON | GROUP_BALL | GROUP_WALL),
            Transform::from_xyz(0.0, 0.0, 0.2),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh2d(circle.clone()),
                MeshMaterial2d(ball.clone()),
                Transform::from_scale(Vec3::splat(radius)),
            ));
        });
}

fn spawn_button(
    commands: &mut Commands,
    cfg: &GameConfig,
    position: Vec2,
    team: Team,
    circle: &Handle<Mesh>,
    material: &Handle<ColorMaterial>,
) {
    let radius = cfg.pieces.button_radius;
    commands
        .spawn((
            Name::new(match team {
                Team::Home => "button_home",
                Team::Away => "button_away",
            }),
            Piece,
            ButtonPiece,
            team,
            PieceRadius(radius),
            piece_physics_bundle(cfg, radius),
            CollisionGroups::new(GROUP_BUTTON, GROUP_BUTTON | GROUP_BALL | GROUP_WALL),
            Transform::from_xyz(position.x, position.y, 0.2),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh2d(circle.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_scale(Vec3::splat(radius)),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PITCH_HEIGHT;

    #[test]
    fn formation_fits_the_home_half() {
        for p in formation() {
            assert!(p.x < 0.0, "{p} not in the home half");
            assert!(p.x.abs() <= PITCH_WIDTH / 2.0);
            assert!(p.y.abs() <= PITCH_HEIGHT / 2.0);
        }
    }

    #[test]
    fn no_two_buttons_overlap_at_kick_off() {
        let r = GameConfig::default().pieces.button_radius;
        let positions = formation();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) > 2.0 * r);
            }
            // mirrored opponent is at least a pitch-width of separation in x
            let mirrored = Vec2::new(-a.x, a.y);
            assert!(a.distance(mirrored) > 2.0 * r);
        }
    }
}
