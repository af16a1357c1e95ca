//! Static table: the board sprites, the painted pitch markings, and the
//! fixed colliders (rails, goal posts, goal nets) that keep pieces in play.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::physics::{GROUP_BALL, GROUP_BUTTON, GROUP_WALL};

use super::{GOAL_DEPTH, GOAL_HEIGHT, PITCH_HEIGHT, PITCH_WIDTH, TABLE_HEIGHT, TABLE_WIDTH};

/// Penalty box ("16"): depth from the goal line and height, centimeters.
const SECTOR16: Vec2 = Vec2::new(30.0, 60.0);
/// Goal box ("5").
const SECTOR5: Vec2 = Vec2::new(11.0, 30.0);
const CENTER_CIRCLE_RADIUS: f32 = 16.0;
const PENALTY_SPOT_DISTANCE: f32 = 20.5;
const CORNER_ARC_RADIUS: f32 = 4.0;
const WALL_HALF_THICKNESS: f32 = 0.5;

const TABLE_COLOR: Color = Color::srgb(0.45, 0.32, 0.18);
const PITCH_COLOR: Color = Color::srgb(0.13, 0.45, 0.20);
const LINE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.9);
const NET_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.45);

pub fn spawn_table(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Name::new("table_board"),
        Sprite::from_color(TABLE_COLOR, Vec2::new(TABLE_WIDTH, TABLE_HEIGHT)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.spawn((
        Name::new("pitch"),
        Sprite::from_color(PITCH_COLOR, Vec2::new(PITCH_WIDTH, PITCH_HEIGHT)),
        Transform::from_xyz(0.0, 0.0, 0.05),
    ));

    for (name, center, half) in wall_segments() {
        commands.spawn((
            Name::new(name),
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            Friction {
                coefficient: cfg.physics.friction,
                combine_rule: CoefficientCombineRule::Average,
            },
            Restitution {
                coefficient: cfg.physics.restitution,
                combine_rule: CoefficientCombineRule::Average,
            },
            CollisionGroups::new(GROUP_WALL, GROUP_BUTTON | GROUP_BALL),
            Transform::from_xyz(center.x, center.y, 0.0),
        ));
    }
}

/// Axis-aligned rail segments as (name, center, half-extents).
///
/// The side rails sit on the pitch's goal lines with a gap for each goal
/// mouth; the goal itself is a three-walled pocket behind the line so the
/// ball stays in the net after a score.
fn wall_segments() -> Vec<(&'static str, Vec2, Vec2)> {
    let pitch_half = Vec2::new(PITCH_WIDTH / 2.0, PITCH_HEIGHT / 2.0);
    let mouth_half = GOAL_HEIGHT / 2.0;
    // side rail piece: from the goal mouth up to the pitch corner
    let side_half_len = (pitch_half.y - mouth_half) / 2.0;
    let side_center_y = mouth_half + side_half_len;
    let side_x = pitch_half.x + WALL_HALF_THICKNESS;
    // goal pocket; the back wall sits flush with the table edge
    let goal_back_x = pitch_half.x + GOAL_DEPTH;
    let goal_side_y = mouth_half + WALL_HALF_THICKNESS;
    let goal_side_center_x = pitch_half.x + GOAL_DEPTH / 2.0;

    let mut walls = vec![
        (
            "rail_top",
            Vec2::new(0.0, pitch_half.y + WALL_HALF_THICKNESS),
            Vec2::new(pitch_half.x + 1.0, WALL_HALF_THICKNESS),
        ),
        (
            "rail_bottom",
            Vec2::new(0.0, -pitch_half.y - WALL_HALF_THICKNESS),
            Vec2::new(pitch_half.x + 1.0, WALL_HALF_THICKNESS),
        ),
    ];
    for side in [-1.0f32, 1.0] {
        walls.push((
            "rail_side_upper",
            Vec2::new(side * side_x, side_center_y),
            Vec2::new(WALL_HALF_THICKNESS, side_half_len),
        ));
        walls.push((
            "rail_side_lower",
            Vec2::new(side * side_x, -side_center_y),
            Vec2::new(WALL_HALF_THICKNESS, side_half_len),
        ));
        walls.push((
            "goal_back",
            Vec2::new(side * goal_back_x, 0.0),
            Vec2::new(WALL_HALF_THICKNESS, mouth_half + 1.0),
        ));
        walls.push((
            "goal_top",
            Vec2::new(side * goal_side_center_x, goal_side_y),
            Vec2::new(GOAL_DEPTH / 2.0, WALL_HALF_THICKNESS),
        ));
        walls.push((
            "goal_bottom",
            Vec2::new(side * goal_side_center_x, -goal_side_y),
            Vec2::new(GOAL_DEPTH / 2.0, WALL_HALF_THICKNESS),
        ));
    }
    walls
}

/// Immediate-mode pitch markings. Gizmos live in world (table) space, so
/// they inherit the camera's letterbox fit for free.
pub fn draw_markings(mut gizmos: Gizmos) {
    let pitch_half = Vec2::new(PITCH_WIDTH / 2.0, PITCH_HEIGHT / 2.0);

    gizmos.rect_2d(Isometry2d::IDENTITY, pitch_half * 2.0, LINE_COLOR);
    gizmos.line_2d(
        Vec2::new(0.0, -pitch_half.y),
        Vec2::new(0.0, pitch_half.y),
        LINE_COLOR,
    );
    gizmos.circle_2d(Isometry2d::IDENTITY, CENTER_CIRCLE_RADIUS, LINE_COLOR);
    gizmos.circle_2d(Isometry2d::IDENTITY, 0.4, LINE_COLOR);

    for side in [-1.0f32, 1.0] {
        // side = -1 is the home (left) end; everything mirrors in x
        let goal_line_x = side * pitch_half.x;
        let inward = -side;

        gizmos.rect_2d(
            Isometry2d::from_translation(Vec2::new(
                goal_line_x + inward * SECTOR16.x / 2.0,
                0.0,
            )),
            SECTOR16,
            LINE_COLOR,
        );
        gizmos.rect_2d(
            Isometry2d::from_translation(Vec2::new(
                goal_line_x + inward * SECTOR5.x / 2.0,
                0.0,
            )),
            SECTOR5,
            LINE_COLOR,
        );

        let spot = Vec2::new(goal_line_x + inward * PENALTY_SPOT_DISTANCE, 0.0);
        gizmos.circle_2d(Isometry2d::from_translation(spot), 0.4, LINE_COLOR);

        // arc of the penalty-spot circle that pokes out of the box
        let cut = (SECTOR16.x - PENALTY_SPOT_DISTANCE) / CENTER_CIRCLE_RADIUS;
        let half_sweep = cut.acos();
        // arc_2d starts at local +Y and sweeps clockwise; aim the middle of
        // the sweep toward the pitch center
        let mid = if inward > 0.0 {
            0.0
        } else {
            std::f32::consts::PI
        };
        gizmos.arc_2d(
            Isometry2d::new(
                spot,
                Rot2::radians(mid + half_sweep - std::f32::consts::FRAC_PI_2),
            ),
            half_sweep * 2.0,
            CENTER_CIRCLE_RADIUS,
            LINE_COLOR,
        );

        draw_goal(&mut gizmos, goal_line_x, side);

        // corner arcs on this end
        for up in [-1.0f32, 1.0] {
            let corner = Vec2::new(goal_line_x, up * pitch_half.y);
            let mid = f32::atan2(-up, inward);
            gizmos.arc_2d(
                Isometry2d::new(
                    corner,
                    Rot2::radians(mid + std::f32::consts::FRAC_PI_4 - std::f32::consts::FRAC_PI_2),
                ),
                std::f32::consts::FRAC_PI_2,
                CORNER_ARC_RADIUS,
                LINE_COLOR,
            );
        }
    }
}

/// Goal frame plus a light net grid behind the goal line.
fn draw_goal(gizmos: &mut Gizmos, goal_line_x: f32, side: f32) {
    let mouth_half = GOAL_HEIGHT / 2.0;
    let back_x = goal_line_x + side * GOAL_DEPTH;

    gizmos.rect_2d(
        Isometry2d::from_translation(Vec2::new(
            goal_line_x + side * GOAL_DEPTH / 2.0,
            0.0,
        )),
        Vec2::new(GOAL_DEPTH, GOAL_HEIGHT),
        LINE_COLOR,
    );
    // 3x3 net grid
    for i in 1..3 {
        let x = goal_line_x + side * GOAL_DEPTH * i as f32 / 3.0;
        gizmos.line_2d(
            Vec2::new(x, -mouth_half),
            Vec2::new(x, mouth_half),
            NET_COLOR,
        );
    }
    for i in 1..3 {
        let y = -mouth_half + GOAL_HEIGHT * i as f32 / 3.0;
        gizmos.line_2d(Vec2::new(goal_line_x, y), Vec2::new(back_x, y), NET_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rails_leave_only_the_goal_mouths_open() {
        let walls = wall_segments();
        // 2 long rails + 5 segments per end
        assert_eq!(walls.len(), 12);
        // side rail pieces stop exactly at the goal mouth
        let mouth_half = GOAL_HEIGHT / 2.0;
        for (name, center, half) in &walls {
            if name.starts_with("rail_side") {
                let near_edge = center.y.abs() - half.y;
                assert!((near_edge - mouth_half).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn goal_pocket_sits_inside_the_table() {
        for (name, center, half) in wall_segments() {
            if name == "goal_back" {
                assert!(center.x.abs() + half.x <= TABLE_WIDTH / 2.0 + 1e-4, "{name}");
            }
            assert!(center.y.abs() + half.y <= TABLE_HEIGHT / 2.0 + 1e-4, "{name}");
        }
    }
}
