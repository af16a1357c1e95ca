//! The slingshot gesture: press on a button, drag away, release to shoot.
//! Velocity is the vector from the release point back to the piece, so a
//! longer pull means a harder shot aimed opposite the drag.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::components::{ButtonPiece, Moving, PieceRadius, Team};
use crate::table::layout::TableLayout;
use bevy_rapier2d::prelude::Velocity;

const AIM_COLOR: Color = Color::srgba(1.0, 0.85, 0.2, 0.9);

/// Drag state. At most one piece is armed at a time; a press while already
/// dragging is ignored rather than re-arming.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub enum AimGesture {
    #[default]
    Idle,
    Dragging { piece: Entity, current: Vec2 },
}

impl AimGesture {
    /// Arms the gesture if a piece was hit. No-op while already dragging.
    pub fn press(&mut self, hit: Option<Entity>, at: Vec2) {
        if let (AimGesture::Idle, Some(piece)) = (*self, hit) {
            *self = AimGesture::Dragging { piece, current: at };
        }
    }

    pub fn drag_to(&mut self, at: Vec2) {
        if let AimGesture::Dragging { current, .. } = self {
            *current = at;
        }
    }

    /// Disarms unconditionally and reports the armed piece with the final
    /// drag point, if any. Releasing while idle yields nothing.
    pub fn release(&mut self) -> Option<(Entity, Vec2)> {
        match std::mem::take(self) {
            AimGesture::Dragging { piece, current } => Some((piece, current)),
            AimGesture::Idle => None,
        }
    }
}

/// Strict disc test: a point exactly on the rim does not count.
pub fn hit_test(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) < radius * radius
}

/// Release velocity in table units per second: pull back and let go.
pub fn shot_velocity(piece: Vec2, release: Vec2) -> Vec2 {
    piece - release
}

fn cursor_table_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    layout: &TableLayout,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    window.cursor_position().map(|p| layout.to_table(p))
}

pub fn begin_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<TableLayout>,
    pieces: Query<(Entity, &Transform, &PieceRadius, &Team), With<ButtonPiece>>,
    mut gesture: ResMut<AimGesture>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(at) = cursor_table_position(&windows, &layout) else {
        return;
    };
    // only the player's own buttons can be shot; nearest hit wins when
    // discs overlap
    let hit = pieces
        .iter()
        .filter(|(_, _, _, team)| **team == Team::Home)
        .filter(|(_, tf, radius, _)| hit_test(tf.translation.truncate(), radius.0, at))
        .min_by(|(_, a, _, _), (_, b, _, _)| {
            let da = a.translation.truncate().distance_squared(at);
            let db = b.translation.truncate().distance_squared(at);
            da.total_cmp(&db)
        })
        .map(|(entity, _, _, _)| entity);
    gesture.press(hit, at);
}

pub fn update_drag(
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<TableLayout>,
    mut gesture: ResMut<AimGesture>,
) {
    if matches!(*gesture, AimGesture::Idle) {
        return;
    }
    if let Some(at) = cursor_table_position(&windows, &layout) {
        gesture.drag_to(at);
    }
}

pub fn release_shot(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    mut gesture: ResMut<AimGesture>,
    mut pieces: Query<(&Transform, &mut Velocity), With<ButtonPiece>>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some((entity, end)) = gesture.release() else {
        return;
    };
    // the armed piece may have despawned between press and release
    let Ok((transform, mut velocity)) = pieces.get_mut(entity) else {
        return;
    };
    let v = shot_velocity(transform.translation.truncate(), end);
    debug!("shot: |v| = {:.2}", v.length());
    velocity.linvel = v;
    commands.entity(entity).insert(Moving);
}

/// Aim feedback: rim highlight on the armed piece and a line from the drag
/// point back to it (the direction the piece will fly).
pub fn draw_aim(
    gesture: Res<AimGesture>,
    pieces: Query<(&Transform, &PieceRadius), With<ButtonPiece>>,
    mut gizmos: Gizmos,
) {
    let AimGesture::Dragging { piece, current } = *gesture else {
        return;
    };
    let Ok((transform, radius)) = pieces.get(piece) else {
        return;
    };
    let center = transform.translation.truncate();
    gizmos.circle_2d(
        Isometry2d::from_translation(center),
        radius.0 + 0.5,
        AIM_COLOR,
    );
    gizmos.line_2d(current, center, AIM_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn press_on_piece_arms_the_gesture() {
        let mut g = AimGesture::default();
        g.press(Some(entity(1)), Vec2::new(3.0, 4.0));
        assert!(matches!(g, AimGesture::Dragging { current, .. } if current == Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn press_on_empty_felt_stays_idle() {
        let mut g = AimGesture::default();
        g.press(None, Vec2::ZERO);
        assert_eq!(g, AimGesture::Idle);
    }

    #[test]
    fn second_press_does_not_rearm() {
        let mut g = AimGesture::default();
        g.press(Some(entity(1)), Vec2::ZERO);
        g.press(Some(entity(2)), Vec2::new(9.0, 9.0));
        assert!(matches!(g, AimGesture::Dragging { piece, .. } if piece == entity(1)));
    }

    #[test]
    fn drag_updates_only_while_armed() {
        let mut g = AimGesture::default();
        g.drag_to(Vec2::new(5.0, 5.0));
        assert_eq!(g, AimGesture::Idle);
        g.press(Some(entity(1)), Vec2::ZERO);
        g.drag_to(Vec2::new(5.0, 5.0));
        assert!(matches!(g, AimGesture::Dragging { current, .. } if current == Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn release_always_returns_to_idle() {
        let mut g = AimGesture::default();
        g.press(Some(entity(1)), Vec2::new(1.0, 1.0));
        let shot = g.release();
        assert_eq!(shot, Some((entity(1), Vec2::new(1.0, 1.0))));
        assert_eq!(g, AimGesture::Idle);
        // releasing again is a quiet no-op
        assert_eq!(g.release(), None);
    }

    #[test]
    fn zero_length_drag_still_releases() {
        let mut g = AimGesture::default();
        let at = Vec2::new(2.0, 2.0);
        g.press(Some(entity(7)), at);
        let (piece, end) = g.release().unwrap();
        assert_eq!(piece, entity(7));
        assert_eq!(shot_velocity(at, end), Vec2::ZERO);
        assert_eq!(g, AimGesture::Idle);
    }

    #[test]
    fn hit_test_excludes_the_rim() {
        let c = Vec2::new(10.0, -4.0);
        assert!(hit_test(c, 2.5, c + Vec2::new(2.49, 0.0)));
        assert!(!hit_test(c, 2.5, c + Vec2::new(2.5, 0.0)));
        assert!(!hit_test(c, 2.5, c + Vec2::new(3.0, 0.0)));
    }

    #[test]
    fn shot_points_away_from_the_drag() {
        let piece = Vec2::new(0.0, 0.0);
        let release = Vec2::new(-10.0, -5.0);
        assert_eq!(shot_velocity(piece, release), Vec2::new(10.0, 5.0));
    }
}
