//! Screen <-> table coordinate bridge.
//!
//! World space *is* table space: centimeters, origin at the table center,
//! +y up. The camera scales that space into the window with an
//! aspect-preserving fit, and [`TableLayout`] mirrors the same fit in plain
//! math so cursor positions (window pixels, origin top-left, +y down) can be
//! mapped into table space without touching render internals.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::window::{PrimaryWindow, WindowResized};

use super::{TABLE_HEIGHT, TABLE_WIDTH};

/// Letterboxed fit of the table into the current window. Rebuilt on every
/// resize; conversions in both directions go through it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    /// Window size in logical pixels.
    pub window: Vec2,
    /// Top-left corner of the fitted table rect, window coordinates.
    pub origin: Vec2,
    /// Size of the fitted table rect in pixels.
    pub fitted: Vec2,
    /// Pixels per table centimeter.
    pub scale: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::from_window(Vec2::new(800.0, 600.0))
    }
}

impl TableLayout {
    /// Largest table rect that fits the window while keeping the table's
    /// aspect ratio, centered with equal margins on the constrained axis.
    pub fn from_window(window: Vec2) -> Self {
        let table_rate = TABLE_WIDTH / TABLE_HEIGHT;
        let rate = window.x / window.y;
        let scale = if rate > table_rate {
            // wider than the table: height-limited, side bars
            window.y / TABLE_HEIGHT
        } else {
            // taller (or exact): width-limited, top/bottom bars
            window.x / TABLE_WIDTH
        };
        let fitted = Vec2::new(TABLE_WIDTH * scale, TABLE_HEIGHT * scale);
        let origin = (window - fitted) / 2.0;
        Self {
            window,
            origin,
            fitted,
            scale,
        }
    }

    /// Window pixels (origin top-left, +y down) -> table centimeters
    /// (origin table center, +y up). Points outside the fitted rect map to
    /// table coordinates outside the table; callers decide whether to care.
    pub fn to_table(&self, screen: Vec2) -> Vec2 {
        let local = (screen - self.origin) / self.scale;
        Vec2::new(local.x - TABLE_WIDTH / 2.0, TABLE_HEIGHT / 2.0 - local.y)
    }

    /// Inverse of [`Self::to_table`].
    pub fn to_screen(&self, table: Vec2) -> Vec2 {
        let local = Vec2::new(
            table.x + TABLE_WIDTH / 2.0,
            TABLE_HEIGHT / 2.0 - table.y,
        );
        self.origin + local * self.scale
    }
}

/// Spawns the 2D camera. `AutoMin` over the full table size produces the
/// same centered letterbox fit as [`TableLayout::from_window`], so the
/// rendered image and the cursor math always agree.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: TABLE_WIDTH,
                min_height: TABLE_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Keeps [`TableLayout`] in sync with the primary window size.
pub fn sync_layout_on_resize(
    mut resize_events: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<TableLayout>,
) {
    let Some(last) = resize_events.read().last() else {
        return;
    };
    // Prefer the live window size; the event carries the same numbers but
    // the query survives event ordering quirks at startup.
    let size = match windows.single() {
        Ok(window) => Vec2::new(window.width(), window.height()),
        Err(_) => Vec2::new(last.width, last.height),
    };
    if size.x > 0.0 && size.y > 0.0 {
        *layout = TableLayout::from_window(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn exact_aspect_fills_window() {
        let l = TableLayout::from_window(Vec2::new(920.0, 600.0));
        assert_eq!(l.scale, 5.0);
        close(l.origin, Vec2::ZERO);
        close(l.fitted, Vec2::new(920.0, 600.0));
    }

    #[test]
    fn wide_window_gets_side_bars() {
        let l = TableLayout::from_window(Vec2::new(1200.0, 600.0));
        assert_eq!(l.scale, 5.0);
        close(l.fitted, Vec2::new(920.0, 600.0));
        close(l.origin, Vec2::new(140.0, 0.0));
    }

    #[test]
    fn tall_window_gets_top_bottom_bars() {
        let l = TableLayout::from_window(Vec2::new(800.0, 600.0));
        // width-limited: 800 / 184
        let scale = 800.0 / TABLE_WIDTH;
        assert!((l.scale - scale).abs() < 1e-5);
        close(l.fitted, Vec2::new(800.0, TABLE_HEIGHT * scale));
        assert_eq!(l.origin.x, 0.0);
        assert!(l.origin.y > 0.0);
        // centered: equal bars
        close(
            l.origin * 2.0 + l.fitted,
            Vec2::new(800.0, 600.0),
        );
    }

    #[test]
    fn scale_matches_the_camera_auto_min_fit() {
        // the camera uses AutoMin over the table, i.e. min(w/W, h/H)
        for size in [
            Vec2::new(920.0, 600.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(1920.0, 1080.0),
            Vec2::new(400.0, 900.0),
            Vec2::new(184.0, 120.0),
        ] {
            let l = TableLayout::from_window(size);
            let auto_min = (size.x / TABLE_WIDTH).min(size.y / TABLE_HEIGHT);
            assert!(
                (l.scale - auto_min).abs() < 1e-5,
                "{size}: {} != {auto_min}",
                l.scale
            );
        }
    }

    #[test]
    fn window_center_is_table_center() {
        let l = TableLayout::from_window(Vec2::new(1024.0, 768.0));
        close(l.to_table(Vec2::new(512.0, 384.0)), Vec2::ZERO);
    }

    #[test]
    fn y_axis_flips() {
        let l = TableLayout::from_window(Vec2::new(920.0, 600.0));
        // top-left of the fitted rect is the table's top-left corner
        close(
            l.to_table(Vec2::ZERO),
            Vec2::new(-TABLE_WIDTH / 2.0, TABLE_HEIGHT / 2.0),
        );
    }

    #[test]
    fn to_screen_inverts_to_table() {
        let l = TableLayout::from_window(Vec2::new(1333.0, 612.0));
        for p in [
            Vec2::new(10.0, 20.0),
            Vec2::new(-80.0, 55.0),
            Vec2::ZERO,
            Vec2::new(92.0, -60.0),
        ] {
            close(l.to_table(l.to_screen(p)), p);
        }
    }

    #[test]
    fn resize_rescales_but_preserves_table_point() {
        let a = TableLayout::from_window(Vec2::new(800.0, 600.0));
        let b = TableLayout::from_window(Vec2::new(1600.0, 600.0));
        let table_point = Vec2::new(30.0, -12.0);
        // same table point, different pixel locations, both invertible
        close(a.to_table(a.to_screen(table_point)), table_point);
        close(b.to_table(b.to_screen(table_point)), table_point);
        assert!(b.scale > a.scale);
    }
}
