pub mod fps_overlay;
