use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use button_football::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(name = "button_football", about = "2D tabletop button football")]
struct Args {
    /// Path to a RON config file. When omitted, `assets/config/game.ron` is
    /// tried and defaults are used if it is missing.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// Deferred config diagnostics, logged once the Bevy logger is up.
#[derive(Resource, Default)]
struct ConfigWarnings(Vec<String>);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut warnings = Vec::new();
    let cfg = match &args.config {
        // An explicitly requested config must parse; failing here is fatal.
        Some(path) => GameConfig::load_from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            let (cfg, err) = GameConfig::load_or_default("assets/config/game.ron");
            if let Some(err) = err {
                warnings.push(format!("config not loaded, using defaults: {err}"));
            }
            cfg
        }
    };
    warnings.extend(cfg.validate());

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.10)))
        .insert_resource(cfg.clone())
        .insert_resource(ConfigWarnings(warnings))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .add_systems(Startup, log_config_warnings)
        .run();

    Ok(())
}

fn log_config_warnings(warnings: Res<ConfigWarnings>) {
    for w in &warnings.0 {
        warn!("config: {w}");
    }
}
