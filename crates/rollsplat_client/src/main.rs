use bevy::prelude::*;
use rollsplat_simulation::{install_rapier, load_ball_config, log_warning, BallConfig, SimulationPlugin};

mod audio;
mod camera;
mod input;
mod levels;
mod logging;
mod rendering;

use audio::BallAudioPlugin;
use camera::{CameraPlugin, LevelCamera};
use input::PointerCapturePlugin;
use levels::{BallConfigSetting, LevelFlowPlugin};
use rendering::RenderingSyncPlugin;

fn main() {
    logging::install();

    let config = load_config_from_args();

    let mut app = App::new();
    app
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ROLLSPLAT".to_string(),
                resolution: (540., 960.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin);

    install_rapier(&mut app);

    app.insert_resource(BallConfigSetting(config))
        // Pointer → PointerState
        .add_plugins(PointerCapturePlugin)
        // Level sequence
        .add_plugins(LevelFlowPlugin)
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        .add_plugins(BallAudioPlugin)
        .add_plugins(CameraPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Путь к JSON конфигу шара — первый аргумент командной строки
fn load_config_from_args() -> BallConfig {
    let Some(path) = std::env::args().nth(1) else {
        return BallConfig::default();
    };

    match load_ball_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log_warning(&format!("⚠️ Ball config {} rejected ({}), using defaults", path, err));
            BallConfig::default()
        }
    }
}

/// Lights + camera (уровень спавнит LevelFlowPlugin)
fn setup_scene(mut commands: Commands) {
    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            0.3,
            0.0,
        )),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 15.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        LevelCamera::default(),
    ));
}
