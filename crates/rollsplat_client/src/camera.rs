use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::levels::CurrentLevel;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (
            frame_current_level,
            zoom_camera_controls,
            update_camera_transform,
        ).chain());
    }
}

/// Камера над уровнем: смотрит на центр, -Z (Forward) вверху экрана
#[derive(Component)]
pub struct LevelCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub pitch: f32, // Наклон от горизонта (radians)
    pub zoom_speed: f32,
}

impl Default for LevelCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 15.0,
            pitch: 70f32.to_radians(),
            zoom_speed: 1.0,
        }
    }
}

impl LevelCamera {
    /// Дистанция, при которой уровень целиком влезает в портретный кадр
    pub fn framing_distance(width: usize, depth: usize) -> f32 {
        (width.max(depth) as f32 * 1.6).max(8.0)
    }
}

/// Новый уровень → перенастроить фокус и дистанцию
fn frame_current_level(
    current: Res<CurrentLevel>,
    mut query: Query<&mut LevelCamera>,
) {
    if !current.is_changed() {
        return;
    }

    for mut camera in query.iter_mut() {
        camera.focus = current.center;
        camera.distance = LevelCamera::framing_distance(current.width, current.depth);
    }
}

/// Mouse wheel: zoom
fn zoom_camera_controls(
    mut query: Query<&mut LevelCamera>,
    mut mouse_wheel: EventReader<MouseWheel>,
) {
    let mut camera = match query.single_mut() {
        Ok(cam) => cam,
        Err(_) => {
            mouse_wheel.clear();
            return;
        }
    };

    for wheel in mouse_wheel.read() {
        camera.distance -= wheel.y * camera.zoom_speed;
        camera.distance = camera.distance.clamp(4.0, 60.0);
    }
}

fn update_camera_transform(
    mut query: Query<(&LevelCamera, &mut Transform), Changed<LevelCamera>>,
) {
    for (camera, mut transform) in query.iter_mut() {
        // Камера сзади по +Z, поэтому -Z уходит вверх экрана
        let y = camera.distance * camera.pitch.sin();
        let z = camera.distance * camera.pitch.cos();

        let position = camera.focus + Vec3::new(0.0, y, z);

        *transform = Transform::from_translation(position)
            .looking_at(camera.focus, Vec3::Y);
    }
}
