//! Ball компоненты: маркер шара, цвет покраски, настройки

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::feedback::{DirtParticles, RollingSound};
use crate::input::SwipeTracker;
use crate::movement::TravelState;
use crate::painting::GroundContacts;

/// Радиус шара (метры). Тайлы 1×1, шар ровно в полтайла.
pub const BALL_RADIUS: f32 = 0.5;

/// Шар игрока
///
/// Required Components подтягивают всё состояние control loop'а:
/// свайпы, travel FSM, feedback, контакты с землёй.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    PaintColor,
    BallConfig,
    SwipeTracker,
    TravelState,
    DirtParticles,
    RollingSound,
    GroundContacts,
    Velocity
)]
pub struct Ball;

/// Цвет, которым шар красит землю
///
/// Выбирается один раз при spawn и больше не меняется.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PaintColor(pub Color);

impl Default for PaintColor {
    fn default() -> Self {
        Self(Color::WHITE)
    }
}

impl PaintColor {
    /// Случайный цвет: hue во второй половине круга (180°..360°),
    /// saturation/value — весь диапазон [0, 1]
    pub fn random(rng: &mut impl Rng) -> Self {
        let hue = rng.gen_range(0.5..=1.0_f32) * 360.0;
        let saturation = rng.gen_range(0.0..=1.0_f32);
        let value = rng.gen_range(0.0..=1.0_f32);
        Self(Color::hsv(hue, saturation, value))
    }
}

/// Настройки шара (числовые ручки без взаимозависимостей)
///
/// Загружается из JSON (см. `config`), отсутствующие поля = default.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct BallConfig {
    /// Скорость качения (m/s)
    pub speed: f32,
    /// Порог распознавания свайпа (квадрат длины смещения, пиксели²)
    pub min_swipe_recognition: f32,
    /// Громкость one-shot звука свайпа [0, 1]
    pub swipe_sound_volume: f32,
    /// Громкость looping звука качения [0, 1]
    pub rolling_sound_volume: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            speed: 15.0,
            min_swipe_recognition: 500.0,
            swipe_sound_volume: 0.7,
            rolling_sound_volume: 0.5,
        }
    }
}

impl BallConfig {
    /// Громкости зажаты в [0, 1], остальное как есть
    pub fn sanitized(self) -> Self {
        Self {
            swipe_sound_volume: self.swipe_sound_volume.clamp(0.0, 1.0),
            rolling_sound_volume: self.rolling_sound_volume.clamp(0.0, 1.0),
            ..self
        }
    }
}
