//! Painting компоненты и ресурсы

use bevy::prelude::*;

/// Смещение центра probe-сферы вниз от центра шара (метры)
pub const GROUND_PROBE_OFFSET: f32 = 0.5;

/// Радиус probe-сферы (метры)
pub const GROUND_PROBE_RADIUS: f32 = 0.05;

/// Коллайдеры, которые пересекла probe-сфера под шаром в этом тике
///
/// Перезаписывается каждый тик (physics::probe_ground).
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GroundContacts(pub Vec<Entity>);

/// Прогресс покраски текущего уровня
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelProgress {
    pub painted: usize,
    pub total: usize,
    /// LevelCompleted уже отправлен
    pub completed: bool,
}

impl LevelProgress {
    /// Новый уровень — снова можно завершить
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_fully_painted(&self) -> bool {
        self.total > 0 && self.painted == self.total
    }

    /// Доля покрашенного [0, 1]
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.painted as f32 / self.total as f32
        }
    }
}
