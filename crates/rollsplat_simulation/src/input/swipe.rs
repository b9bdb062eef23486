//! Классификатор свайпов
//!
//! Смещение указателя между anchor-сэмплом и текущим → одна из четырёх осей.
//! Пока смещение меньше порога, anchor НЕ двигается (смещение накапливается).

use bevy::prelude::*;

/// Полоса вокруг нуля для компоненты нормализованного смещения (открытый интервал)
pub const SWIPE_AXIS_BAND: f32 = 0.5;

/// Направление качения (только оси XZ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SwipeDirection {
    /// Свайп вверх → -Z
    Forward,
    /// Свайп вниз → +Z
    Back,
    /// Свайп влево → -X
    Left,
    /// Свайп вправо → +X
    Right,
}

impl SwipeDirection {
    /// Единичный вектор в world space
    pub fn to_vec3(self) -> Vec3 {
        match self {
            SwipeDirection::Forward => Vec3::NEG_Z,
            SwipeDirection::Back => Vec3::Z,
            SwipeDirection::Left => Vec3::NEG_X,
            SwipeDirection::Right => Vec3::X,
        }
    }
}

/// Результат классификации одного смещения
///
/// Обе оси могут сработать одновременно — порядок выдачи: vertical, horizontal.
/// Диагональ (обе компоненты вне полосы) не даёт ни одной команды.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeGesture {
    pub vertical: Option<SwipeDirection>,
    pub horizontal: Option<SwipeDirection>,
}

impl SwipeGesture {
    pub fn directions(&self) -> impl Iterator<Item = SwipeDirection> {
        self.vertical.into_iter().chain(self.horizontal)
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }
}

/// Классифицировать смещение указателя
///
/// `None` — смещение меньше порога (`length_squared < threshold`), ждём дальше.
pub fn classify_swipe(delta: Vec2, threshold: f32) -> Option<SwipeGesture> {
    if delta.length_squared() < threshold {
        return None;
    }

    // Нулевое смещение при нулевом пороге: направления нет, жест пустой
    let Some(normalized) = delta.try_normalize() else {
        return Some(SwipeGesture::default());
    };

    let in_band = |component: f32| component > -SWIPE_AXIS_BAND && component < SWIPE_AXIS_BAND;

    let mut gesture = SwipeGesture::default();

    if in_band(normalized.x) {
        gesture.vertical = Some(if normalized.y > 0.0 {
            SwipeDirection::Forward
        } else {
            SwipeDirection::Back
        });
    }

    if in_band(normalized.y) {
        gesture.horizontal = Some(if normalized.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        });
    }

    Some(gesture)
}

/// Per-ball состояние классификатора свайпов
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct SwipeTracker {
    /// Сэмпл, от которого меряется смещение (None = указатель отпущен)
    pub anchor: Option<Vec2>,
}

impl SwipeTracker {
    /// Обработать сэмпл зажатого указателя
    ///
    /// - нет anchor → запоминаем сэмпл, жеста нет
    /// - смещение < порога → anchor остаётся, жеста нет
    /// - иначе → жест, anchor = текущий сэмпл
    pub fn sample(&mut self, current: Vec2, threshold: f32) -> Option<SwipeGesture> {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(current);
            return None;
        };

        let gesture = classify_swipe(current - anchor, threshold)?;
        self.anchor = Some(current);
        Some(gesture)
    }

    /// Указатель отпущен
    pub fn reset(&mut self) {
        self.anchor = None;
    }
}
