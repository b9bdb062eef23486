//! Состояние указателя (мышь / первый тач)

use bevy::prelude::*;

/// Pointer sample для текущего тика
///
/// # Coordinate System
/// Пиксели экрана, **y вверх** (клиент переворачивает координаты окна).
///
/// # Release
/// `release_pending` выставляет клиент при отпускании кнопки, сбрасывает
/// `classify_swipes`. Флаг не теряется, если за кадр не прошло ни одного FixedUpdate.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Кнопка/палец сейчас зажаты
    pub held: bool,
    /// Последняя известная позиция
    pub position: Vec2,
    /// Было отпускание, которое симуляция ещё не обработала
    pub release_pending: bool,
}

impl PointerState {
    pub fn press(&mut self, position: Vec2) {
        self.held = true;
        self.position = position;
    }

    pub fn release(&mut self) {
        if self.held {
            self.release_pending = true;
        }
        self.held = false;
    }
}
