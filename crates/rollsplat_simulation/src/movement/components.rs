//! Travel компоненты

use bevy::prelude::*;

use crate::input::SwipeDirection;

/// Максимальная длина raycast'а при старте качения (метры)
pub const TRAVEL_RAY_MAX_DISTANCE: f32 = 100.0;

/// Дистанция до точки остановки, на которой качение считается законченным
pub const ARRIVAL_DISTANCE: f32 = 1.0;

/// Фаза качения
///
/// Инвариант «катится ⇒ направление ненулевое» держит сам тип:
/// Traveling всегда несёт SwipeDirection, а у него нет нулевого вектора.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum TravelPhase {
    #[default]
    Idle,
    Traveling { direction: SwipeDirection },
}

/// Состояние качения шара
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TravelState {
    pub phase: TravelPhase,
    /// Точка остановки (hit point raycast'а). None = цели нет.
    pub stop_point: Option<Vec3>,
}

impl TravelState {
    pub fn is_traveling(&self) -> bool {
        matches!(self.phase, TravelPhase::Traveling { .. })
    }

    pub fn direction(&self) -> Option<SwipeDirection> {
        match self.phase {
            TravelPhase::Traveling { direction } => Some(direction),
            TravelPhase::Idle => None,
        }
    }

    /// Начать качение
    ///
    /// Промах raycast'а (`hit == None`) оставляет ПРЕДЫДУЩУЮ точку остановки.
    pub fn begin(&mut self, direction: SwipeDirection, hit: Option<Vec3>) {
        self.phase = TravelPhase::Traveling { direction };
        if let Some(point) = hit {
            self.stop_point = Some(point);
        }
    }

    /// Проверка прибытия: ближе ARRIVAL_DISTANCE к точке остановки → Idle
    ///
    /// Работает при любой фазе, пока точка остановки задана.
    pub fn arrive_if_close(&mut self, position: Vec3) -> bool {
        let Some(target) = self.stop_point else {
            return false;
        };

        if position.distance(target) < ARRIVAL_DISTANCE {
            self.phase = TravelPhase::Idle;
            self.stop_point = None;
            return true;
        }

        false
    }
}
