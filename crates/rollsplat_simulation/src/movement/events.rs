//! Movement events

use bevy::prelude::*;

use crate::input::SwipeDirection;

/// Event: начать качение
///
/// Генерируется:
/// - cast_travel_rays (physics) из SwipeIntent + raycast
///
/// Обрабатывается:
/// - start_travel: TravelState::begin + SwipeSoundRequested
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TravelOrder {
    pub entity: Entity,
    pub direction: SwipeDirection,
    /// Hit point raycast'а; None = промах
    pub stop_point: Option<Vec3>,
}

/// Event: шар доехал до точки остановки (Traveling → Idle)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TravelFinished {
    pub entity: Entity,
    pub position: Vec3,
}
