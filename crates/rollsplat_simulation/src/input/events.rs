//! Input events

use bevy::prelude::*;

use super::swipe::SwipeDirection;

/// Event: свайп распознан, шар должен покатиться
///
/// Генерируется:
/// - classify_swipes (только для шаров, которые сейчас стоят)
///
/// Обрабатывается:
/// - cast_travel_rays (physics): ищет точку остановки → TravelOrder
///
/// Один свайп может дать ДВА intent'а за тик (вертикальный, затем горизонтальный),
/// если обе компоненты нормализованного смещения попали в полосу ±0.5.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SwipeIntent {
    pub entity: Entity,
    pub direction: SwipeDirection,
}
