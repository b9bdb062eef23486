//! Input systems (ECS)

use bevy::prelude::*;

use super::events::SwipeIntent;
use super::pointer::PointerState;
use super::swipe::SwipeTracker;
use crate::components::{Ball, BallConfig};
use crate::movement::TravelState;

/// Система: PointerState → SwipeIntent
///
/// # Порядок
/// 1. Шар катится → сэмпл НЕ берём (anchor не трогаем)
/// 2. Указатель зажат → SwipeTracker::sample → 0..2 intent'а
/// 3. Было отпускание → anchor сбрасывается ВСЕГДА (даже если шар катится)
pub fn classify_swipes(
    mut pointer: ResMut<PointerState>,
    mut balls: Query<(Entity, &mut SwipeTracker, &TravelState, &BallConfig), With<Ball>>,
    mut intents: EventWriter<SwipeIntent>,
) {
    let released = pointer.release_pending;

    for (entity, mut tracker, travel, config) in balls.iter_mut() {
        if pointer.held && !travel.is_traveling() {
            if let Some(gesture) = tracker.sample(pointer.position, config.min_swipe_recognition) {
                for direction in gesture.directions() {
                    crate::log(&format!("👆 Swipe {:?} → {:?}", direction, entity));
                    intents.write(SwipeIntent { entity, direction });
                }
            }
        }

        if released {
            tracker.reset();
        }
    }

    if released {
        pointer.release_pending = false;
    }
}
