//! Feedback events

use bevy::prelude::*;

/// Event: сыграть one-shot звук свайпа
///
/// Генерируется start_travel на каждый TravelOrder.
/// One-shot не прерывает looping звук качения.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SwipeSoundRequested {
    pub entity: Entity,
    /// Громкость [0, 1]
    pub volume: f32,
}
