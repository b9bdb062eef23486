//! Feedback domain — частицы и звук качения
//!
//! Симуляция хранит только ЖЕЛАЕМОЕ состояние:
//! - DirtParticles.emitting — эмиттер пыли включён
//! - RollingSound.playing — looping звук качения играет
//! - SwipeSoundRequested — one-shot звук свайпа
//!
//! Клиент читает Changed<..> / events и дёргает bevy_audio + спавнит частицы.
//! Нет клипа на стороне клиента → воспроизведение молча пропускается.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::{DirtParticles, RollingSound};
pub use events::SwipeSoundRequested;
pub use systems::sync_travel_feedback;

use crate::BallSet;

/// Plugin feedback'а (частицы + звук)
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        crate::configure_ball_sets(app);

        app.add_event::<SwipeSoundRequested>()
            .add_systems(FixedUpdate, sync_travel_feedback.in_set(BallSet::Motion));
    }
}
