//! Input domain — свайпы указателем
//!
//! Содержит:
//! - PointerState (resource, заполняется клиентом из мыши/тача)
//! - SwipeTracker + classify_swipe (классификатор жестов)
//! - SwipeIntent (event: шар должен покатиться в направлении)
//!
//! Симуляция не читает устройства напрямую: клиент пишет PointerState,
//! headless тесты — тоже.

use bevy::prelude::*;

pub mod events;
pub mod pointer;
pub mod swipe;
pub mod systems;

#[cfg(test)]
mod swipe_tests;

pub use events::SwipeIntent;
pub use pointer::PointerState;
pub use swipe::{classify_swipe, SwipeDirection, SwipeGesture, SwipeTracker, SWIPE_AXIS_BAND};
pub use systems::classify_swipes;

use crate::BallSet;

/// Plugin классификатора свайпов
pub struct SwipeInputPlugin;

impl Plugin for SwipeInputPlugin {
    fn build(&self, app: &mut App) {
        crate::configure_ball_sets(app);

        app.init_resource::<PointerState>()
            .add_event::<SwipeIntent>()
            .add_systems(FixedUpdate, classify_swipes.in_set(BallSet::Input));
    }
}
