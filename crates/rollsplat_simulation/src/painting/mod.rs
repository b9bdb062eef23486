//! Painting domain — покраска земли под шаром
//!
//! Архитектура:
//! - physics::probe_ground (Rapier overlap) → GroundContacts на шаре
//! - tint_ground_contacts (чистый ECS) → GroundPiece::paint
//! - track_level_progress → LevelProgress + LevelCompleted (один раз на уровень)
//!
//! Правило покраски не зависит от physics backend'а: тесты пишут GroundContacts руками.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::{GroundContacts, LevelProgress, GROUND_PROBE_OFFSET, GROUND_PROBE_RADIUS};
pub use events::{GroundPainted, LevelCompleted};
pub use systems::{tint_ground_contacts, track_level_progress};

use crate::BallSet;

/// Plugin покраски земли + прогресса уровня
pub struct PaintingPlugin;

impl Plugin for PaintingPlugin {
    fn build(&self, app: &mut App) {
        crate::configure_ball_sets(app);

        app.init_resource::<LevelProgress>()
            .add_event::<GroundPainted>()
            .add_event::<LevelCompleted>()
            .add_systems(
                FixedUpdate,
                (tint_ground_contacts, track_level_progress)
                    .chain()
                    .in_set(BallSet::Paint),
            );
    }
}
