//! Movement domain — travel FSM шара
//!
//! Содержит:
//! - TravelState (Idle / Traveling + точка остановки)
//! - TravelOrder (event: начать качение, точка остановки уже найдена raycast'ом)
//! - TravelFinished (event: шар доехал до точки остановки)
//!
//! Порядок в тике (BallSet):
//! Motion (velocity) → ... → Arrival (check_arrival) → ... → TravelStart (start_travel)

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;


pub use components::{TravelPhase, TravelState, ARRIVAL_DISTANCE, TRAVEL_RAY_MAX_DISTANCE};
pub use events::{TravelFinished, TravelOrder};
pub use systems::{check_arrival, drive_travel_velocity, start_travel};

use crate::feedback::SwipeSoundRequested;
use crate::BallSet;

/// Plugin travel FSM
///
/// Raycast точки остановки живёт в `physics::SpatialProbePlugin` —
/// этот plugin работает с уже готовыми TravelOrder.
pub struct TravelPlugin;

impl Plugin for TravelPlugin {
    fn build(&self, app: &mut App) {
        crate::configure_ball_sets(app);

        app.add_event::<TravelOrder>()
            .add_event::<TravelFinished>()
            .add_event::<SwipeSoundRequested>()
            .add_systems(
                FixedUpdate,
                (
                    drive_travel_velocity.in_set(BallSet::Motion),
                    check_arrival.in_set(BallSet::Arrival),
                    start_travel.in_set(BallSet::TravelStart),
                ),
            );
    }
}
