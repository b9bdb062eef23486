//! Physics module
//!
//! Rapier как backend:
//! - RigidBody/Collider бандлы для шара и тайлов (bodies)
//! - spatial queries: raycast точки остановки, overlap-сфера под шаром (probes)
//!
//! Velocity шара пишет movement::drive_travel_velocity, интегрирует Rapier.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub mod bodies;
pub mod probes;

// Re-export основных типов
pub use bodies::{ball_body, ground_body, wall_body, TILE_HALF_EXTENT};
pub use probes::{cast_travel_rays, probe_ground};

use crate::BallSet;

/// Plugin spatial queries (требует RapierPhysicsPlugin в App)
pub struct SpatialProbePlugin;

impl Plugin for SpatialProbePlugin {
    fn build(&self, app: &mut App) {
        crate::configure_ball_sets(app);

        app.add_systems(
            FixedUpdate,
            (
                probe_ground.in_set(BallSet::GroundProbe),
                cast_travel_rays.in_set(BallSet::PathProbe),
            ),
        );
    }
}

/// Подключить Rapier в fixed schedule
///
/// Физика шагает в FixedPostUpdate — сразу после наших систем в FixedUpdate,
/// поэтому velocity, выставленная в тике, применяется в этом же тике.
pub fn install_rapier(app: &mut App) {
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule());
}
