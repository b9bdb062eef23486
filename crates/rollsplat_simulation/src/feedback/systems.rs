//! Feedback systems (ECS)

use bevy::prelude::*;

use super::components::{DirtParticles, RollingSound};
use crate::components::{Ball, BallConfig};
use crate::movement::TravelState;

/// Система: TravelState → частицы + звук качения
///
/// - Traveling: пыль включена, звук качения стартует один раз
/// - Idle: пыль выключена, звук качения останавливается если играл
pub fn sync_travel_feedback(
    mut balls: Query<
        (Entity, &TravelState, &BallConfig, &mut DirtParticles, &mut RollingSound),
        With<Ball>,
    >,
) {
    for (entity, travel, config, mut particles, mut rolling) in balls.iter_mut() {
        let traveling = travel.is_traveling();

        particles.set_if_neq(DirtParticles { emitting: traveling });

        if traveling {
            if !rolling.playing && rolling.start(config.rolling_sound_volume) {
                crate::log(&format!("🔊 Ball {:?}: rolling sound on", entity));
            }
        } else if rolling.playing && rolling.stop() {
            crate::log(&format!("🔇 Ball {:?}: rolling sound off", entity));
        }
    }
}
