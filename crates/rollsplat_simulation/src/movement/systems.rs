//! Travel systems (ECS)

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

use super::components::TravelState;
use super::events::{TravelFinished, TravelOrder};
use crate::components::{Ball, BallConfig};
use crate::feedback::SwipeSoundRequested;

/// Система: Traveling → velocity = direction × speed
///
/// Пишем linvel КАЖДЫЙ тик качения (столкновения не должны тормозить шар).
/// В Idle velocity не трогаем: шар докатывается до стены сам.
pub fn drive_travel_velocity(
    mut balls: Query<(&TravelState, &BallConfig, &mut Velocity), With<Ball>>,
) {
    for (travel, config, mut velocity) in balls.iter_mut() {
        if let Some(direction) = travel.direction() {
            velocity.linvel = direction.to_vec3() * config.speed;
        }
    }
}

/// Система: проверка прибытия в точку остановки
pub fn check_arrival(
    mut balls: Query<(Entity, &Transform, &mut TravelState), With<Ball>>,
    mut finished: EventWriter<TravelFinished>,
) {
    for (entity, transform, mut travel) in balls.iter_mut() {
        // Без цели не берём &mut (иначе Changed<TravelState> каждый тик)
        if travel.stop_point.is_none() {
            continue;
        }

        if travel.arrive_if_close(transform.translation) {
            crate::log(&format!(
                "🛑 Ball {:?} arrived at {:?}",
                entity, transform.translation
            ));
            finished.write(TravelFinished {
                entity,
                position: transform.translation,
            });
        }
    }
}

/// Система: TravelOrder → TravelState::begin + звук свайпа
///
/// Два ордера за тик (двойной свайп) применяются по очереди:
/// направление берётся из последнего, точка остановки — из последнего попадания.
pub fn start_travel(
    mut orders: EventReader<TravelOrder>,
    mut balls: Query<(&mut TravelState, &BallConfig), With<Ball>>,
    mut sounds: EventWriter<SwipeSoundRequested>,
) {
    for order in orders.read() {
        let Ok((mut travel, config)) = balls.get_mut(order.entity) else {
            continue;
        };

        if order.stop_point.is_none() {
            crate::log_warning(&format!(
                "⚠️ Ball {:?}: raycast {:?} missed, keeping previous stop point {:?}",
                order.entity, order.direction, travel.stop_point
            ));
        }

        travel.begin(order.direction, order.stop_point);

        sounds.write(SwipeSoundRequested {
            entity: order.entity,
            volume: config.swipe_sound_volume,
        });
    }
}
