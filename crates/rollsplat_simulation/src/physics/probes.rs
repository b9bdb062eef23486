//! Spatial queries через RapierContext
//!
//! Нет контекста (Rapier не подключен / ещё не создан) → probes ничего не находят:
//! raycast = промах, GroundContacts = пусто.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::Ball;
use crate::input::SwipeIntent;
use crate::movement::{TravelOrder, TRAVEL_RAY_MAX_DISTANCE};
use crate::painting::{GroundContacts, GROUND_PROBE_OFFSET, GROUND_PROBE_RADIUS};

/// Система: SwipeIntent → raycast → TravelOrder
///
/// Луч из центра шара вдоль направления, до TRAVEL_RAY_MAX_DISTANCE.
/// Собственный коллайдер шара исключён (луч стартует внутри него).
pub fn cast_travel_rays(
    mut intents: EventReader<SwipeIntent>,
    mut orders: EventWriter<TravelOrder>,
    balls: Query<&Transform, With<Ball>>,
    rapier_context: ReadRapierContext,
) {
    let context = rapier_context.single().ok();

    for intent in intents.read() {
        let Ok(transform) = balls.get(intent.entity) else {
            continue;
        };

        let origin = transform.translation;
        let direction = intent.direction.to_vec3();

        let stop_point = context.as_ref().and_then(|context| {
            let filter = QueryFilter::default()
                .exclude_rigid_body(intent.entity)
                .exclude_sensors();

            context
                .cast_ray(origin, direction, TRAVEL_RAY_MAX_DISTANCE, true, filter)
                .map(|(_, toi)| origin + direction * toi)
        });

        orders.write(TravelOrder {
            entity: intent.entity,
            direction: intent.direction,
            stop_point,
        });
    }
}

/// Система: overlap-сфера под шаром → GroundContacts
///
/// Центр сферы на GROUND_PROBE_OFFSET ниже центра шара (верхняя грань тайла),
/// радиус GROUND_PROBE_RADIUS. Работает каждый тик, катится шар или нет.
pub fn probe_ground(
    mut balls: Query<(Entity, &Transform, &mut GroundContacts), With<Ball>>,
    rapier_context: ReadRapierContext,
) {
    let Ok(context) = rapier_context.single() else {
        return;
    };

    let probe = Collider::ball(GROUND_PROBE_RADIUS);

    for (entity, transform, mut contacts) in balls.iter_mut() {
        contacts.0.clear();

        let center = transform.translation - Vec3::Y * GROUND_PROBE_OFFSET;
        let filter = QueryFilter::default().exclude_rigid_body(entity);

        context.intersect_shape(center, Quat::IDENTITY, &*probe.raw, filter, |hit| {
            contacts.0.push(hit);
            true // продолжаем поиск
        });
    }
}
