//! Physics бандлы для entity уровня
//!
//! - Шар: RigidBody::Dynamic, без трения и отскока (иначе тормозит о стыки тайлов)
//! - Земля/стены: RigidBody::Fixed, куб 1×1×1

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::BALL_RADIUS;

/// Половина ребра тайла (тайлы 1×1×1)
pub const TILE_HALF_EXTENT: f32 = 0.5;

/// Rapier компоненты шара
///
/// Velocity сюда не входит — её подтягивает `#[require]` на Ball.
pub fn ball_body() -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::ball(BALL_RADIUS),
        Friction {
            coefficient: 0.0,
            combine_rule: CoefficientCombineRule::Min,
        },
        Restitution {
            coefficient: 0.0,
            combine_rule: CoefficientCombineRule::Min,
        },
        // Вращение визуально не нужно, а с ним шар уводит вбок на стыках
        LockedAxes::ROTATION_LOCKED,
        Ccd::enabled(),
    )
}

/// Rapier компоненты куска земли
pub fn ground_body() -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(TILE_HALF_EXTENT, TILE_HALF_EXTENT, TILE_HALF_EXTENT),
    )
}

/// Rapier компоненты стены
pub fn wall_body() -> impl Bundle {
    (
        RigidBody::Fixed,
        Collider::cuboid(TILE_HALF_EXTENT, TILE_HALF_EXTENT, TILE_HALF_EXTENT),
    )
}
