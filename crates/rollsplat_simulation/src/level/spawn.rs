//! Spawn/despawn уровня
//!
//! Каждая entity уровня получает LevelEntity — по нему уровень и чистится.
//! Высоты: земля y = 0, стены y = 1, центр шара y = 1 (низ шара на верхней грани земли).

use bevy::prelude::*;

use super::layout::{LevelLayout, Tile};
use crate::components::{Ball, BallConfig, GroundPiece, LevelEntity, PaintColor, Wall, BALL_RADIUS};
use crate::physics::{ball_body, ground_body, wall_body, TILE_HALF_EXTENT};

/// Заспавнить раскладку, вернуть entity шара
pub fn spawn_level(
    commands: &mut Commands,
    layout: &LevelLayout,
    paint: PaintColor,
    config: BallConfig,
) -> Entity {
    for (row, column, tile) in layout.tiles() {
        let position = LevelLayout::tile_position(row, column);

        match tile {
            Tile::Void => {}
            Tile::Ground => {
                commands.spawn((
                    GroundPiece::default(),
                    LevelEntity,
                    Transform::from_translation(position),
                    ground_body(),
                ));
            }
            Tile::Wall => {
                commands.spawn((
                    Wall,
                    LevelEntity,
                    Transform::from_translation(position + Vec3::Y * (2.0 * TILE_HALF_EXTENT)),
                    wall_body(),
                ));
            }
        }
    }

    let (row, column) = layout.ball_start();
    let ball_position =
        LevelLayout::tile_position(row, column) + Vec3::Y * (TILE_HALF_EXTENT + BALL_RADIUS);

    let ball = commands
        .spawn((
            Ball,
            paint,
            config.sanitized(),
            LevelEntity,
            Transform::from_translation(ball_position),
            ball_body(),
        ))
        .id();

    crate::log_info(&format!(
        "🗺️ Level spawned: {}x{}, {} ground pieces, ball {:?} at {:?}",
        layout.width(),
        layout.depth(),
        layout.ground_count(),
        ball,
        ball_position
    ));

    ball
}

/// Удалить все entity уровня
pub fn despawn_level(commands: &mut Commands, entities: &Query<Entity, With<LevelEntity>>) {
    for entity in entities.iter() {
        commands.entity(entity).despawn();
    }
}
