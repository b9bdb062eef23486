//! Painting systems (ECS)

use bevy::prelude::*;

use super::components::{GroundContacts, LevelProgress};
use super::events::{GroundPainted, LevelCompleted};
use crate::components::{Ball, GroundPiece, PaintColor};

/// Система: GroundContacts → покраска непокрашенных GroundPiece
///
/// Контакты без GroundPiece (стены, другие шары) игнорируются.
/// Уже покрашенные куски не перекрашиваются.
pub fn tint_ground_contacts(
    balls: Query<(Entity, &GroundContacts, &PaintColor), With<Ball>>,
    mut pieces: Query<&mut GroundPiece>,
    mut painted: EventWriter<GroundPainted>,
) {
    for (ball, contacts, paint) in balls.iter() {
        for &ground in contacts.0.iter() {
            let Ok(mut piece) = pieces.get_mut(ground) else {
                continue;
            };

            if piece.colored {
                continue;
            }

            piece.paint(paint.0);
            painted.write(GroundPainted {
                ground,
                by: ball,
                color: paint.0,
            });
        }
    }
}

/// Система: пересчёт LevelProgress + LevelCompleted
pub fn track_level_progress(
    pieces: Query<&GroundPiece>,
    mut progress: ResMut<LevelProgress>,
    mut completed: EventWriter<LevelCompleted>,
) {
    let total = pieces.iter().count();
    let painted = pieces.iter().filter(|piece| piece.colored).count();

    if progress.total != total || progress.painted != painted {
        progress.total = total;
        progress.painted = painted;
    }

    if progress.is_fully_painted() && !progress.completed {
        progress.completed = true;
        crate::log_info(&format!("🎉 Level complete: {} ground pieces painted", painted));
        completed.write(LevelCompleted { painted });
    }
}
