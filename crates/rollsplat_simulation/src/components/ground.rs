//! Тайлы уровня: земля (красится шаром) и стены

use bevy::prelude::*;

/// Базовый цвет непокрашенной земли
pub const UNPAINTED_GROUND: Color = Color::srgb(0.85, 0.85, 0.85);

/// Кусок земли, который шар красит проезжая сверху
///
/// Инвариант: после первой покраски `colored == true` и `color` больше не меняется.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GroundPiece {
    pub colored: bool,
    pub color: Color,
}

impl Default for GroundPiece {
    fn default() -> Self {
        Self {
            colored: false,
            color: UNPAINTED_GROUND,
        }
    }
}

impl GroundPiece {
    /// Покрасить, если ещё не покрашен
    ///
    /// Возвращает true только при первой покраске.
    pub fn paint(&mut self, color: Color) -> bool {
        if self.colored {
            return false;
        }
        self.colored = true;
        self.color = color;
        true
    }
}

/// Стена (останавливает шар, цель raycast'а)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Wall;

/// Маркер: entity принадлежит текущему уровню (despawn при смене уровня)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct LevelEntity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_piece_paint_once() {
        let mut piece = GroundPiece::default();
        assert!(!piece.colored);

        let red = Color::srgb(1.0, 0.0, 0.0);
        let blue = Color::srgb(0.0, 0.0, 1.0);

        assert!(piece.paint(red));
        assert!(piece.colored);
        assert_eq!(piece.color, red);

        // Повторная покраска ничего не меняет
        assert!(!piece.paint(blue));
        assert_eq!(piece.color, red);
    }
}
