//! Парсинг ASCII раскладки уровня

use std::str::FromStr;

use bevy::prelude::*;
use thiserror::Error;

/// Тайл раскладки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Void,
    Ground,
    Wall,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level layout is empty")]
    Empty,

    #[error("unknown tile {ch:?} at row {row}, column {column}")]
    UnknownTile { ch: char, row: usize, column: usize },

    #[error("level has no ball start ('B')")]
    MissingBall,

    #[error("level has two ball starts: row {first_row} column {first_column}, row {row} column {column}")]
    MultipleBalls {
        first_row: usize,
        first_column: usize,
        row: usize,
        column: usize,
    },
}

/// Раскладка уровня (ряды × колонки)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    rows: Vec<Vec<Tile>>,
    width: usize,
    /// (row, column) старта шара
    ball_start: (usize, usize),
}

impl LevelLayout {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub(crate) fn tile(&self, row: usize, column: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|tiles| tiles.get(column)).copied()
    }

    pub fn ball_start(&self) -> (usize, usize) {
        self.ball_start
    }

    /// Все тайлы с координатами (row, column)
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(column, tile)| (row, column, *tile))
        })
    }

    pub fn ground_count(&self) -> usize {
        self.tiles().filter(|(_, _, tile)| *tile == Tile::Ground).count()
    }

    /// Центр тайла на уровне земли (y = 0): x = column, z = row
    pub fn tile_position(row: usize, column: usize) -> Vec3 {
        Vec3::new(column as f32, 0.0, row as f32)
    }

    /// Геометрический центр раскладки (для камеры)
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.width.saturating_sub(1)) as f32 / 2.0,
            0.0,
            (self.depth().saturating_sub(1)) as f32 / 2.0,
        )
    }
}

impl FromStr for LevelLayout {
    type Err = LevelError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = source.lines().map(str::trim_end).collect();

        // Пустые строки по краям не считаются рядами
        while lines.first().is_some_and(|line| line.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        if lines.is_empty() {
            return Err(LevelError::Empty);
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut rows = Vec::with_capacity(lines.len());
        let mut ball_start: Option<(usize, usize)> = None;

        for (row, line) in lines.iter().enumerate() {
            let mut tiles = Vec::with_capacity(width);

            for (column, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Ground,
                    ' ' => Tile::Void,
                    'B' => {
                        if let Some((first_row, first_column)) = ball_start {
                            return Err(LevelError::MultipleBalls {
                                first_row,
                                first_column,
                                row,
                                column,
                            });
                        }
                        ball_start = Some((row, column));
                        Tile::Ground
                    }
                    other => {
                        return Err(LevelError::UnknownTile {
                            ch: other,
                            row,
                            column,
                        })
                    }
                };
                tiles.push(tile);
            }

            tiles.resize(width, Tile::Void);
            rows.push(tiles);
        }

        let ball_start = ball_start.ok_or(LevelError::MissingBall)?;

        Ok(Self {
            rows,
            width,
            ball_start,
        })
    }
}
