//! Встроенные уровни (каждый красится полностью)

use super::layout::{LevelError, LevelLayout};

pub const BUILTIN_LEVELS: &[&str] = &[
    // 1: кольцо вокруг колонны (→ ↓ ← ↑)
    "#####\n\
     #B..#\n\
     #.#.#\n\
     #...#\n\
     #####",
    // 2: змейка (→ ↓ ← ↓ →)
    "#######\n\
     #B....#\n\
     #####.#\n\
     #.....#\n\
     #.#####\n\
     #.....#\n\
     #######",
    // 3: старт в кармане (→ ↑ ← ↓ →)
    "#######\n\
     #.....#\n\
     #.###.#\n\
     #.#B..#\n\
     #.#####\n\
     #.....#\n\
     #######",
];

/// Распарсить встроенный уровень по индексу (по кругу)
pub fn builtin_level(index: usize) -> Result<LevelLayout, LevelError> {
    BUILTIN_LEVELS[index % BUILTIN_LEVELS.len()].parse()
}
