//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - ball: шар игрока (Ball, PaintColor, BallConfig)
//! - ground: тайлы уровня (GroundPiece, Wall, LevelEntity)
//!
//! Компоненты конкретных подсистем (SwipeTracker, TravelState, DirtParticles, ...)
//! живут в своих модулях: input, movement, feedback, painting.

pub mod ball;
pub mod ground;

// Re-exports для удобного импорта
pub use ball::*;
pub use ground::*;
