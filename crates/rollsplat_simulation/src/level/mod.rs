//! Level domain — ASCII раскладки уровней
//!
//! Формат (одна строка = один ряд, верхний ряд = самый отрицательный Z):
//! - `#` стена
//! - `.` кусок земли
//! - `B` кусок земли + старт шара
//! - ` ` пустота
//!
//! Короткие строки добиваются пустотой до ширины самой длинной.

pub mod builtin;
pub mod layout;
pub mod spawn;


pub use builtin::{builtin_level, BUILTIN_LEVELS};
pub use layout::{LevelError, LevelLayout, Tile};
pub use spawn::{despawn_level, spawn_level};
