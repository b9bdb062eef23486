//! Painting events

use bevy::prelude::*;

/// Event: кусок земли покрашен впервые
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GroundPainted {
    pub ground: Entity,
    pub by: Entity,
    pub color: Color,
}

/// Event: все куски земли уровня покрашены (один раз на уровень)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCompleted {
    pub painted: usize,
}
