//! Последовательность уровней: спавн → покраска → пауза → следующий уровень

use bevy::prelude::*;
use rollsplat_simulation::{
    builtin_level, despawn_level, log_error, log_info, spawn_level_with_rng, BallConfig,
    DeterministicRng, LevelCompleted, LevelEntity, LevelLayout, LevelProgress, BUILTIN_LEVELS,
};

/// Пауза между завершением уровня и спавном следующего (секунды)
const NEXT_LEVEL_DELAY: f32 = 1.0;

pub struct LevelFlowPlugin;

impl Plugin for LevelFlowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLevel>()
            .init_resource::<BallConfigSetting>()
            .init_resource::<NextLevelTimer>()
            .add_systems(Startup, spawn_first_level)
            .add_systems(Update, (
                schedule_next_level,
                advance_level,
            ).chain());
    }
}

/// Текущий уровень (камера и HUD читают размеры отсюда)
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentLevel {
    pub index: usize,
    pub center: Vec3,
    pub width: usize,
    pub depth: usize,
}

/// BallConfig для новых шаров (загружен из файла или дефолт)
#[derive(Resource, Debug, Clone, Default)]
pub struct BallConfigSetting(pub BallConfig);

/// Отсчёт до следующего уровня (None = уровень ещё не пройден)
#[derive(Resource, Default)]
pub struct NextLevelTimer(pub Option<Timer>);

fn spawn_first_level(
    mut commands: Commands,
    mut rng: ResMut<DeterministicRng>,
    mut current: ResMut<CurrentLevel>,
    mut progress: ResMut<LevelProgress>,
    config: Res<BallConfigSetting>,
) {
    load_level(&mut commands, &mut rng, &mut current, 0, config.0);
    progress.reset();
}

fn schedule_next_level(
    mut completed: EventReader<LevelCompleted>,
    mut timer: ResMut<NextLevelTimer>,
) {
    if completed.read().last().is_some() && timer.0.is_none() {
        timer.0 = Some(Timer::from_seconds(NEXT_LEVEL_DELAY, TimerMode::Once));
    }
}

fn advance_level(
    mut commands: Commands,
    mut timer: ResMut<NextLevelTimer>,
    mut rng: ResMut<DeterministicRng>,
    mut current: ResMut<CurrentLevel>,
    mut progress: ResMut<LevelProgress>,
    config: Res<BallConfigSetting>,
    level_entities: Query<Entity, With<LevelEntity>>,
    time: Res<Time>,
) {
    let Some(countdown) = timer.0.as_mut() else {
        return;
    };

    countdown.tick(time.delta());
    if !countdown.finished() {
        return;
    }
    timer.0 = None;

    despawn_level(&mut commands, &level_entities);

    let next = (current.index + 1) % BUILTIN_LEVELS.len();
    load_level(&mut commands, &mut rng, &mut current, next, config.0);
    progress.reset();
}

fn load_level(
    commands: &mut Commands,
    rng: &mut DeterministicRng,
    current: &mut CurrentLevel,
    index: usize,
    config: BallConfig,
) {
    let layout: LevelLayout = match builtin_level(index) {
        Ok(layout) => layout,
        Err(err) => {
            log_error(&format!("❌ Level {} is broken: {}", index, err));
            return;
        }
    };

    spawn_level_with_rng(commands, rng, &layout, config);

    *current = CurrentLevel {
        index,
        center: layout.center(),
        width: layout.width(),
        depth: layout.depth(),
    };

    log_info(&format!("▶️ Level {} / {}", index + 1, BUILTIN_LEVELS.len()));
}
