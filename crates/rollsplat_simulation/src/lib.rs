//! ROLLSPLAT Simulation Core
//!
//! ECS-симуляция шара на Bevy 0.16 + Rapier:
//! свайп → raycast до стены → качение с постоянной скоростью → покраска земли.
//!
//! Архитектура:
//! - симуляция = правила (input, travel FSM, feedback state, покраска)
//! - client = устройства ввода, рендер, звук, частицы
//!
//! Все системы шара живут в FixedUpdate и упорядочены через BallSet.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod feedback;
pub mod input;
pub mod level;
pub mod logger;
pub mod movement;
pub mod painting;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{load_ball_config, ConfigError};
pub use feedback::{DirtParticles, FeedbackPlugin, RollingSound, SwipeSoundRequested};
pub use input::{PointerState, SwipeDirection, SwipeInputPlugin, SwipeIntent, SwipeTracker};
pub use level::{builtin_level, despawn_level, spawn_level, LevelError, LevelLayout, BUILTIN_LEVELS};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use movement::{TravelFinished, TravelOrder, TravelPhase, TravelPlugin, TravelState};
pub use painting::{GroundContacts, GroundPainted, LevelCompleted, LevelProgress, PaintingPlugin};
pub use physics::{install_rapier, SpatialProbePlugin};

/// Частота simulation tick (Hz)
pub const FIXED_HZ: f64 = 60.0;

/// Порядок систем шара внутри одного FixedUpdate тика
///
/// 1. Motion — velocity + частицы/звук по состоянию с прошлого тика
/// 2. GroundProbe — overlap-сфера под шаром (Rapier)
/// 3. Paint — покраска + прогресс уровня
/// 4. Arrival — проверка прибытия в точку остановки
/// 5. Input — свайпы (только для стоящих шаров)
/// 6. PathProbe — raycast точки остановки (Rapier)
/// 7. TravelStart — применение TravelOrder
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallSet {
    Motion,
    GroundProbe,
    Paint,
    Arrival,
    Input,
    PathProbe,
    TravelStart,
}

/// Цепочка BallSet (добавляется один раз, из любого plugin'а подсистемы)
struct BallSchedulePlugin;

impl Plugin for BallSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                BallSet::Motion,
                BallSet::GroundProbe,
                BallSet::Paint,
                BallSet::Arrival,
                BallSet::Input,
                BallSet::PathProbe,
                BallSet::TravelStart,
            )
                .chain(),
        );
    }
}

pub(crate) fn configure_ball_sets(app: &mut App) {
    if !app.is_plugin_added::<BallSchedulePlugin>() {
        app.add_plugins(BallSchedulePlugin);
    }
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Rapier НЕ подключается здесь — см. `install_rapier` (client, headless bin).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed мог уже поставить create_headless_app
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .register_type::<Ball>()
            .register_type::<PaintColor>()
            .register_type::<BallConfig>()
            .register_type::<GroundPiece>()
            .register_type::<Wall>()
            .register_type::<LevelEntity>()
            .register_type::<SwipeTracker>()
            .register_type::<TravelState>()
            .register_type::<DirtParticles>()
            .register_type::<RollingSound>()
            .register_type::<GroundContacts>()
            // Подсистемы
            .add_plugins((
                SwipeInputPlugin,
                TravelPlugin,
                FeedbackPlugin,
                PaintingPlugin,
                SpatialProbePlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Следующий цвет шара
    pub fn paint_color(&mut self) -> PaintColor {
        PaintColor::random(&mut self.rng)
    }
}

/// Создаёт minimal Bevy App для headless симуляции (без Rapier)
///
/// Время двигается вручную на один fixed tick за `app.update()`,
/// поэтому прогон не зависит от скорости машины.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / FIXED_HZ,
        )));

    app
}

/// Headless App с Rapier и всеми подсистемами (headless bin)
pub fn create_physics_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(bevy::transform::TransformPlugin)
        .add_plugins(SimulationPlugin);
    install_rapier(&mut app);

    app
}

/// Заспавнить уровень с новым случайным цветом шара
pub fn spawn_level_with_rng(
    commands: &mut Commands,
    rng: &mut DeterministicRng,
    layout: &LevelLayout,
    config: BallConfig,
) -> Entity {
    let paint = rng.paint_color();
    spawn_level(commands, layout, paint, config)
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
