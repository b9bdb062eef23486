//! Headless симуляция ROLLSPLAT
//!
//! Прогоняет встроенный уровень с Rapier и заскриптованными свайпами,
//! печатает прогресс покраски. Smoke test без окна.

use bevy::ecs::event::Events;
use bevy::prelude::*;
use rollsplat_simulation::{
    builtin_level, create_physics_app, log_error, spawn_level_with_rng, BallConfig,
    DeterministicRng, LevelCompleted, LevelProgress, PointerState, SwipeDirection,
    TravelFinished,
};

/// Решение первого встроенного уровня
const SCRIPT: [SwipeDirection; 4] = [
    SwipeDirection::Right,
    SwipeDirection::Back,
    SwipeDirection::Left,
    SwipeDirection::Forward,
];

/// Сколько тиков ждём TravelFinished на один свайп
const TRAVEL_TIMEOUT_TICKS: usize = 240;

/// Тики после прибытия: шар докатывается до стены
const SETTLE_TICKS: usize = 20;

fn main() {
    let seed = 42;
    println!("Starting ROLLSPLAT headless simulation (seed: {})", seed);

    let mut app = create_physics_app(seed);

    let layout = match builtin_level(0) {
        Ok(layout) => layout,
        Err(err) => {
            log_error(&format!("❌ Built-in level is broken: {}", err));
            std::process::exit(1);
        }
    };

    let ball = app
        .world_mut()
        .resource_scope(|world, mut rng: Mut<DeterministicRng>| {
            let mut commands = world.commands();
            spawn_level_with_rng(&mut commands, &mut rng, &layout, BallConfig::default())
        });
    app.world_mut().flush();

    // Даём Rapier создать тела
    run_ticks(&mut app, 10);

    let mut finished_cursor = app.world().resource::<Events<TravelFinished>>().get_cursor();
    let mut completed_cursor = app.world().resource::<Events<LevelCompleted>>().get_cursor();

    for direction in SCRIPT {
        swipe(&mut app, direction);

        let mut arrived = false;
        for _ in 0..TRAVEL_TIMEOUT_TICKS {
            app.update();

            let events = app.world().resource::<Events<TravelFinished>>();
            if finished_cursor.read(events).any(|event| event.entity == ball) {
                arrived = true;
                break;
            }
        }

        run_ticks(&mut app, SETTLE_TICKS);

        let progress = *app.world().resource::<LevelProgress>();
        println!(
            "Swipe {:?}: arrived={} painted {}/{}",
            direction, arrived, progress.painted, progress.total
        );
    }

    let events = app.world().resource::<Events<LevelCompleted>>();
    let completed = completed_cursor.read(events).count() > 0;
    let progress = *app.world().resource::<LevelProgress>();

    println!(
        "Simulation complete! painted {}/{} ({:.0}%), level completed: {}",
        progress.painted,
        progress.total,
        progress.ratio() * 100.0,
        completed || progress.completed
    );
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

/// Свайп на 100px: нажатие → сдвиг → отпускание (по тику на шаг)
fn swipe(app: &mut App, direction: SwipeDirection) {
    let start = Vec2::new(400.0, 300.0);
    let offset = match direction {
        SwipeDirection::Forward => Vec2::new(0.0, 100.0),
        SwipeDirection::Back => Vec2::new(0.0, -100.0),
        SwipeDirection::Left => Vec2::new(-100.0, 0.0),
        SwipeDirection::Right => Vec2::new(100.0, 0.0),
    };

    app.world_mut().resource_mut::<PointerState>().press(start);
    app.update();

    app.world_mut().resource_mut::<PointerState>().press(start + offset);
    app.update();

    app.world_mut().resource_mut::<PointerState>().release();
    app.update();
}
