//! Ball control integration test
//!
//! Headless App без Rapier: probes (raycast/overlap) не подключены,
//! их результаты подаём руками — TravelOrder и GroundContacts.
//!
//! Проверяем:
//! - свайп → SwipeIntent (порог, оси, игнор во время качения)
//! - отпускание всегда сбрасывает anchor
//! - velocity = speed каждый тик до прибытия, потом не трогается
//! - feedback: пыль + звук качения включаются/выключаются по фазе
//! - покраска не чаще одного раза, LevelCompleted ровно один раз

use bevy::ecs::event::Events;
use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;
use rollsplat_simulation::*;

/// Helper: App с подсистемами шара (без physics probes)
fn create_ball_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins((SwipeInputPlugin, TravelPlugin, FeedbackPlugin, PaintingPlugin));
    app
}

/// Один simulation tick
fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn drain<E: Event>(app: &mut App) -> Vec<E> {
    app.world_mut().resource_mut::<Events<E>>().drain().collect()
}

fn send<E: Event>(app: &mut App, event: E) {
    app.world_mut().resource_mut::<Events<E>>().send(event);
}

fn press(app: &mut App, x: f32, y: f32) {
    app.world_mut()
        .resource_mut::<PointerState>()
        .press(Vec2::new(x, y));
}

fn release(app: &mut App) {
    app.world_mut().resource_mut::<PointerState>().release();
}

fn spawn_ball(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((Ball, Transform::from_translation(position)))
        .id()
}

fn set_position(app: &mut App, ball: Entity, position: Vec3) {
    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(ball) {
        transform.translation = position;
    }
}

fn travel_state(app: &App, ball: Entity) -> TravelState {
    *app.world().get::<TravelState>(ball).unwrap()
}

// --- Swipe input ---

#[test]
fn test_swipe_up_emits_forward_intent() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::new(1.0, 1.0, 1.0));

    press(&mut app, 100.0, 100.0);
    tick(&mut app);
    assert!(drain::<SwipeIntent>(&mut app).is_empty());

    press(&mut app, 105.0, 200.0);
    tick(&mut app);

    let intents = drain::<SwipeIntent>(&mut app);
    assert_eq!(
        intents,
        vec![SwipeIntent {
            entity: ball,
            direction: SwipeDirection::Forward
        }]
    );
}

#[test]
fn test_small_drag_emits_nothing() {
    let mut app = create_ball_app();
    spawn_ball(&mut app, Vec3::ZERO);

    press(&mut app, 100.0, 100.0);
    tick(&mut app);
    press(&mut app, 110.0, 105.0); // 125 < 500
    tick(&mut app);

    assert!(drain::<SwipeIntent>(&mut app).is_empty());
}

#[test]
fn test_traveling_ball_ignores_swipes() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);

    app.world_mut()
        .get_mut::<TravelState>(ball)
        .unwrap()
        .begin(SwipeDirection::Left, Some(Vec3::new(-10.0, 0.0, 0.0)));

    press(&mut app, 100.0, 100.0);
    tick(&mut app);
    press(&mut app, 300.0, 100.0);
    tick(&mut app);

    assert!(drain::<SwipeIntent>(&mut app).is_empty());
    assert_eq!(app.world().get::<SwipeTracker>(ball).unwrap().anchor, None);
}

#[test]
fn test_release_clears_anchor_even_while_traveling() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);

    // Anchor набран, потом шар поехал
    press(&mut app, 100.0, 100.0);
    tick(&mut app);
    assert_eq!(
        app.world().get::<SwipeTracker>(ball).unwrap().anchor,
        Some(Vec2::new(100.0, 100.0))
    );

    app.world_mut()
        .get_mut::<TravelState>(ball)
        .unwrap()
        .begin(SwipeDirection::Back, None);

    release(&mut app);
    tick(&mut app);

    assert_eq!(app.world().get::<SwipeTracker>(ball).unwrap().anchor, None);
    assert!(!app.world().resource::<PointerState>().release_pending);
}

// --- Travel FSM ---

#[test]
fn test_velocity_holds_speed_until_arrival() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::new(0.0, 1.0, 0.0));
    let speed = BallConfig::default().speed;

    send(
        &mut app,
        TravelOrder {
            entity: ball,
            direction: SwipeDirection::Right,
            stop_point: Some(Vec3::new(5.5, 1.0, 0.0)),
        },
    );
    tick(&mut app);
    assert!(travel_state(&app, ball).is_traveling());

    // Едем: шар двигаем руками (Rapier нет), velocity выставляет система
    for x in [0.0, 1.0, 2.0, 3.0, 4.0] {
        set_position(&mut app, ball, Vec3::new(x, 1.0, 0.0));
        tick(&mut app);

        let velocity = app.world().get::<Velocity>(ball).unwrap();
        assert!((velocity.linvel.length() - speed).abs() < 1e-4, "x = {}", x);
        assert_eq!(velocity.linvel.normalize(), Vec3::X);
        assert!(travel_state(&app, ball).is_traveling(), "x = {}", x);
    }

    // 0.9 до точки остановки → прибыли
    set_position(&mut app, ball, Vec3::new(4.6, 1.0, 0.0));
    tick(&mut app);

    let state = travel_state(&app, ball);
    assert!(!state.is_traveling());
    assert_eq!(state.stop_point, None);

    let finished = drain::<TravelFinished>(&mut app);
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].entity, ball);

    // После прибытия velocity больше не выставляется
    app.world_mut().get_mut::<Velocity>(ball).unwrap().linvel = Vec3::ZERO;
    tick(&mut app);
    assert_eq!(app.world().get::<Velocity>(ball).unwrap().linvel, Vec3::ZERO);
}

#[test]
fn test_travel_order_requests_swipe_sound() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);

    send(
        &mut app,
        TravelOrder {
            entity: ball,
            direction: SwipeDirection::Forward,
            stop_point: Some(Vec3::new(0.0, 0.0, -4.0)),
        },
    );
    tick(&mut app);

    let sounds = drain::<SwipeSoundRequested>(&mut app);
    assert_eq!(sounds.len(), 1);
    assert_eq!(sounds[0].entity, ball);
    assert_eq!(sounds[0].volume, BallConfig::default().swipe_sound_volume);
}

#[test]
fn test_double_order_in_one_tick() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);

    send(
        &mut app,
        TravelOrder {
            entity: ball,
            direction: SwipeDirection::Forward,
            stop_point: Some(Vec3::new(0.0, 0.0, -4.0)),
        },
    );
    send(
        &mut app,
        TravelOrder {
            entity: ball,
            direction: SwipeDirection::Right,
            stop_point: None,
        },
    );
    tick(&mut app);

    let state = travel_state(&app, ball);
    assert_eq!(state.direction(), Some(SwipeDirection::Right));
    assert_eq!(state.stop_point, Some(Vec3::new(0.0, 0.0, -4.0)));
    assert_eq!(drain::<SwipeSoundRequested>(&mut app).len(), 2);
}

// --- Feedback ---

#[test]
fn test_feedback_follows_travel_phase() {
    let mut app = create_ball_app();
    let ball = spawn_ball(&mut app, Vec3::ZERO);

    send(
        &mut app,
        TravelOrder {
            entity: ball,
            direction: SwipeDirection::Left,
            stop_point: Some(Vec3::new(-3.0, 0.0, 0.0)),
        },
    );
    tick(&mut app); // TravelStart
    tick(&mut app); // Motion видит Traveling

    let world = app.world();
    assert!(world.get::<DirtParticles>(ball).unwrap().emitting);
    let rolling = world.get::<RollingSound>(ball).unwrap();
    assert!(rolling.playing);
    assert_eq!(rolling.volume, BallConfig::default().rolling_sound_volume);

    // Прибытие → следующий тик всё гасит
    set_position(&mut app, ball, Vec3::new(-2.5, 0.0, 0.0));
    tick(&mut app);
    tick(&mut app);

    let world = app.world();
    assert!(!world.get::<DirtParticles>(ball).unwrap().emitting);
    assert!(!world.get::<RollingSound>(ball).unwrap().playing);
}

// --- Painting ---

#[test]
fn test_ground_painted_at_most_once() {
    let mut app = create_ball_app();
    let red = Color::srgb(1.0, 0.0, 0.0);
    let blue = Color::srgb(0.0, 0.0, 1.0);

    let ground = app.world_mut().spawn(GroundPiece::default()).id();
    let wall = app.world_mut().spawn(Wall).id();

    let first = app
        .world_mut()
        .spawn((Ball, PaintColor(red), GroundContacts(vec![ground, wall])))
        .id();
    tick(&mut app);

    let piece = *app.world().get::<GroundPiece>(ground).unwrap();
    assert!(piece.colored);
    assert_eq!(piece.color, red);

    let painted = drain::<GroundPainted>(&mut app);
    assert_eq!(painted.len(), 1);
    assert_eq!(painted[0].by, first);

    // Второй шар другого цвета на том же куске — ничего не меняется
    app.world_mut()
        .spawn((Ball, PaintColor(blue), GroundContacts(vec![ground])));
    tick(&mut app);
    tick(&mut app);

    assert_eq!(app.world().get::<GroundPiece>(ground).unwrap().color, red);
    assert!(drain::<GroundPainted>(&mut app).is_empty());
}

#[test]
fn test_level_completed_fires_once() {
    let mut app = create_ball_app();

    let a = app.world_mut().spawn(GroundPiece::default()).id();
    let b = app.world_mut().spawn(GroundPiece::default()).id();
    let ball = app
        .world_mut()
        .spawn((Ball, PaintColor(Color::WHITE), GroundContacts(vec![a])))
        .id();

    tick(&mut app);
    let progress = *app.world().resource::<LevelProgress>();
    assert_eq!((progress.painted, progress.total), (1, 2));
    assert!(!progress.completed);
    assert!(drain::<LevelCompleted>(&mut app).is_empty());

    app.world_mut().get_mut::<GroundContacts>(ball).unwrap().0 = vec![b];
    tick(&mut app);
    tick(&mut app);
    tick(&mut app);

    let completed = drain::<LevelCompleted>(&mut app);
    assert_eq!(completed, vec![LevelCompleted { painted: 2 }]);
    assert!(app.world().resource::<LevelProgress>().completed);
}

#[test]
fn test_empty_level_never_completes() {
    let mut app = create_ball_app();
    tick(&mut app);
    assert!(drain::<LevelCompleted>(&mut app).is_empty());
}

// --- Level spawn ---

#[test]
fn test_spawn_builtin_level() {
    let mut app = create_ball_app();
    let layout = builtin_level(1).unwrap();

    let ball = {
        let mut commands = app.world_mut().commands();
        spawn_level(&mut commands, &layout, PaintColor(Color::WHITE), BallConfig::default())
    };
    app.world_mut().flush();

    let world = app.world_mut();
    let ground = world.query::<&GroundPiece>().iter(world).count();
    let level_entities = world.query_filtered::<Entity, With<LevelEntity>>().iter(world).count();
    let balls = world.query_filtered::<Entity, With<Ball>>().iter(world).count();

    assert_eq!(ground, layout.ground_count());
    assert_eq!(balls, 1);
    assert!(level_entities > ground);

    // Required Components шара на месте
    assert!(world.get::<TravelState>(ball).is_some());
    assert!(world.get::<SwipeTracker>(ball).is_some());
    assert!(world.get::<GroundContacts>(ball).is_some());
    assert!(world.get::<Velocity>(ball).is_some());

    // Центр шара на высоте 1 над стартовым тайлом
    let (row, column) = layout.ball_start();
    let expected = LevelLayout::tile_position(row, column) + Vec3::Y;
    assert_eq!(world.get::<Transform>(ball).unwrap().translation, expected);
}
