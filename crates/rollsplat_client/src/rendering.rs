use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;
use rand::Rng;
use rollsplat_simulation::{Ball, DirtParticles, GroundPiece, LevelProgress, PaintColor, Wall};

use crate::levels::CurrentLevel;

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_visual_assets)
            .add_systems(Update, (
                attach_ground_visuals,
                attach_wall_visuals,
                attach_ball_visuals,
                sync_ground_colors,
                emit_dirt_motes,
                tick_dirt_motes,
                draw_progress_bar,
            ).chain());
    }
}

/// Общие меши/материалы (один куб на все тайлы)
#[derive(Resource)]
pub struct VisualAssets {
    pub tile_mesh: Handle<Mesh>,
    pub ball_mesh: Handle<Mesh>,
    pub wall_material: Handle<StandardMaterial>,
    pub dirt_mesh: Handle<Mesh>,
    pub dirt_material: Handle<StandardMaterial>,
}

/// Частица пыли из-под шара
#[derive(Component)]
pub struct DirtMote {
    pub lifetime: Timer,
    pub drift: Vec3,
}

fn load_visual_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(VisualAssets {
        tile_mesh: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        ball_mesh: meshes.add(Sphere::new(rollsplat_simulation::BALL_RADIUS)),
        wall_material: materials.add(Color::srgb(0.25, 0.22, 0.3)),
        dirt_mesh: meshes.add(Cuboid::new(0.08, 0.08, 0.08)),
        dirt_material: materials.add(Color::srgb(0.45, 0.35, 0.25)),
    });
}

/// Каждому куску земли — свой материал (красится независимо)
fn attach_ground_visuals(
    mut commands: Commands,
    query: Query<(Entity, &GroundPiece), Added<GroundPiece>>,
    assets: Res<VisualAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, piece) in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.tile_mesh.clone()),
            MeshMaterial3d(materials.add(piece.color)),
        ));
    }
}

fn attach_wall_visuals(
    mut commands: Commands,
    query: Query<Entity, Added<Wall>>,
    assets: Res<VisualAssets>,
) {
    for entity in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.tile_mesh.clone()),
            MeshMaterial3d(assets.wall_material.clone()),
        ));
    }
}

fn attach_ball_visuals(
    mut commands: Commands,
    query: Query<(Entity, &PaintColor), Added<Ball>>,
    assets: Res<VisualAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, paint) in query.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.ball_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: paint.0,
                perceptual_roughness: 0.4,
                ..default()
            })),
        ));
    }
}

/// GroundPiece.color → материал тайла
fn sync_ground_colors(
    query: Query<(&GroundPiece, &MeshMaterial3d<StandardMaterial>), Changed<GroundPiece>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (piece, material) in query.iter() {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = piece.color;
        }
    }
}

/// Пока эмиттер включён — одна частица за кадр позади шара
fn emit_dirt_motes(
    mut commands: Commands,
    balls: Query<(&Transform, &DirtParticles, &Velocity), With<Ball>>,
    assets: Res<VisualAssets>,
) {
    let mut rng = rand::thread_rng();

    for (transform, particles, velocity) in balls.iter() {
        if !particles.emitting {
            continue;
        }

        let behind = -velocity.linvel.normalize_or_zero() * 0.4;
        let jitter = Vec3::new(rng.gen_range(-0.15..0.15), 0.0, rng.gen_range(-0.15..0.15));
        let position = transform.translation + behind + jitter - Vec3::Y * 0.4;

        commands.spawn((
            DirtMote {
                lifetime: Timer::from_seconds(0.4, TimerMode::Once),
                drift: Vec3::new(jitter.x, rng.gen_range(0.5..1.2), jitter.z),
            },
            Mesh3d(assets.dirt_mesh.clone()),
            MeshMaterial3d(assets.dirt_material.clone()),
            Transform::from_translation(position),
        ));
    }
}

fn tick_dirt_motes(
    mut commands: Commands,
    mut motes: Query<(Entity, &mut DirtMote, &mut Transform)>,
    time: Res<Time>,
) {
    for (entity, mut mote, mut transform) in motes.iter_mut() {
        mote.lifetime.tick(time.delta());

        if mote.lifetime.finished() {
            commands.entity(entity).despawn();
            continue;
        }

        transform.translation += mote.drift * time.delta_secs();
        transform.scale = Vec3::splat(1.0 - mote.lifetime.fraction());
    }
}

/// Полоска прогресса покраски над уровнем (gizmos)
fn draw_progress_bar(
    progress: Res<LevelProgress>,
    current: Res<CurrentLevel>,
    mut gizmos: Gizmos,
) {
    if progress.total == 0 {
        return;
    }

    let bar_width = current.width as f32;
    let bar_height = 0.25;
    let ratio = progress.ratio();

    // Над верхним краем уровня, лежит в плоскости XZ
    let base = Vec3::new(current.center.x, 1.6, -1.0);
    let rotation = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);

    gizmos.rect(
        bevy::math::Isometry3d::new(base, rotation),
        Vec2::new(bar_width, bar_height),
        Color::srgb(0.3, 0.3, 0.3),
    );

    let fill_pos = base - Vec3::X * (bar_width * (1.0 - ratio) * 0.5);
    gizmos.rect(
        bevy::math::Isometry3d::new(fill_pos, rotation),
        Vec2::new(bar_width * ratio, bar_height),
        Color::srgb(0.2, 0.8, 0.3),
    );
}
