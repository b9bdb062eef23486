//! Звук шара: one-shot на свайп + looping качение
//!
//! Симуляция держит только желаемое состояние (SwipeSoundRequested, RollingSound),
//! здесь оно превращается в AudioPlayer entity.

use std::path::Path;

use bevy::audio::Volume;
use bevy::prelude::*;
use rollsplat_simulation::{log_warning, Ball, RollingSound, SwipeSoundRequested};

const SWIPE_SOUND: &str = "sounds/swipe.ogg";
const ROLLING_SOUND: &str = "sounds/rolling.ogg";

pub struct BallAudioPlugin;

impl Plugin for BallAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_ball_sounds)
            .add_systems(Update, (play_swipe_sounds, sync_rolling_loops));
    }
}

/// Хэндлы звуков (None = файла нет, играем тишину)
#[derive(Resource, Default)]
pub struct BallSounds {
    pub swipe: Option<Handle<AudioSource>>,
    pub rolling: Option<Handle<AudioSource>>,
}

/// Looping плеер качения (child шара)
#[derive(Component)]
pub struct RollingLoop(pub Entity);

fn load_optional(asset_server: &AssetServer, path: &str) -> Option<Handle<AudioSource>> {
    if Path::new("assets").join(path).exists() {
        Some(asset_server.load(path.to_string()))
    } else {
        log_warning(&format!("🔇 Sound asset missing: assets/{}", path));
        None
    }
}

fn load_ball_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(BallSounds {
        swipe: load_optional(&asset_server, SWIPE_SOUND),
        rolling: load_optional(&asset_server, ROLLING_SOUND),
    });
}

fn play_swipe_sounds(
    mut commands: Commands,
    mut requests: EventReader<SwipeSoundRequested>,
    sounds: Res<BallSounds>,
) {
    let Some(swipe) = sounds.swipe.as_ref() else {
        requests.clear();
        return;
    };

    for request in requests.read() {
        commands.spawn((
            AudioPlayer::new(swipe.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(request.volume)),
        ));
    }
}

/// RollingSound.playing → есть/нет looping child
fn sync_rolling_loops(
    mut commands: Commands,
    balls: Query<(Entity, &RollingSound, Option<&RollingLoop>), (With<Ball>, Changed<RollingSound>)>,
    sounds: Res<BallSounds>,
) {
    for (ball, rolling, current) in balls.iter() {
        match (rolling.playing, current) {
            (true, None) => {
                let Some(handle) = sounds.rolling.as_ref() else {
                    continue;
                };
                let player = commands
                    .spawn((
                        AudioPlayer::new(handle.clone()),
                        PlaybackSettings::LOOP.with_volume(Volume::Linear(rolling.volume)),
                        ChildOf(ball),
                    ))
                    .id();
                commands.entity(ball).insert(RollingLoop(player));
            }
            (false, Some(RollingLoop(player))) => {
                commands.entity(*player).despawn();
                commands.entity(ball).remove::<RollingLoop>();
            }
            _ => {}
        }
    }
}
