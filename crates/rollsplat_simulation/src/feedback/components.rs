//! Feedback компоненты

use bevy::prelude::*;

/// Эмиттер пыли из-под шара
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct DirtParticles {
    pub emitting: bool,
}

/// Looping звук качения
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct RollingSound {
    pub playing: bool,
    /// Громкость [0, 1], фиксируется при старте
    pub volume: f32,
}

impl RollingSound {
    /// Запустить если ещё не играет. true = был переход.
    pub fn start(&mut self, volume: f32) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        self.volume = volume;
        true
    }

    /// Остановить если играет. true = был переход.
    pub fn stop(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.playing = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_sound_starts_once() {
        let mut sound = RollingSound::default();
        assert!(sound.start(0.5));
        assert!(sound.playing);
        assert_eq!(sound.volume, 0.5);

        // Повторный старт не перезапускает и не меняет громкость
        assert!(!sound.start(0.9));
        assert_eq!(sound.volume, 0.5);
    }

    #[test]
    fn test_rolling_sound_stop_only_when_playing() {
        let mut sound = RollingSound::default();
        assert!(!sound.stop());

        sound.start(0.5);
        assert!(sound.stop());
        assert!(!sound.playing);
    }
}
