//! Audio dispatch
//!
//! The sim only raises events. This module turns them into sound effect
//! keys and hands them to a sink without waiting for playback.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Menu screen entered
    Swoosh,
    /// Player flapped
    Wing,
    /// Actor struck something
    Hit,
    /// Run ended
    Die,
    /// Obstacle pair passed
    Point,
}

impl SoundEffect {
    /// Asset name the provider is asked for
    pub fn asset_key(&self) -> &'static str {
        match self {
            SoundEffect::Swoosh => "swooshing",
            SoundEffect::Wing => "wing",
            SoundEffect::Hit => "hit",
            SoundEffect::Die => "die",
            SoundEffect::Point => "point",
        }
    }

    /// Sound for a sim event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::MenuEntered => Some(SoundEffect::Swoosh),
            GameEvent::Flap => Some(SoundEffect::Wing),
            GameEvent::Hit => Some(SoundEffect::Hit),
            GameEvent::Died { .. } => Some(SoundEffect::Die),
            GameEvent::Scored { .. } => Some(SoundEffect::Point),
            GameEvent::RunStarted { .. } => None,
        }
    }
}

/// Fire-and-forget playback backend
pub trait AudioSink {
    fn play(&mut self, key: &'static str, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with volumes taken from settings
    pub fn from_settings(sink: Box<dyn AudioSink>, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect.asset_key(), vol);
    }

    /// Play whatever sound a sim event calls for
    pub fn handle_event(&mut self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(&'static str, f32)>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, key: &'static str, volume: f32) {
            self.0.borrow_mut().push((key, volume));
        }
    }

    #[test]
    fn test_death_plays_hit_then_die() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));

        for event in [GameEvent::Hit, GameEvent::Died { score: 3 }] {
            audio.handle_event(&event);
        }

        let played: Vec<_> = recorder.0.borrow().iter().map(|(k, _)| *k).collect();
        assert_eq!(played, vec!["hit", "die"]);
    }

    #[test]
    fn test_run_started_is_silent() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.handle_event(&GameEvent::RunStarted { run: 1 });
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_volume_and_mute() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        audio.play(SoundEffect::Point);
        assert_eq!(recorder.0.borrow()[0], ("point", 0.5));

        audio.set_muted(true);
        audio.play(SoundEffect::Wing);
        assert_eq!(recorder.0.borrow().len(), 1);
    }
}
