//! Audio routing
//!
//! The simulation only names cues; an [`AudioBackend`] supplied by the host
//! plays them. [`AudioManager`] sits in between and applies volume and mute.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Jump key pressed
    Jump,
    /// Attack key pressed
    Attack,
    /// Enemy defeated by an attack
    Hit,
    /// Player touched an enemy
    Damage,
    /// Level completed
    Coin,
}

impl SoundEffect {
    /// Asset name of the sample
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Attack => "attack",
            SoundEffect::Hit => "hit",
            SoundEffect::Damage => "damage",
            SoundEffect::Coin => "coin",
        }
    }
}

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicTrack {
    StarlightCity,
}

impl MusicTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicTrack::StarlightCity => "starlight_city",
        }
    }
}

/// Host-side audio output
pub trait AudioBackend {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32);
    fn play_music(&mut self, track: MusicTrack, volume: f32);
    fn stop_music(&mut self);
}

/// Backend that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play_sound(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {} @ {:.2}", effect.as_str(), volume);
    }

    fn play_music(&mut self, track: MusicTrack, volume: f32) {
        log::info!("music {} @ {:.2}", track.as_str(), volume);
    }

    fn stop_music(&mut self) {
        log::info!("music stopped");
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        let mut manager = Self::new(backend);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_music_volume(settings.music_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Route one event from the game to the backend
    pub fn handle(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Sound(effect) => {
                let vol = self.effective(self.sfx_volume);
                if vol > 0.0 {
                    self.backend.play_sound(effect, vol);
                }
            }
            GameEvent::PlayMusic { track, volume } => {
                let vol = self.effective(self.music_volume) * volume;
                self.backend.play_music(track, vol);
            }
            GameEvent::StopMusic => self.backend.stop_music(),
            GameEvent::PhaseChanged { .. } => {}
        }
    }

    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
