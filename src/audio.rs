//! Audio cue dispatch
//!
//! The simulation raises [`GameEvent`]s; the host maps them to sound cues
//! and hands them to the [`AudioManager`]. Cues are fire-and-forget: the
//! core never waits on playback, and a missing backend downgrades every cue
//! to a no-op.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Weapon discharged
    Shot,
    /// Projectile hit a hostile
    Hit,
    /// Hostile died
    Kill,
    /// Player took contact damage
    Hurt,
    /// Pickup collected
    Pickup,
    /// Level gained
    LevelUp,
    /// Wave cleared
    WaveClear,
    /// Run ended
    GameOver,
}

/// Map a simulation event to its sound cue, if it has one
pub fn cue_for(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::ShotFired(_) => Some(SoundCue::Shot),
        GameEvent::HitLanded => Some(SoundCue::Hit),
        GameEvent::HostileKilled(_) => Some(SoundCue::Kill),
        GameEvent::PlayerHurt => Some(SoundCue::Hurt),
        GameEvent::PickupCollected(_) => Some(SoundCue::Pickup),
        GameEvent::LevelUp(_) => Some(SoundCue::LevelUp),
        GameEvent::WaveCleared(_) => Some(SoundCue::WaveClear),
        GameEvent::GameOver => Some(SoundCue::GameOver),
        GameEvent::PickupDropped(_) | GameEvent::WaveStarted(_) => None,
    }
}

/// Audio manager for the game
pub struct AudioManager {
    /// Whether a playback backend is available
    enabled: bool,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    /// The headless host carries no mixer; cues surface on the log instead
    /// so demo runs still show the cue stream. A windowed host would hook
    /// its device in here.
    pub fn new() -> Self {
        Self {
            enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager for a host whose audio backend failed to initialize; every
    /// cue becomes a no-op.
    pub fn disabled() -> Self {
        log::warn!("audio backend unavailable - cues disabled");
        Self {
            enabled: false,
            ..Self::new()
        }
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

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound cue. A no-op when muted or without a backend.
    pub fn play(&self, cue: SoundCue) {
        if !self.enabled || self.effective_volume() <= 0.0 {
            return;
        }
        log::debug!("cue: {cue:?}");
    }
}
