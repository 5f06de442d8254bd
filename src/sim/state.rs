//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; components take
//! it by `&mut` rather than reading ambient globals, and the host reads it
//! between ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::catalog::{BuffKind, Color, HostileKind, PickupKind, WeaponKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Whether the run is still live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    /// Player health reached zero; the outer state machine takes over
    Over,
}

/// Fire-and-forget cue raised during a tick
///
/// The queue is cleared at the start of every tick; the host drains it
/// afterwards and forwards cues to the audio/UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired(WeaponKind),
    HitLanded,
    HostileKilled(HostileKind),
    PlayerHurt,
    PickupCollected(PickupKind),
    PickupDropped(PickupKind),
    LevelUp(u32),
    WaveCleared(u32),
    WaveStarted(u32),
    GameOver,
}

/// Per-weapon ammo counters
#[derive(Debug, Clone)]
pub struct AmmoPouch {
    rounds: [u32; WeaponKind::COUNT],
}

impl AmmoPouch {
    /// Fresh pouch with the catalog's starting ammo
    pub fn new() -> Self {
        let mut rounds = [0; WeaponKind::COUNT];
        for kind in WeaponKind::ALL {
            rounds[kind.index()] = kind.spec().starting_ammo;
        }
        Self { rounds }
    }

    #[inline]
    pub fn rounds(&self, kind: WeaponKind) -> u32 {
        self.rounds[kind.index()]
    }

    /// Take one round; returns false (and leaves the pouch untouched) when
    /// empty.
    pub fn take_round(&mut self, kind: WeaponKind) -> bool {
        let slot = &mut self.rounds[kind.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn add(&mut self, kind: WeaponKind, amount: u32) {
        self.rounds[kind.index()] = self.rounds[kind.index()].saturating_add(amount);
    }
}

impl Default for AmmoPouch {
    fn default() -> Self {
        Self::new()
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Effective speed in pixels per tick; re-derived from buffs every tick
    pub speed: f32,
    /// Damage factor from an active damage buff; re-derived every tick
    pub damage_bonus: f32,
    pub health: f32,
    pub max_health: f32,
    pub score: u64,
    pub kills: u32,
    pub level: u32,
    pub experience: f32,
    pub xp_to_level: f32,
    /// Level-based damage multiplier, starts at 1.0 and compounds per level
    pub damage_multiplier: f32,
    /// Radians toward the aim target
    pub aim_angle: f32,
    pub weapon: WeaponKind,
    pub ammo: AmmoPouch,
    pub last_shot_ms: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: PLAYER_START,
            speed: tuning.player_speed,
            damage_bonus: 1.0,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            score: 0,
            kills: 0,
            level: 1,
            experience: 0.0,
            xp_to_level: tuning.xp_per_level,
            damage_multiplier: 1.0,
            aim_angle: 0.0,
            weapon: WeaponKind::Pistol,
            ammo: AmmoPouch::new(),
            // A fresh run may fire immediately
            last_shot_ms: f32::NEG_INFINITY,
        }
    }

    /// Health ratio in [0, 1] for display; guards a zero denominator
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            (self.health / self.max_health).clamp(0.0, 1.0)
        }
    }

    /// XP-to-next-level ratio in [0, 1] for display
    pub fn xp_fraction(&self) -> f32 {
        if self.xp_to_level <= 0.0 {
            0.0
        } else {
            (self.experience / self.xp_to_level).clamp(0.0, 1.0)
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Damage fixed at creation time
    pub damage: f32,
    pub radius: f32,
    pub color: Color,
}

/// A hostile seeking the player
///
/// Health and contact damage carry their wave scaling from spawn time and
/// are never re-scaled.
#[derive(Debug, Clone)]
pub struct Hostile {
    pub pos: Vec2,
    pub kind: HostileKind,
    pub speed: f32,
    pub health: f32,
    /// Spawn-time scaled health, for display ratios
    pub max_health: f32,
    pub radius: f32,
    pub contact_damage: f32,
    pub xp_value: u32,
}

impl Hostile {
    /// Health ratio in [0, 1] for display
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            (self.health / self.max_health).clamp(0.0, 1.0)
        }
    }
}

/// A collectible power-up waiting on the ground
#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    pub spawned_at_ms: f32,
}

/// A timed stat modifier currently affecting the player
#[derive(Debug, Clone)]
pub struct ActiveBuff {
    pub kind: BuffKind,
    pub magnitude: f32,
    pub expires_at_ms: f32,
}

/// Ground blood decal; purely visual, pruned on a timer
#[derive(Debug, Clone)]
pub struct BloodSplatter {
    pub pos: Vec2,
    pub size: f32,
    pub spawned_at_ms: f32,
}

/// Wave phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavePhase {
    /// Hostiles spawn and fight
    Active,
    /// Between-wave rest; no hostile spawns
    Break,
}

/// Wave bookkeeping
#[derive(Debug, Clone)]
pub struct WaveState {
    /// 1-based wave index
    pub index: u32,
    pub required: u32,
    pub killed: u32,
    pub phase: WavePhase,
    pub phase_started_ms: f32,
}

impl WaveState {
    fn new(tuning: &Tuning) -> Self {
        Self {
            index: 1,
            required: tuning.wave_base_required,
            killed: 0,
            phase: WavePhase::Active,
            phase_started_ms: 0.0,
        }
    }

    /// Kill progress in [0, 1] for display
    pub fn progress_fraction(&self) -> f32 {
        if self.required == 0 {
            0.0
        } else {
            (self.killed as f32 / self.required as f32).clamp(0.0, 1.0)
        }
    }
}

/// Spawn-director timers
#[derive(Debug, Clone, Default)]
pub struct SpawnTimers {
    pub last_hostile_ms: f32,
    pub last_pickup_ms: f32,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation clock in milliseconds; advanced once per tick
    pub clock_ms: f32,
    pub tick_count: u64,
    pub status: RunStatus,
    pub tuning: Tuning,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub hostiles: Vec<Hostile>,
    pub pickups: Vec<Pickup>,
    pub buffs: Vec<ActiveBuff>,
    pub blood: Vec<BloodSplatter>,
    pub wave: WaveState,
    pub spawn: SpawnTimers,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh run with the shipped balance. Resets every piece of state.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Fresh run with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Player::new(&tuning);
        let wave = WaveState::new(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock_ms: 0.0,
            tick_count: 0,
            status: RunStatus::Running,
            tuning,
            player,
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            pickups: Vec::new(),
            buffs: Vec::new(),
            blood: Vec::new(),
            wave,
            spawn: SpawnTimers::default(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status == RunStatus::Over
    }
}
