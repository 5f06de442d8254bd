//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one clock advance per tick
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod catalog;
pub mod combat;
pub mod player;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catalog::{BuffKind, Color, HostileKind, PickupKind, WeaponKind};
pub use state::{
    ActiveBuff, BloodSplatter, GameEvent, GameState, Hostile, Pickup, Player, Projectile,
    RunStatus, WavePhase, WaveState,
};
pub use tick::{TickInput, tick};
