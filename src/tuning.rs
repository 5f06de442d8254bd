//! Data-driven game balance
//!
//! Every scalar knob of the simulation lives here with its stock value, so
//! balance passes are a JSON edit rather than a code change. The catalogs
//! in `sim::catalog` stay compile-time immutable; this covers pacing,
//! scaling, and timing.

use serde::{Deserialize, Serialize};

/// Balance knobs for one run. `Default` is the shipped balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Base movement speed in pixels per tick
    pub player_speed: f32,
    pub player_max_health: f32,
    /// Max-health gain per level
    pub level_health_bonus: f32,
    /// Damage multiplier growth per level (compounding)
    pub level_damage_growth: f32,
    /// XP threshold per level: `xp_per_level * level`
    pub xp_per_level: f32,

    // === Projectiles ===
    /// Projectiles farther than this from the player are culled
    pub projectile_max_range: f32,

    // === Hostile spawning ===
    pub hostile_spawn_base_ms: f32,
    /// Interval reduction per wave
    pub hostile_spawn_step_ms: f32,
    pub hostile_spawn_min_ms: f32,
    /// Live-hostile cap: `max(cap_base, wave * cap_per_wave)`
    pub hostile_cap_base: u32,
    pub hostile_cap_per_wave: u32,
    /// Ring-spawn distance bounds around the player
    pub hostile_ring_min: f32,
    pub hostile_ring_max: f32,
    /// Health scaling per wave: `1 + wave * scale`
    pub hostile_health_scale: f32,
    /// Contact-damage scaling per wave: `1 + wave * scale`
    pub hostile_damage_scale: f32,

    // === Contact damage ===
    /// Contact damage applied per tick is `contact_damage / divisor`
    pub contact_damage_divisor: f32,
    /// Chance per overlapping tick of emitting a hurt cue
    pub hurt_cue_chance: f32,

    // === Pickups ===
    pub pickup_spawn_interval_ms: f32,
    pub pickup_ring_min: f32,
    pub pickup_ring_max: f32,
    /// Uncollected pickups expire after this long
    pub pickup_ttl_ms: f32,
    /// Chance of a pickup drop per hostile death
    pub pickup_drop_chance: f32,

    // === Waves ===
    /// Kills required for wave 1; later waves use `base + wave * per_wave`
    pub wave_base_required: u32,
    pub wave_required_per_wave: u32,
    pub wave_break_ms: f32,
    /// Clear bonus is `wave * wave_clear_bonus` score
    pub wave_clear_bonus: u64,

    // === Transient effects ===
    pub blood_ttl_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            player_max_health: 100.0,
            level_health_bonus: 10.0,
            level_damage_growth: 1.1,
            xp_per_level: 100.0,

            projectile_max_range: 1000.0,

            hostile_spawn_base_ms: 1000.0,
            hostile_spawn_step_ms: 50.0,
            hostile_spawn_min_ms: 200.0,
            hostile_cap_base: 5,
            hostile_cap_per_wave: 2,
            hostile_ring_min: 400.0,
            hostile_ring_max: 600.0,
            hostile_health_scale: 0.1,
            hostile_damage_scale: 0.05,

            contact_damage_divisor: 10.0,
            hurt_cue_chance: 0.1,

            pickup_spawn_interval_ms: 20_000.0,
            pickup_ring_min: 100.0,
            pickup_ring_max: 300.0,
            pickup_ttl_ms: 30_000.0,
            pickup_drop_chance: 0.1,

            wave_base_required: 10,
            wave_required_per_wave: 3,
            wave_break_ms: 5000.0,
            wave_clear_bonus: 100,

            blood_ttl_ms: 10_000.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields keep their stock
    /// values; a malformed document is returned as an error so the caller
    /// can fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Hostile spawn interval for a wave
    pub fn hostile_spawn_interval_ms(&self, wave: u32) -> f32 {
        (self.hostile_spawn_base_ms - wave as f32 * self.hostile_spawn_step_ms)
            .max(self.hostile_spawn_min_ms)
    }

    /// Live-hostile cap for a wave
    pub fn hostile_cap(&self, wave: u32) -> usize {
        (self.hostile_cap_base.max(wave * self.hostile_cap_per_wave)) as usize
    }

    /// Kills required to clear a wave
    pub fn required_for_wave(&self, wave: u32) -> u32 {
        self.wave_base_required + wave * self.wave_required_per_wave
    }
}
