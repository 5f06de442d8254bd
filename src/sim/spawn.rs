//! Spawn director
//!
//! Decides when, where, and what to spawn. Hostiles ring-spawn around the
//! player on a wave-paced interval; pickups arrive on an independent
//! periodic timer, at wave starts, and as death drops.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;
use crate::unit_from_angle;

use super::catalog::{PickupKind, roll_hostile_kind};
use super::state::{GameEvent, GameState, Hostile, Pickup, WavePhase};

/// Run the spawn policies for this tick
pub(crate) fn update(state: &mut GameState, now: f32) {
    maybe_spawn_hostile(state, now);
    maybe_spawn_pickup(state, now);
}

/// Random point on a ring around `center`, distance in `[min, max)`
fn ring_point<R: Rng>(rng: &mut R, center: Vec2, min: f32, max: f32) -> Vec2 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let distance = rng.random_range(min..max);
    center + unit_from_angle(angle) * distance
}

fn maybe_spawn_hostile(state: &mut GameState, now: f32) {
    if state.wave.phase != WavePhase::Active {
        return;
    }
    let wave = state.wave.index;
    if state.hostiles.len() >= state.tuning.hostile_cap(wave) {
        return;
    }
    // Enough kills are already in flight; the wave no longer needs bodies
    if state.wave.killed >= state.wave.required {
        return;
    }
    if now - state.spawn.last_hostile_ms < state.tuning.hostile_spawn_interval_ms(wave) {
        return;
    }
    state.spawn.last_hostile_ms = now;
    spawn_hostile(state);
}

/// Spawn one wave-scaled hostile on the ring around the player
pub(crate) fn spawn_hostile(state: &mut GameState) {
    let wave = state.wave.index;
    let kind = roll_hostile_kind(&mut state.rng, wave);
    let pos = ring_point(
        &mut state.rng,
        state.player.pos,
        state.tuning.hostile_ring_min,
        state.tuning.hostile_ring_max,
    );

    let spec = kind.spec();
    let health = spec.health * (1.0 + wave as f32 * state.tuning.hostile_health_scale);
    let contact_damage =
        spec.contact_damage * (1.0 + wave as f32 * state.tuning.hostile_damage_scale);

    log::debug!("wave {wave}: spawning {kind:?} at {pos} ({health} hp)");
    state.hostiles.push(Hostile {
        pos,
        kind,
        speed: spec.speed,
        health,
        max_health: health,
        radius: kind.radius(),
        contact_damage,
        xp_value: spec.xp_value,
    });
}

fn maybe_spawn_pickup(state: &mut GameState, now: f32) {
    if now - state.spawn.last_pickup_ms < state.tuning.pickup_spawn_interval_ms {
        return;
    }
    state.spawn.last_pickup_ms = now;
    spawn_pickup_near_player(state, now);
}

/// Spawn one random-kind pickup on the close ring around the player.
/// Used by the periodic timer and by wave-start events.
pub(crate) fn spawn_pickup_near_player(state: &mut GameState, now: f32) {
    let kind = PickupKind::roll(&mut state.rng);
    let pos = ring_point(
        &mut state.rng,
        state.player.pos,
        state.tuning.pickup_ring_min,
        state.tuning.pickup_ring_max,
    );
    state.pickups.push(Pickup {
        pos,
        kind,
        spawned_at_ms: now,
    });
}

/// Roll the death-drop chance at a hostile's final position.
///
/// Takes the stores directly so the combat sweep can call it while holding
/// disjoint borrows of `GameState`.
pub(crate) fn roll_death_drop(
    rng: &mut Pcg32,
    pickups: &mut Vec<Pickup>,
    events: &mut Vec<GameEvent>,
    tuning: &Tuning,
    pos: Vec2,
    now: f32,
) {
    if rng.random::<f32>() >= tuning.pickup_drop_chance {
        return;
    }
    let kind = PickupKind::roll(rng);
    pickups.push(Pickup {
        pos,
        kind,
        spawned_at_ms: now,
    });
    events.push(GameEvent::PickupDropped(kind));
}
