//! Combat resolver
//!
//! Runs once per tick after movement: projectile hits, the death sweep,
//! then hostile-player contact damage. Collision is a strict radius-sum
//! test; touching circles do not collide.

use glam::Vec2;
use rand::Rng;

use crate::consts::PLAYER_RADIUS;

use super::spawn;
use super::state::{BloodSplatter, GameEvent, GameState};

pub(crate) fn resolve(state: &mut GameState, now: f32) {
    projectile_pass(state, now);
    death_sweep(state, now);
    contact_pass(state, now);
}

/// Test every live projectile against every hostile. A hit consumes the
/// projectile, applies its damage, and leaves a blood splatter; a hostile
/// can take several hits in the same tick.
fn projectile_pass(state: &mut GameState, now: f32) {
    let GameState {
        hostiles,
        projectiles,
        blood,
        events,
        rng,
        ..
    } = state;

    for hostile in hostiles.iter_mut() {
        projectiles.retain(|p| {
            let hit = p.pos.distance(hostile.pos) < hostile.radius + p.radius;
            if hit {
                hostile.health -= p.damage;
                blood.push(BloodSplatter {
                    pos: p.pos,
                    size: rng.random_range(5.0..15.0),
                    spawned_at_ms: now,
                });
                events.push(GameEvent::HitLanded);
            }
            !hit
        });
    }
}

/// Remove dead hostiles, awarding score/XP, spilling blood, and rolling the
/// pickup drop at the death position.
fn death_sweep(state: &mut GameState, now: f32) {
    let GameState {
        hostiles,
        pickups,
        blood,
        events,
        rng,
        player,
        wave,
        tuning,
        ..
    } = state;

    hostiles.retain(|hostile| {
        if hostile.health > 0.0 {
            return true;
        }

        player.score += hostile.xp_value as u64 * wave.index as u64;
        player.experience += hostile.xp_value as f32;
        player.kills += 1;
        wave.killed += 1;

        for _ in 0..5 {
            let offset = Vec2::new(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0));
            blood.push(BloodSplatter {
                pos: hostile.pos + offset,
                size: rng.random_range(10.0..25.0),
                spawned_at_ms: now,
            });
        }

        spawn::roll_death_drop(rng, pickups, events, tuning, hostile.pos, now);
        events.push(GameEvent::HostileKilled(hostile.kind));
        false
    });
}

/// Apply contact damage from every overlapping hostile. Damage lands every
/// tick of overlap; there is no knockback or invulnerability window.
fn contact_pass(state: &mut GameState, _now: f32) {
    let GameState {
        hostiles,
        player,
        events,
        rng,
        tuning,
        ..
    } = state;

    for hostile in hostiles.iter() {
        if hostile.pos.distance(player.pos) < PLAYER_RADIUS + hostile.radius {
            player.health -= hostile.contact_damage / tuning.contact_damage_divisor;
            // Throttle the hurt cue; landing it every tick would be noise
            if rng.random::<f32>() < tuning.hurt_cue_chance {
                events.push(GameEvent::PlayerHurt);
            }
        }
    }
}
