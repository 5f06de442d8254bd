//! Player controller
//!
//! Integrates one frame of input intent into player position, aim, weapon
//! selection, and firing. Movement uses screen-style coordinates (+y down)
//! and applies each axis independently: holding two axes moves diagonally
//! faster than one. That quirk is part of the game's feel; do not normalize.

use rand::Rng;

use crate::{angle_to, unit_from_angle};

use super::state::{GameEvent, GameState, Projectile};
use super::tick::TickInput;

/// Apply movement, aim, weapon switching, and fire requests for this tick
pub(crate) fn update(state: &mut GameState, input: &TickInput, now: f32) {
    let GameState {
        player,
        projectiles,
        events,
        rng,
        ..
    } = state;

    // Movement: each axis independent, no diagonal normalization
    if input.move_up {
        player.pos.y -= player.speed;
    }
    if input.move_down {
        player.pos.y += player.speed;
    }
    if input.move_left {
        player.pos.x -= player.speed;
    }
    if input.move_right {
        player.pos.x += player.speed;
    }

    // Aim at the target point
    player.aim_angle = angle_to(player.pos, input.aim_target);

    // Weapon switching is immediate and unconditional
    if let Some(kind) = input.select_weapon {
        player.weapon = kind;
    }

    if !input.fire {
        return;
    }

    let spec = player.weapon.spec();
    if now - player.last_shot_ms < spec.cooldown_ms {
        return;
    }
    // One round per trigger pull, even for multi-pellet weapons
    if !player.ammo.take_round(player.weapon) {
        return;
    }
    player.last_shot_ms = now;
    events.push(GameEvent::ShotFired(player.weapon));

    let damage = spec.damage * player.damage_multiplier * player.damage_bonus;
    for _ in 0..spec.pellet_count {
        let jitter = if spec.spread > 0.0 {
            rng.random_range(-spec.spread..spec.spread)
        } else {
            0.0
        };
        let angle = player.aim_angle + jitter;
        projectiles.push(Projectile {
            pos: player.pos,
            vel: unit_from_angle(angle) * spec.projectile_speed,
            damage,
            radius: spec.projectile_radius,
            color: spec.color,
        });
    }
}
