//! Progression controller
//!
//! The wave state machine (active -> break -> next wave), experience and
//! leveling, and the terminal game-over latch.

use super::spawn;
use super::state::{GameEvent, GameState, RunStatus, WavePhase};

/// Advance the wave state machine for this tick
pub(crate) fn update_wave(state: &mut GameState, now: f32) {
    match state.wave.phase {
        WavePhase::Active => {
            if state.wave.killed >= state.wave.required && state.hostiles.is_empty() {
                let bonus = state.wave.index as u64 * state.tuning.wave_clear_bonus;
                state.player.score += bonus;
                state.wave.phase = WavePhase::Break;
                state.wave.phase_started_ms = now;
                state.events.push(GameEvent::WaveCleared(state.wave.index));
                log::info!("wave {} cleared, +{bonus} score", state.wave.index);
            }
        }
        WavePhase::Break => {
            if now - state.wave.phase_started_ms > state.tuning.wave_break_ms {
                state.wave.index += 1;
                state.wave.required = state.tuning.required_for_wave(state.wave.index);
                state.wave.killed = 0;
                state.wave.phase = WavePhase::Active;
                state.wave.phase_started_ms = now;
                // Every wave opens with a free pickup nearby
                spawn::spawn_pickup_near_player(state, now);
                state.events.push(GameEvent::WaveStarted(state.wave.index));
                log::info!(
                    "wave {} started, {} kills required",
                    state.wave.index,
                    state.wave.required
                );
            }
        }
    }
}

/// Consume banked experience into levels. A big kill streak can grant
/// several levels in one tick; each one raises the threshold, adds max
/// health, fully heals, and compounds the damage multiplier.
pub(crate) fn apply_level_ups(state: &mut GameState) {
    let player = &mut state.player;
    while player.xp_to_level > 0.0 && player.experience >= player.xp_to_level {
        player.experience -= player.xp_to_level;
        player.level += 1;
        player.xp_to_level = state.tuning.xp_per_level * player.level as f32;
        player.max_health += state.tuning.level_health_bonus;
        player.health = player.max_health;
        player.damage_multiplier *= state.tuning.level_damage_growth;
        state.events.push(GameEvent::LevelUp(player.level));
        log::info!("level up -> {}", player.level);
    }
}

/// Latch the terminal state once player health reaches zero
pub(crate) fn check_game_over(state: &mut GameState) {
    if state.status == RunStatus::Running && state.player.health <= 0.0 {
        state.status = RunStatus::Over;
        state.events.push(GameEvent::GameOver);
        log::info!(
            "game over: wave {}, score {}, {} kills",
            state.wave.index,
            state.player.score,
            state.player.kills
        );
    }
}
