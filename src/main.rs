//! Horde Rush entry point
//!
//! Headless native host: owns the outer game-state machine
//! (menu -> run -> game over), drives the simulation at the fixed rate with
//! autopilot input, and forwards cue events to the audio collaborator. A
//! windowed front end would replace the input synthesis and read the state
//! for rendering between ticks; the core is unchanged either way.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use horde_rush::Tuning;
use horde_rush::audio::{AudioManager, cue_for};
use horde_rush::consts::TICK_DT_MS;
use horde_rush::sim::{GameEvent, GameState, TickInput, tick};

/// Outer application states; the simulation core only ever sees `Run`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Menu,
    Run,
    GameOver,
}

/// Demo run length cap: three minutes of simulated time
const MAX_DEMO_TICKS: u64 = 60 * 180;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = match std::env::var("HORDE_RUSH_TUNING") {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring malformed tuning overrides: {err}");
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };

    let audio = AudioManager::new();
    let mut app = AppState::Menu;
    // The core's reset entry point: a fresh GameState is a fully reset run
    let mut state = GameState::with_tuning(seed, tuning);

    log::info!("Horde Rush starting (seed {seed})");

    let started = Instant::now();
    loop {
        match app {
            AppState::Menu => {
                log::info!("menu: starting autopilot demo run");
                app = AppState::Run;
            }
            AppState::Run => {
                let input = TickInput {
                    autopilot: true,
                    ..Default::default()
                };
                tick(&mut state, &input, TICK_DT_MS);

                for event in &state.events {
                    if let Some(cue) = cue_for(event) {
                        audio.play(cue);
                    }
                    match event {
                        GameEvent::WaveCleared(wave) => log::info!("cleared wave {wave}"),
                        GameEvent::LevelUp(level) => log::info!("reached level {level}"),
                        _ => {}
                    }
                }

                if state.is_game_over() || state.tick_count >= MAX_DEMO_TICKS {
                    app = AppState::GameOver;
                }
            }
            AppState::GameOver => break,
        }
    }

    let outcome = if state.is_game_over() {
        "died"
    } else {
        "survived the demo window"
    };
    println!("Run over: {outcome}");
    println!(
        "  wave {}  score {}  kills {}  level {}",
        state.wave.index, state.player.score, state.player.kills, state.player.level
    );
    println!(
        "  {} ticks ({:.1} s simulated) in {:?} wall time",
        state.tick_count,
        state.tick_count as f32 * TICK_DT_MS / 1000.0,
        started.elapsed()
    );
}
