//! Battle Stars entry point
//!
//! Runs a headless scripted match: the player sweeps the arena firing
//! continuously while enemies fire on their fixed cadence.

use std::process::ExitCode;

use battle_stars::Settings;
use battle_stars::renderer::{VertexSurface, draw_scene};
use battle_stars::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Battle Stars (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::from_file(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut state = match GameState::new(&settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Cannot set up match: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut surface = VertexSurface::new();
    let mut shots_fired = 0u64;
    let mut hits = 0u64;
    let mut sweep = 1.0f32;

    while !state.phase.is_over() && state.time_ticks < settings.max_ticks {
        let b = state.arena.bounds();
        let x = state.player.center().x();
        let half = state.player.half_extents().x;
        if x - half <= b.min_x {
            sweep = 1.0;
        } else if x + half >= b.max_x {
            sweep = -1.0;
        }

        let input = TickInput {
            move_x: sweep,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::ShotFired { .. } => shots_fired += 1,
                GameEvent::Hit { .. } => hits += 1,
                _ => {}
            }
        }

        draw_scene(&state, &mut surface);
    }

    let outcome = match state.phase {
        GamePhase::Victory => "victory",
        GamePhase::GameOver => "defeat",
        _ => "time limit",
    };
    log::info!(
        "Match over ({outcome}) after {} ticks: score={}, player hp={:.0}, enemies left={}, shots={}, hits={}, frames={}",
        state.time_ticks,
        state.score,
        state.player.health(),
        state.enemies.len(),
        shots_fired,
        hits,
        surface.frames()
    );
    println!(
        "{outcome}: score {} in {} ticks",
        state.score, state.time_ticks
    );

    ExitCode::SUCCESS
}
