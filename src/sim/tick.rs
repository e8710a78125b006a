//! The per-frame step function
//!
//! `tick` advances the whole simulation by one frame in a fixed order:
//! progress and spawning first, then steering, then actor movement, then
//! damage resolution, combat last, and finally the lose check. A lost state
//! is inert: ticking it changes nothing.

use super::state::{GamePhase, GameState};
use crate::consts::{MAX_DT, WORLD_SPEED};

/// Player input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Lane position the squad should steer toward; `None` holds course
    pub target_x: Option<f32>,
}

/// Advance the simulation by `dt` seconds.
///
/// `dt` is clamped to [`MAX_DT`] so a stalled caller resumes with one
/// ordinary-sized step instead of a catch-up jump that would tunnel actors
/// through their trigger bands.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let dt = dt.clamp(0.0, MAX_DT);

    state.progress += WORLD_SPEED * dt;
    state.time_ms += dt * 1000.0;
    state.score = state.progress as u32;

    state.spawner.update(
        state.progress,
        &mut state.rng,
        &mut state.gates,
        &mut state.obstacles,
        &mut state.crates,
        &mut state.enemies,
    );

    if let Some(target_x) = input.target_x {
        state.squad.steer(target_x);
    }

    state.projectiles.update(dt);
    state.enemies.update(dt);
    state.enemies.check_player_damage(&mut state.squad);
    state.gates.update(dt, &mut state.squad);
    state.crates.update(dt, &mut state.squad);
    state.obstacles.update(dt, &mut state.squad);

    super::combat::update(
        &mut state.combat,
        state.time_ms,
        &mut state.projectiles,
        &state.squad,
        &mut state.enemies,
        &mut state.crates,
        &mut state.rng,
    );

    if !state.squad.is_alive() {
        state.phase = GamePhase::Lost;
        log::info!(
            "run over: score {}, kills {}",
            state.score,
            state.enemies.kill_count()
        );
    }
}
