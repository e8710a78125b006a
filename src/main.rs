//! Headless autopilot run
//!
//! Steps the simulation at a fixed 60 Hz with a simple steering policy and
//! prints a JSON run summary. Useful for balance checks and soak-testing the
//! simulation without a renderer:
//!
//! ```text
//! bridge-rush [seed] [seconds]
//! ```

use bridge_rush::consts::{MOVE_BOUNDS, PLAYER_LANE_X};
use bridge_rush::{GameState, TickInput, tick};
use serde::Serialize;

const DT: f32 = 1.0 / 60.0;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    frames: u32,
    score: u32,
    kills: u32,
    squad: u32,
    lost: bool,
}

/// Steer toward the best reachable gate ahead; otherwise avoid the nearest
/// obstacle on a collision course, else recenter.
fn pick_target(state: &GameState) -> f32 {
    let best_gate = state
        .gates
        .iter_active()
        .filter(|g| !g.passed && g.pos.y < 0.0)
        .max_by_key(|g| g.value);
    if let Some(gate) = best_gate {
        if gate.value > 0 {
            return gate.pos.x;
        }
    }

    let squad_x = state.squad.position_x();
    let threat = state
        .obstacles
        .iter_active()
        .filter(|o| !o.hit && o.pos.y < 0.0 && o.pos.y > -10.0)
        .find(|o| (o.pos.x - squad_x).abs() < state.squad.width() + 0.7);
    if let Some(obstacle) = threat {
        let dodge = if obstacle.pos.x > squad_x { -1.2 } else { 1.2 };
        return obstacle.pos.x + dodge;
    }

    PLAYER_LANE_X
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(0xB41D6E);
    let seconds: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(120.0);
    let frames = (seconds / DT) as u32;

    log::info!("autopilot run: seed {seed}, {seconds}s ({frames} frames)");

    let mut state = GameState::new(seed);
    let mut ran = 0;
    for _ in 0..frames {
        let target_x = pick_target(&state).clamp(-MOVE_BOUNDS, MOVE_BOUNDS);
        tick(
            &mut state,
            &TickInput {
                target_x: Some(target_x),
            },
            DT,
        );
        ran += 1;
        if state.is_lost() {
            break;
        }
    }

    let summary = RunSummary {
        seed,
        frames: ran,
        score: state.score,
        kills: state.kill_count(),
        squad: state.squad.count(),
        lost: state.is_lost(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("summary serialization failed: {err}"),
    }
}
