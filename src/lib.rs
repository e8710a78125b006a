//! Bridge Rush - endless lane-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, spawning, combat, game state)
//! - `tuning`: Data-driven combat balance
//!
//! Rendering, HUD, input sampling, and audio are external collaborators: they
//! read positions/counts/HP off the state and feed a lane target back in, but
//! contain no decision logic the core depends on.
//!
//! Coordinates are `glam::Vec2` on the road plane: `x` is the lane axis
//! (negative = enemy lane, positive = boost lane), `y` is corridor depth
//! (negative = ahead of the squad, which sits at depth 0; the world scrolls
//! toward positive depth).

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, TickInput, tick};
pub use tuning::{ObstacleKind, WeaponKind};

/// Game configuration constants
pub mod consts {
    /// World scroll speed (units/second), also the rate progress accrues
    pub const WORLD_SPEED: f32 = 8.0;
    /// Per-tick clamp on deltaTime so a stalled frame cannot tunnel actors
    /// through their trigger bands
    pub const MAX_DT: f32 = 1.0 / 15.0;

    /// Lane centers
    pub const PLAYER_LANE_X: f32 = 0.0;
    pub const ENEMY_LANE_X: f32 = -3.0;
    pub const BOOST_LANE_X: f32 = 3.0;
    /// How far the squad can steer off the player lane
    pub const MOVE_BOUNDS: f32 = 1.5;

    /// Squad defaults
    pub const SQUAD_START_COUNT: u32 = 1;
    pub const SQUAD_MAX: u32 = 200;
    pub const SOLDIER_SPACING: f32 = 0.4;

    /// Pool capacities
    pub const MAX_PROJECTILES: usize = 300;
    pub const MAX_SWARM: usize = 150;
    pub const MAX_GATES: usize = 20;
    pub const MAX_CRATES: usize = 10;
    pub const MAX_BARRELS: usize = 20;
    pub const MAX_SPIKES: usize = 15;

    /// Enemy defaults
    pub const SWARM_HP: i32 = 5;
    pub const BOSS_BASE_HP: i32 = 400;
    pub const BOSS_KILL_CREDIT: u32 = 20;
    /// Flat damage a boss suffers every frame it is engaged at the player line
    pub const BOSS_SELF_BLEED: i32 = 100;

    /// Projectile kill box: outside this the slot is released
    pub const PROJECTILE_MIN_DEPTH: f32 = -80.0;
    pub const PROJECTILE_MAX_DEPTH: f32 = 20.0;
    pub const PROJECTILE_MAX_X: f32 = 20.0;

    /// Depth at which the scheduler injects new actors
    pub const SPAWN_DEPTH: f32 = -45.0;
}
