//! Deterministic game simulation
//!
//! Pure state + step function: construct a [`GameState`] from a seed, call
//! [`tick`] once per frame with the player's lane target, read whatever the
//! presentation layer needs off the state. No I/O, no wall clock, no global
//! RNG.

pub mod combat;
pub mod enemies;
pub mod hazards;
pub mod pool;
pub mod projectile;
pub mod spawner;
pub mod squad;
pub mod state;
pub mod tick;

pub use combat::CombatState;
pub use enemies::{Boss, Enemies, SwarmEnemy};
pub use hazards::{Crate, Crates, Gate, Gates, Obstacle, Obstacles};
pub use pool::{Pool, Poolable};
pub use projectile::{Projectile, Projectiles};
pub use spawner::Spawner;
pub use squad::Squad;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
