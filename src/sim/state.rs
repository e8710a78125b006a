//! Complete simulation state
//!
//! Everything the run needs lives here: the squad, every actor pool, the
//! combat controller, the spawn scheduler, and the single seeded RNG that all
//! randomness flows through. Two states constructed from the same seed and
//! stepped with the same inputs stay identical forever.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::combat::CombatState;
use super::enemies::Enemies;
use super::hazards::{Crates, Gates, Obstacles};
use super::projectile::Projectiles;
use super::spawner::Spawner;
use super::squad::Squad;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Lost,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub squad: Squad,
    pub projectiles: Projectiles,
    pub enemies: Enemies,
    pub gates: Gates,
    pub crates: Crates,
    pub obstacles: Obstacles,
    pub combat: CombatState,
    pub spawner: Spawner,
    pub rng: Pcg32,
    pub seed: u64,
    /// Distance travelled down the corridor, in world units
    pub progress: f32,
    /// Simulation clock in milliseconds, driven by accumulated dt
    pub time_ms: f32,
    pub score: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut gates = Gates::new();
        let mut enemies = Enemies::new();
        let mut spawner = Spawner::new();
        spawner.initial_wave(&mut gates, &mut enemies, &mut rng);

        Self {
            phase: GamePhase::Playing,
            squad: Squad::new(),
            projectiles: Projectiles::new(),
            enemies,
            gates,
            crates: Crates::new(),
            obstacles: Obstacles::new(),
            combat: CombatState::new(),
            spawner,
            rng,
            seed,
            progress: 0.0,
            time_ms: 0.0,
            score: 0,
        }
    }

    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    pub fn kill_count(&self) -> u32 {
        self.enemies.kill_count()
    }

    pub fn is_firing(&self) -> bool {
        self.combat.is_firing()
    }
}
