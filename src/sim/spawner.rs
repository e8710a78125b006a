//! Endless content scheduler
//!
//! Every spawn family runs on its own distance-based timer: the spawner
//! compares corridor progress against the family's last spawn mark and emits
//! new content at the spawn line when the interval has elapsed. Difficulty
//! rises in discrete steps with progress and feeds gate values, obstacle
//! damage, crate durability, wave sizes, and boss pacing.

use rand::Rng;
use rand_pcg::Pcg32;

use super::enemies::Enemies;
use super::hazards::{Crates, Gates, Obstacles};
use crate::consts::*;
use crate::tuning::{ObstacleKind, WeaponKind};

/// Swarm wave scatter around the wave's spawn point
const SWARM_SPREAD_X: f32 = 2.0;
const SWARM_SPREAD_Z: f32 = 5.0;

/// Distance between gate spawns
const GATE_INTERVAL: f32 = 12.0;
/// Distance between crate spawns
const CRATE_INTERVAL: f32 = 50.0;
/// Distance between swarm waves
const SWARM_INTERVAL: f32 = 18.0;

#[derive(Debug, Clone)]
pub struct Spawner {
    last_gate: f32,
    last_obstacle: f32,
    last_crate: f32,
    last_swarm: f32,
    last_boss: f32,
    boss_count: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive integer range, matching the scheduler's value rolls
fn random_int(rng: &mut Pcg32, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            last_gate: 0.0,
            last_obstacle: 0.0,
            last_crate: 0.0,
            last_swarm: 0.0,
            last_boss: 0.0,
            boss_count: 0,
        }
    }

    /// Step function of progress: +0.4 per 80 units travelled
    pub fn difficulty(progress: f32) -> f32 {
        1.0 + (progress / 80.0).floor() * 0.4
    }

    /// Boss durability grows exponentially with each spawn: 400, 560, 783,
    /// 1097... Computed in f64 so the floor lands on the intended integer.
    fn boss_hp(boss_number: u32) -> i32 {
        let scaling = 1.4_f64.powi(boss_number as i32 - 1);
        (f64::from(BOSS_BASE_HP) * scaling).floor() as i32
    }

    /// Bosses arrive faster as more of them have spawned, with a pacing floor
    fn boss_interval(&self) -> f32 {
        (150.0 - self.boss_count as f32 * 10.0).max(80.0)
    }

    pub fn boss_count(&self) -> u32 {
        self.boss_count
    }

    /// Content visible immediately at the start of a run: one helpful gate on
    /// the boost lane and a small swarm further out.
    pub fn initial_wave(&mut self, gates: &mut Gates, enemies: &mut Enemies, rng: &mut Pcg32) {
        let depth = -40.0;
        gates.spawn(BOOST_LANE_X, depth, 5);
        enemies.spawn_swarm_wave(depth - 20.0, 15, SWARM_SPREAD_X, SWARM_SPREAD_Z, rng);
    }

    /// Run every spawn timer against the current progress
    pub fn update(
        &mut self,
        progress: f32,
        rng: &mut Pcg32,
        gates: &mut Gates,
        obstacles: &mut Obstacles,
        crates: &mut Crates,
        enemies: &mut Enemies,
    ) {
        let difficulty = Self::difficulty(progress);

        if progress - self.last_gate > GATE_INTERVAL {
            self.spawn_random_gates(difficulty, rng, gates);
            self.last_gate = progress;
        }

        let obstacle_interval = (18.0 - difficulty * 2.0).max(10.0);
        if progress - self.last_obstacle > obstacle_interval {
            self.spawn_random_obstacles(difficulty, rng, obstacles);
            self.last_obstacle = progress;
        }

        if progress - self.last_crate > CRATE_INTERVAL {
            self.spawn_random_crate(difficulty, rng, crates);
            self.last_crate = progress;
        }

        if progress - self.last_swarm > SWARM_INTERVAL {
            let count = (15.0 + difficulty * 20.0).floor() as usize;
            enemies.spawn_swarm_wave(
                SPAWN_DEPTH - 10.0,
                count,
                SWARM_SPREAD_X,
                SWARM_SPREAD_Z,
                rng,
            );
            self.last_swarm = progress;
        }

        if progress - self.last_boss > self.boss_interval() {
            self.boss_count += 1;
            let hp = Self::boss_hp(self.boss_count);
            enemies.spawn_boss(SPAWN_DEPTH - 5.0, hp);
            self.last_boss = progress;
            log::info!("boss #{} spawned, hp {hp}", self.boss_count);
        }
    }

    /// 60% a left/right choice pair mixing a bonus and a penalty (sides
    /// shuffled), otherwise a single boost-lane gate that is usually positive.
    fn spawn_random_gates(&self, difficulty: f32, rng: &mut Pcg32, gates: &mut Gates) {
        if rng.random::<f32>() < 0.6 {
            let pos = random_int(rng, 3, 10 + (difficulty * 2.0) as i32);
            let neg = -random_int(
                rng,
                3 + (difficulty * 2.0) as i32,
                8 + (difficulty * 3.0) as i32,
            );
            if rng.random_bool(0.5) {
                gates.spawn_choice(SPAWN_DEPTH, pos, neg);
            } else {
                gates.spawn_choice(SPAWN_DEPTH, neg, pos);
            }
        } else {
            let value = if rng.random::<f32>() > 0.3 {
                random_int(rng, 3, 8)
            } else {
                -random_int(
                    rng,
                    2 + difficulty as i32,
                    5 + (difficulty * 2.0) as i32,
                )
            };
            gates.spawn(BOOST_LANE_X, SPAWN_DEPTH, value);
        }
    }

    /// Obstacles land on the player path so they have to be dodged; damage
    /// scales with difficulty and barrels outnumber spikes 60/40.
    fn spawn_random_obstacles(&self, difficulty: f32, rng: &mut Pcg32, obstacles: &mut Obstacles) {
        let count = random_int(rng, 1, 2 + (difficulty * 0.5) as i32);
        for _ in 0..count {
            let x = PLAYER_LANE_X + rng.random_range(-1.5..1.5);
            let depth = SPAWN_DEPTH + rng.random_range(-5.0..5.0);

            if rng.random::<f32>() > 0.4 {
                let damage = random_int(rng, 2 + difficulty as i32, 4 + (difficulty * 2.0) as i32);
                obstacles.spawn(ObstacleKind::Barrel, x, depth, damage);
            } else {
                let damage = random_int(rng, 1 + difficulty as i32, 3 + (difficulty * 2.0) as i32);
                obstacles.spawn(ObstacleKind::Spike, x, depth, damage);
            }
        }
    }

    /// One crate on the boost lane carrying a random pickup weapon
    fn spawn_random_crate(&self, difficulty: f32, rng: &mut Pcg32, crates: &mut Crates) {
        let weapon = WeaponKind::PICKUPS[rng.random_range(0..WeaponKind::PICKUPS.len())];
        let hp = (30.0 + difficulty * 15.0).floor() as i32;
        crates.spawn(BOOST_LANE_X, SPAWN_DEPTH, weapon, hp);
    }
}
