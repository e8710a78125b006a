//! Enemy subsystem: swarm pool + boss list
//!
//! Swarm enemies are cheap pooled actors with a fixed per-kind HP; bosses are
//! long-lived actors kept on a plain list (a handful per run at most) with
//! scaled HP and their own reach rule. Bosses resolve before swarm in every
//! projectile pass - they are the priority target.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::{Pool, Poolable};
use super::squad::Squad;
use crate::consts::*;

/// Projectile hit radii
const BOSS_HIT_RADIUS: f32 = 2.5;
const SWARM_HIT_RADIUS: f32 = 0.4;
/// Swarm reach band around the player line
const SWARM_REACH_BAND: (f32, f32) = (-0.5, 2.0);

#[derive(Debug, Clone, Default)]
pub struct SwarmEnemy {
    pub pos: Vec2,
    pub hp: i32,
    pub active: bool,
}

impl Poolable for SwarmEnemy {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone)]
pub struct Boss {
    pub pos: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub active: bool,
}

impl Boss {
    /// Reach rule: while past the player line the boss wounds the squad
    /// proportionally to its remaining HP and bleeds a flat amount itself.
    /// Returns the squad damage dealt this frame.
    fn check_player_reach(&mut self) -> i32 {
        if !self.active || self.pos.y <= 0.0 {
            return 0;
        }
        // ceil(hp / 50); hp is positive while the boss is active
        let damage = (self.hp + 49) / 50;
        self.hp -= BOSS_SELF_BLEED;
        if self.hp <= 0 {
            self.active = false;
        }
        damage
    }
}

#[derive(Debug, Clone)]
pub struct Enemies {
    swarm: Pool<SwarmEnemy>,
    bosses: Vec<Boss>,
    total_kills: u32,
}

impl Default for Enemies {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemies {
    pub fn new() -> Self {
        Self {
            swarm: Pool::new(MAX_SWARM),
            bosses: Vec::new(),
            total_kills: 0,
        }
    }

    /// Seed up to `count` swarm enemies around the enemy lane. When fewer
    /// inactive slots remain the wave spawns partially, never erroring.
    pub fn spawn_swarm_wave(
        &mut self,
        start_depth: f32,
        count: usize,
        spread_x: f32,
        spread_z: f32,
        rng: &mut Pcg32,
    ) -> usize {
        let mut spawned = 0;
        for _ in 0..count {
            let x = ENEMY_LANE_X + rng.random_range(-spread_x..spread_x);
            let depth = start_depth + rng.random_range(-spread_z..0.0);
            let ok = self
                .swarm
                .spawn(|e| {
                    e.pos = Vec2::new(x, depth);
                    e.hp = SWARM_HP;
                    e.active = true;
                })
                .is_some();
            if !ok {
                break;
            }
            spawned += 1;
        }
        spawned
    }

    pub fn spawn_boss(&mut self, depth: f32, hp: i32) {
        self.bosses.push(Boss {
            pos: Vec2::new(ENEMY_LANE_X, depth),
            hp,
            max_hp: hp,
            active: true,
        });
    }

    /// Scroll everyone with the world; swarm that slips past the reach band
    /// unresolved despawns at depth 5
    pub fn update(&mut self, dt: f32) {
        for enemy in self.swarm.iter_active_mut() {
            enemy.pos.y += WORLD_SPEED * dt;
            if enemy.pos.y > 5.0 {
                enemy.deactivate();
            }
        }
        for boss in self.bosses.iter_mut().filter(|b| b.active) {
            boss.pos.y += WORLD_SPEED * dt;
        }
    }

    /// Resolve one projectile impact. Bosses are checked first and
    /// short-circuit; otherwise swarm is tested at the area radius for AOE
    /// projectiles (damaging every member in range) or a fixed small radius
    /// for single-target ones (stopping at the first member found).
    pub fn check_projectile_hit(
        &mut self,
        pos: Vec2,
        damage: i32,
        area_radius: Option<f32>,
    ) -> bool {
        for boss in self.bosses.iter_mut().filter(|b| b.active) {
            if pos.distance(boss.pos) < BOSS_HIT_RADIUS {
                boss.hp -= damage;
                if boss.hp <= 0 {
                    boss.active = false;
                    self.total_kills += BOSS_KILL_CREDIT;
                    log::info!("boss down");
                }
                return true;
            }
        }

        let hit_radius = area_radius.unwrap_or(SWARM_HIT_RADIUS);
        let mut hit_any = false;
        for enemy in self.swarm.iter_active_mut() {
            if pos.distance(enemy.pos) < hit_radius {
                enemy.hp -= damage;
                if enemy.hp <= 0 {
                    enemy.deactivate();
                    self.total_kills += 1;
                }
                hit_any = true;
                if area_radius.is_none() {
                    break;
                }
            }
        }
        hit_any
    }

    /// Resolve enemies reaching the player line. Each source applies its
    /// delta at the moment of detection; reach-hits are squad damage, not
    /// kill credit. Returns the total damage for callers that surface it.
    pub fn check_player_damage(&mut self, squad: &mut Squad) -> i32 {
        let mut total = 0;

        for enemy in self.swarm.iter_active_mut() {
            if enemy.pos.y > SWARM_REACH_BAND.0 && enemy.pos.y < SWARM_REACH_BAND.1 {
                enemy.deactivate();
                squad.modify_count(-1);
                total += 1;
            }
        }

        for boss in &mut self.bosses {
            let damage = boss.check_player_reach();
            if damage > 0 {
                squad.modify_count(-damage);
                total += damage;
            }
        }

        total
    }

    pub fn has_active(&self) -> bool {
        self.bosses.iter().any(|b| b.active) || self.swarm.active_count() > 0
    }

    pub fn active_boss_count(&self) -> usize {
        self.bosses.iter().filter(|b| b.active).count()
    }

    pub fn active_swarm_count(&self) -> usize {
        self.swarm.active_count()
    }

    pub fn kill_count(&self) -> u32 {
        self.total_kills
    }

    pub fn iter_swarm(&self) -> impl Iterator<Item = &SwarmEnemy> {
        self.swarm.iter_active()
    }

    pub fn iter_bosses(&self) -> impl Iterator<Item = &Boss> {
        self.bosses.iter().filter(|b| b.active)
    }
}
