//! Projectile subsystem
//!
//! A pooled set of straight-line projectiles. Firing computes a per-weapon
//! pellet fan around the caller-supplied forward vector - there is no target
//! leading or auto-aim - and each spawned projectile picks up an independent
//! random lane jitter bounded by the weapon's spread, so fan-out and jitter
//! compose.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::{Pool, Poolable};
use crate::consts::*;
use crate::tuning::WeaponKind;

/// Forward along the corridor, toward the enemy spawn line
pub const FORWARD: Vec2 = Vec2::NEG_Y;

#[derive(Debug, Clone, Default)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    /// `Some(r)` for area-effect projectiles
    pub area_radius: Option<f32>,
    pub weapon: WeaponKind,
    pub active: bool,
}

impl Poolable for Projectile {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone)]
pub struct Projectiles {
    pool: Pool<Projectile>,
}

impl Default for Projectiles {
    fn default() -> Self {
        Self::new()
    }
}

impl Projectiles {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(MAX_PROJECTILES),
        }
    }

    /// Fire one volley of `bullets_per_shot` pellets from `origin`.
    ///
    /// Single-shot weapons keep `base_dir` unmodified; multi-pellet weapons
    /// rotate pellet `i` by `(i - (n-1)/2) * spread`. Pool exhaustion drops
    /// the remaining pellets silently.
    pub fn fire(&mut self, origin: Vec2, base_dir: Vec2, weapon: WeaponKind, rng: &mut Pcg32) {
        let spec = weapon.spec();
        let n = spec.bullets_per_shot;
        for i in 0..n {
            let dir = if n > 1 {
                let angle = (i as f32 - (n as f32 - 1.0) / 2.0) * spec.spread;
                Vec2::from_angle(angle).rotate(base_dir).normalize_or_zero()
            } else {
                base_dir
            };
            self.spawn(origin, dir, weapon, rng);
        }
    }

    /// Spawn a single projectile, applying the random lane jitter at
    /// initialization. Returns false on pool exhaustion.
    pub fn spawn(
        &mut self,
        origin: Vec2,
        direction: Vec2,
        weapon: WeaponKind,
        rng: &mut Pcg32,
    ) -> bool {
        let spec = weapon.spec();
        let mut dir = direction;
        dir.x += (rng.random::<f32>() - 0.5) * spec.spread;
        let dir = dir.normalize_or_zero();

        self.pool
            .spawn(|p| {
                p.pos = origin;
                p.vel = dir * spec.bullet_speed;
                p.damage = spec.damage;
                p.area_radius = spec.area_radius;
                p.weapon = weapon;
                p.active = true;
            })
            .is_some()
    }

    /// Integrate positions and release out-of-range slots
    pub fn update(&mut self, dt: f32) {
        for p in self.pool.iter_active_mut() {
            p.pos += p.vel * dt;
            let out = p.pos.y < PROJECTILE_MIN_DEPTH
                || p.pos.y > PROJECTILE_MAX_DEPTH
                || p.pos.x.abs() > PROJECTILE_MAX_X;
            if out {
                p.deactivate();
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.pool.iter_active()
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.pool.iter_active_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_volley_size_matches_weapon() {
        let mut rng = rng();
        let mut projectiles = Projectiles::new();
        projectiles.fire(Vec2::ZERO, FORWARD, WeaponKind::Shotgun, &mut rng);
        assert_eq!(projectiles.active_count(), 5);

        let mut projectiles = Projectiles::new();
        projectiles.fire(Vec2::ZERO, FORWARD, WeaponKind::Rifle, &mut rng);
        assert_eq!(projectiles.active_count(), 1);
    }

    #[test]
    fn test_pellet_fan_spreads_across_lanes() {
        let mut rng = rng();
        let mut projectiles = Projectiles::new();
        projectiles.fire(Vec2::ZERO, FORWARD, WeaponKind::Shotgun, &mut rng);

        let xs: Vec<f32> = projectiles.iter_active().map(|p| p.vel.x).collect();
        let min = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        // Outermost pellets of a 5-pellet fan at 0.3 rad step land on
        // opposite sides even after jitter (jitter bound 0.3 < fan 0.6)
        assert!(min < 0.0 && max > 0.0);
    }

    #[test]
    fn test_speed_comes_from_weapon_spec() {
        let mut rng = rng();
        let mut projectiles = Projectiles::new();
        projectiles.fire(Vec2::ZERO, FORWARD, WeaponKind::Rocket, &mut rng);
        let p = projectiles.iter_active().next().unwrap();
        assert!((p.vel.length() - 20.0).abs() < 1e-3);
        assert_eq!(p.area_radius, Some(2.0));
        assert_eq!(p.damage, 30);
    }

    #[test]
    fn test_out_of_range_deactivates() {
        let mut rng = rng();
        let mut projectiles = Projectiles::new();
        projectiles.spawn(Vec2::new(0.0, -79.0), FORWARD, WeaponKind::Rifle, &mut rng);
        // Rifle speed 40: one 100 ms step carries it past depth -80
        projectiles.update(0.1);
        assert_eq!(projectiles.active_count(), 0);
    }

    #[test]
    fn test_pool_exhaustion_is_silent() {
        let mut rng = rng();
        let mut projectiles = Projectiles::new();
        for _ in 0..(MAX_PROJECTILES + 50) {
            projectiles.spawn(Vec2::ZERO, FORWARD, WeaponKind::Rifle, &mut rng);
        }
        assert_eq!(projectiles.active_count(), MAX_PROJECTILES);
    }
}
