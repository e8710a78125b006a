//! Auto-fire control and projectile hit resolution
//!
//! The squad fires on its own whenever something worth shooting exists ahead:
//! any live enemy, or a weapon crate still in its shootable window. Volleys
//! are rate-limited per the current weapon; the fire timestamp starts at
//! negative infinity so the very first volley of a run is never delayed.

use rand_pcg::Pcg32;

use super::enemies::Enemies;
use super::hazards::Crates;
use super::pool::Poolable;
use super::projectile::{FORWARD, Projectiles};
use super::squad::Squad;

#[derive(Debug, Clone)]
pub struct CombatState {
    /// Simulation timestamp of the last volley, in milliseconds
    last_fire_ms: f32,
    firing: bool,
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatState {
    pub fn new() -> Self {
        Self {
            last_fire_ms: f32::NEG_INFINITY,
            firing: false,
        }
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }
}

/// Run one combat frame: re-evaluate the firing condition, emit a volley if
/// the weapon's fire interval has elapsed, then resolve every in-flight
/// projectile against enemies and crates (enemies take priority).
pub fn update(
    combat: &mut CombatState,
    now_ms: f32,
    projectiles: &mut Projectiles,
    squad: &Squad,
    enemies: &mut Enemies,
    crates: &mut Crates,
    rng: &mut Pcg32,
) {
    combat.firing = squad.is_alive() && (enemies.has_active() || crates.has_shootable());

    if combat.firing {
        let spec = squad.weapon().spec();
        if now_ms - combat.last_fire_ms >= spec.fire_rate_ms {
            for muzzle in squad.muzzle_points() {
                projectiles.fire(muzzle, FORWARD, squad.weapon(), rng);
            }
            combat.last_fire_ms = now_ms;
        }
    }

    resolve_hits(projectiles, enemies, crates);
}

/// Collision pass over in-flight projectiles. A projectile is spent on its
/// first hit regardless of target kind.
fn resolve_hits(projectiles: &mut Projectiles, enemies: &mut Enemies, crates: &mut Crates) {
    for p in projectiles.iter_active_mut() {
        if enemies.check_projectile_hit(p.pos, p.damage, p.area_radius)
            || crates.check_projectile_hit(p.pos, p.damage)
        {
            p.deactivate();
        }
    }
}
