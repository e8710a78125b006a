//! Gates, crates, and obstacles
//!
//! The three lane-hazard families share the move-with-world pattern: actors
//! scroll toward the squad every frame and self-deactivate once they pass it.
//! Each applies its effect through a one-shot latch (`passed` / `opened` /
//! `hit`) so the effect lands exactly once per spawned instance even though
//! the collision predicate is re-evaluated every frame the actor occupies its
//! trigger band.

use glam::Vec2;

use super::pool::{Pool, Poolable};
use super::squad::Squad;
use crate::consts::*;
use crate::tuning::{ObstacleKind, WeaponKind};

/// Lateral offset of each gate in a left/right choice pair
const GATE_PAIR_OFFSET: f32 = 1.2;
/// Gate trigger: depth band and lane half-width
const GATE_BAND: (f32, f32) = (-1.0, 1.0);
const GATE_HALF_WIDTH: f32 = 1.5;
/// Crates stop accepting damage once this close to the squad
const CRATE_SHOOTABLE_DEPTH: f32 = 5.0;
pub(crate) const CRATE_HIT_RADIUS: f32 = 0.8;

// ---------------------------------------------------------------------------
// Gates
// ---------------------------------------------------------------------------

/// A numeric gate: crossing it adds `value` (which may be negative) to the
/// squad population, exactly once.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    pub pos: Vec2,
    pub value: i32,
    pub passed: bool,
    pub active: bool,
}

impl Poolable for Gate {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone)]
pub struct Gates {
    pool: Pool<Gate>,
}

impl Default for Gates {
    fn default() -> Self {
        Self::new()
    }
}

impl Gates {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(MAX_GATES),
        }
    }

    pub fn spawn(&mut self, x: f32, depth: f32, value: i32) -> bool {
        self.pool
            .spawn(|g| {
                g.pos = Vec2::new(x, depth);
                g.value = value;
                g.passed = false;
                g.active = true;
            })
            .is_some()
    }

    /// Two gates side by side on the boost lane; the player steers into one
    pub fn spawn_choice(&mut self, depth: f32, left_value: i32, right_value: i32) {
        self.spawn(BOOST_LANE_X - GATE_PAIR_OFFSET, depth, left_value);
        self.spawn(BOOST_LANE_X + GATE_PAIR_OFFSET, depth, right_value);
    }

    /// Scroll, resolve crossings against the squad, release passed slots
    pub fn update(&mut self, dt: f32, squad: &mut Squad) {
        let squad_x = squad.position_x();
        for gate in self.pool.iter_active_mut() {
            gate.pos.y += WORLD_SPEED * dt;

            if !gate.passed
                && gate.pos.y > GATE_BAND.0
                && gate.pos.y < GATE_BAND.1
                && (squad_x - gate.pos.x).abs() < GATE_HALF_WIDTH
            {
                gate.passed = true;
                squad.modify_count(gate.value);
            }

            if gate.pos.y > 10.0 {
                gate.deactivate();
            }
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Gate> {
        self.pool.iter_active()
    }
}

// ---------------------------------------------------------------------------
// Crates
// ---------------------------------------------------------------------------

/// A weapon crate opened by shooting it down to zero hit points
#[derive(Debug, Clone, Default)]
pub struct Crate {
    pub pos: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub weapon: WeaponKind,
    pub opened: bool,
    pub active: bool,
}

impl Crate {
    /// Damageable window: open crates and crates that have drifted too close
    /// to the squad no longer soak bullets
    pub fn is_shootable(&self) -> bool {
        self.active && !self.opened && self.pos.y < CRATE_SHOOTABLE_DEPTH
    }

    /// Returns true when this hit opens the crate
    fn take_damage(&mut self, damage: i32) -> bool {
        if !self.active || self.opened {
            return false;
        }
        self.hp -= damage;
        if self.hp <= 0 {
            self.opened = true;
            return true;
        }
        false
    }
}

impl Poolable for Crate {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone)]
pub struct Crates {
    pool: Pool<Crate>,
}

impl Default for Crates {
    fn default() -> Self {
        Self::new()
    }
}

impl Crates {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(MAX_CRATES),
        }
    }

    pub fn spawn(&mut self, x: f32, depth: f32, weapon: WeaponKind, hp: i32) -> bool {
        self.pool
            .spawn(|c| {
                c.pos = Vec2::new(x, depth);
                c.weapon = weapon;
                c.hp = hp;
                c.max_hp = hp;
                c.opened = false;
                c.active = true;
            })
            .is_some()
    }

    /// Scroll, consume `opened` latches into a weapon grant, despawn misses.
    ///
    /// A crate that scrolls past depth 0 still unopened despawns without
    /// effect: a missed pickup, not a penalty.
    pub fn update(&mut self, dt: f32, squad: &mut Squad) {
        for crate_ in self.pool.iter_active_mut() {
            crate_.pos.y += WORLD_SPEED * dt;

            if crate_.opened {
                squad.set_weapon(crate_.weapon);
                log::debug!("weapon pickup: {}", crate_.weapon.spec().name);
                crate_.deactivate();
                continue;
            }

            if crate_.pos.y > 0.0 {
                crate_.deactivate();
            }
        }
    }

    /// Projectile impact test. Damage is accepted only inside the shootable
    /// window; opening is observed by the next `update` pass.
    pub fn check_projectile_hit(&mut self, pos: Vec2, damage: i32) -> bool {
        for crate_ in self.pool.iter_active_mut() {
            if !crate_.is_shootable() {
                continue;
            }
            if pos.distance(crate_.pos) < CRATE_HIT_RADIUS {
                crate_.take_damage(damage);
                return true;
            }
        }
        false
    }

    pub fn has_shootable(&self) -> bool {
        self.pool.iter_active().any(Crate::is_shootable)
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Crate> {
        self.pool.iter_active()
    }
}

// ---------------------------------------------------------------------------
// Obstacles
// ---------------------------------------------------------------------------

/// A lane hazard (barrel or spike strip) dealing flat population damage
#[derive(Debug, Clone, Default)]
pub struct Obstacle {
    pub pos: Vec2,
    pub kind: ObstacleKind,
    pub damage: i32,
    pub hit: bool,
    pub active: bool,
}

impl Poolable for Obstacle {
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Barrels and spikes keep separate pools so one family flooding the corridor
/// cannot starve the other.
#[derive(Debug, Clone)]
pub struct Obstacles {
    barrels: Pool<Obstacle>,
    spikes: Pool<Obstacle>,
}

impl Default for Obstacles {
    fn default() -> Self {
        Self::new()
    }
}

impl Obstacles {
    pub fn new() -> Self {
        Self {
            barrels: Pool::new(MAX_BARRELS),
            spikes: Pool::new(MAX_SPIKES),
        }
    }

    pub fn spawn(&mut self, kind: ObstacleKind, x: f32, depth: f32, damage: i32) -> bool {
        let pool = match kind {
            ObstacleKind::Barrel => &mut self.barrels,
            ObstacleKind::Spike => &mut self.spikes,
        };
        pool.spawn(|o| {
            o.pos = Vec2::new(x, depth);
            o.kind = kind;
            o.damage = damage;
            o.hit = false;
            o.active = true;
        })
        .is_some()
    }

    /// Scroll and resolve squad collisions. The lane test widens with the
    /// squad's own width plus the kind's fixed tolerance.
    pub fn update(&mut self, dt: f32, squad: &mut Squad) {
        let squad_x = squad.position_x();
        let squad_width = squad.width();
        for obstacle in self
            .barrels
            .iter_active_mut()
            .chain(self.spikes.iter_active_mut())
        {
            obstacle.pos.y += WORLD_SPEED * dt;

            let (band_min, band_max) = obstacle.kind.trigger_band();
            if !obstacle.hit && obstacle.pos.y > band_min && obstacle.pos.y < band_max {
                let dx = (squad_x - obstacle.pos.x).abs();
                if dx < squad_width + obstacle.kind.tolerance() {
                    obstacle.hit = true;
                    squad.modify_count(-obstacle.damage);
                }
            }

            if obstacle.pos.y > 5.0 {
                obstacle.deactivate();
            }
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Obstacle> {
        self.barrels.iter_active().chain(self.spikes.iter_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad_of(count: u32) -> Squad {
        let mut squad = Squad::new();
        squad.modify_count(count as i32 - 1);
        squad
    }

    #[test]
    fn test_gate_applies_value_exactly_once() {
        let mut squad = squad_of(10);
        let mut gates = Gates::new();
        gates.spawn(0.0, -0.5, 7);

        // Several frames inside the trigger band
        for _ in 0..5 {
            gates.update(0.01, &mut squad);
        }
        assert_eq!(squad.count(), 17);
    }

    #[test]
    fn test_gate_requires_lane_overlap() {
        let mut squad = squad_of(10);
        let mut gates = Gates::new();
        gates.spawn(BOOST_LANE_X, 0.0, 5); // squad is on the player lane
        gates.update(0.01, &mut squad);
        assert_eq!(squad.count(), 10);
    }

    #[test]
    fn test_negative_gate_shrinks_squad() {
        let mut squad = squad_of(10);
        let mut gates = Gates::new();
        gates.spawn(0.0, 0.0, -6);
        gates.update(0.01, &mut squad);
        assert_eq!(squad.count(), 4);
    }

    #[test]
    fn test_crate_opens_after_cumulative_damage_and_grants_once() {
        let mut squad = squad_of(5);
        let mut crates = Crates::new();
        crates.spawn(BOOST_LANE_X, -10.0, WeaponKind::Rocket, 30);

        let crate_pos = Vec2::new(BOOST_LANE_X, -10.0);
        assert!(crates.check_projectile_hit(crate_pos, 15));
        assert_eq!(squad.weapon(), WeaponKind::Rifle); // not open yet
        assert!(crates.check_projectile_hit(crate_pos, 15)); // 30 - 15 - 15 = 0

        crates.update(0.0, &mut squad);
        assert_eq!(squad.weapon(), WeaponKind::Rocket);

        // A third queued hit on the consumed crate has no effect
        assert!(!crates.check_projectile_hit(crate_pos, 15));
        squad.set_weapon(WeaponKind::Rifle);
        crates.update(0.0, &mut squad);
        assert_eq!(squad.weapon(), WeaponKind::Rifle);
    }

    #[test]
    fn test_unopened_crate_past_squad_is_a_lost_opportunity() {
        let mut squad = squad_of(5);
        let mut crates = Crates::new();
        crates.spawn(BOOST_LANE_X, -0.5, WeaponKind::Shotgun, 30);

        crates.update(0.1, &mut squad); // scrolls to +0.3
        assert!(!crates.has_shootable());
        assert_eq!(crates.iter_active().count(), 0);
        assert_eq!(squad.count(), 5);
        assert_eq!(squad.weapon(), WeaponKind::Rifle);
    }

    #[test]
    fn test_crate_not_shootable_too_close() {
        let mut crates = Crates::new();
        crates.spawn(0.0, 6.0, WeaponKind::Minigun, 30);
        assert!(!crates.has_shootable());
        assert!(!crates.check_projectile_hit(Vec2::new(0.0, 6.0), 100));
    }

    #[test]
    fn test_obstacle_hits_exactly_once() {
        let mut squad = squad_of(20);
        let mut obstacles = Obstacles::new();
        obstacles.spawn(ObstacleKind::Barrel, 0.0, 0.0, 3);

        for _ in 0..5 {
            obstacles.update(0.001, &mut squad);
        }
        assert_eq!(squad.count(), 17);
    }

    #[test]
    fn test_larger_squads_are_easier_to_hit() {
        // Offset chosen so only the wide squad's width reaches the barrel
        let x_offset = 1.2;

        let mut small = squad_of(2); // width 0.2, 0.2 + 0.4 < 1.2
        let mut obstacles = Obstacles::new();
        obstacles.spawn(ObstacleKind::Barrel, x_offset, 0.0, 3);
        obstacles.update(0.001, &mut small);
        assert_eq!(small.count(), 2);

        let mut big = squad_of(20); // width 1.5 capped... 20*0.1=2.0 -> 1.5
        let mut obstacles = Obstacles::new();
        obstacles.spawn(ObstacleKind::Barrel, x_offset, 0.0, 3);
        obstacles.update(0.001, &mut big);
        assert_eq!(big.count(), 17);
    }

    #[test]
    fn test_spike_band_excludes_early_contact() {
        let mut squad = squad_of(20);
        let mut obstacles = Obstacles::new();
        obstacles.spawn(ObstacleKind::Spike, 0.0, -0.7, 2);
        obstacles.update(0.001, &mut squad); // still ahead of the spike band
        assert_eq!(squad.count(), 20);
    }
}
