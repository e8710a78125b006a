//! Squad population model
//!
//! The squad is the player-facing resource: a bounded unit count, a current
//! weapon, and a lane position. `modify_count` is the sole write path for the
//! population; every mutation clamps to [0, SQUAD_MAX], and a count of zero is
//! the lose condition observed by the outer state machine.

use glam::Vec2;

use crate::consts::*;
use crate::tuning::WeaponKind;

/// Per-update smoothing factor toward the steering target
const STEER_SMOOTHING: f32 = 0.15;
/// Muzzle sits slightly ahead of each member
const MUZZLE_OFFSET: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct Squad {
    count: u32,
    weapon: WeaponKind,
    position_x: f32,
}

impl Default for Squad {
    fn default() -> Self {
        Self::new()
    }
}

impl Squad {
    pub fn new() -> Self {
        Self {
            count: SQUAD_START_COUNT,
            weapon: WeaponKind::Rifle,
            position_x: PLAYER_LANE_X,
        }
    }

    /// Apply a population delta, clamped to [0, SQUAD_MAX].
    ///
    /// Gates, hazards, and enemy reach-hits all funnel through here; no
    /// subsystem writes the count directly.
    pub fn modify_count(&mut self, delta: i32) {
        let next = i64::from(self.count) + i64::from(delta);
        self.count = next.clamp(0, i64::from(SQUAD_MAX)) as u32;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_alive(&self) -> bool {
        self.count > 0
    }

    pub fn has_reached_max(&self) -> bool {
        self.count >= SQUAD_MAX
    }

    pub fn weapon(&self) -> WeaponKind {
        self.weapon
    }

    pub fn set_weapon(&mut self, weapon: WeaponKind) {
        self.weapon = weapon;
    }

    pub fn position_x(&self) -> f32 {
        self.position_x
    }

    /// Squad position on the road plane (depth 0 by definition)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position_x, 0.0)
    }

    /// Half-width of the formation for hazard collision tests.
    ///
    /// Grows with the population so larger squads are easier to hit.
    pub fn width(&self) -> f32 {
        (self.count as f32 * 0.1).min(1.5)
    }

    /// Smooth the lane position toward a steering target
    pub fn steer(&mut self, target_x: f32) {
        let target = target_x.clamp(-MOVE_BOUNDS, MOVE_BOUNDS);
        self.position_x += (target - self.position_x) * STEER_SMOOTHING;
    }

    /// Muzzle point of every living member, blob formation: ceil(sqrt(n))
    /// columns at SOLDIER_SPACING, rows packed at 0.8x spacing behind the
    /// leader, each muzzle MUZZLE_OFFSET ahead of its member.
    pub fn muzzle_points(&self) -> Vec<Vec2> {
        let count = self.count as usize;
        let mut points = Vec::with_capacity(count);
        if count == 0 {
            return points;
        }

        let cols = (count as f32).sqrt().ceil() as usize;
        let mut index = 0;
        let mut row = 0;
        while index < count {
            let cols_in_row = cols.min(count - index);
            let row_offset = (cols_in_row as f32 - 1.0) * SOLDIER_SPACING / 2.0;
            for col in 0..cols_in_row {
                let x = self.position_x + col as f32 * SOLDIER_SPACING - row_offset;
                let depth = row as f32 * SOLDIER_SPACING * 0.8 - MUZZLE_OFFSET;
                points.push(Vec2::new(x, depth));
                index += 1;
            }
            row += 1;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_population_clamps_at_zero() {
        let mut squad = Squad::new();
        squad.modify_count(4); // 5 total
        squad.modify_count(-999);
        assert_eq!(squad.count(), 0);
        assert!(!squad.is_alive());
    }

    #[test]
    fn test_population_clamps_at_max() {
        let mut squad = Squad::new();
        squad.modify_count(i32::MAX);
        assert_eq!(squad.count(), SQUAD_MAX);
        assert!(squad.has_reached_max());
    }

    #[test]
    fn test_width_saturates() {
        let mut squad = Squad::new();
        assert!(squad.width() < 0.2);
        squad.modify_count(199);
        assert_eq!(squad.width(), 1.5);
    }

    #[test]
    fn test_muzzle_points_match_population() {
        let mut squad = Squad::new();
        squad.modify_count(36); // 37 members
        let points = squad.muzzle_points();
        assert_eq!(points.len(), 37);
        // Every muzzle sits ahead of its member's row
        assert!(points.iter().all(|p| p.y >= -MUZZLE_OFFSET));
    }

    #[test]
    fn test_steer_respects_bounds() {
        let mut squad = Squad::new();
        for _ in 0..200 {
            squad.steer(50.0);
        }
        assert!(squad.position_x() <= MOVE_BOUNDS + 1e-4);
    }

    proptest! {
        #[test]
        fn prop_population_stays_in_bounds(deltas in proptest::collection::vec(-300i32..300, 0..64)) {
            let mut squad = Squad::new();
            for delta in deltas {
                squad.modify_count(delta);
                prop_assert!(squad.count() <= SQUAD_MAX);
            }
        }
    }
}
