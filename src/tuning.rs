//! Data-driven combat balance
//!
//! Closed kind enums with static spec tables, supplied once and never mutated
//! at runtime. Adding a weapon or obstacle kind is a compile-time-checked
//! change: every `match` over these enums is exhaustive.

use serde::{Deserialize, Serialize};

/// Ballistic parameters for one weapon kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSpec {
    pub name: &'static str,
    /// Minimum milliseconds between volleys
    pub fire_rate_ms: f32,
    pub damage: i32,
    pub bullet_speed: f32,
    /// Pellet fan step and random jitter bound (radians)
    pub spread: f32,
    pub bullets_per_shot: u32,
    /// `Some(r)` marks an area-effect weapon with impact radius `r`
    pub area_radius: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Rifle,
    Shotgun,
    Rocket,
    Minigun,
}

const RIFLE: WeaponSpec = WeaponSpec {
    name: "Rifle",
    fire_rate_ms: 150.0,
    damage: 3,
    bullet_speed: 40.0,
    spread: 0.05,
    bullets_per_shot: 1,
    area_radius: None,
};

const SHOTGUN: WeaponSpec = WeaponSpec {
    name: "Shotgun",
    fire_rate_ms: 500.0,
    damage: 5,
    bullet_speed: 35.0,
    spread: 0.3,
    bullets_per_shot: 5,
    area_radius: None,
};

const ROCKET: WeaponSpec = WeaponSpec {
    name: "Rocket Launcher",
    fire_rate_ms: 800.0,
    damage: 30,
    bullet_speed: 20.0,
    spread: 0.02,
    bullets_per_shot: 1,
    area_radius: Some(2.0),
};

const MINIGUN: WeaponSpec = WeaponSpec {
    name: "Minigun",
    fire_rate_ms: 40.0,
    damage: 2,
    bullet_speed: 50.0,
    spread: 0.15,
    bullets_per_shot: 2,
    area_radius: None,
};

impl WeaponKind {
    /// Weapon kinds that can appear in a crate (the rifle is the starter)
    pub const PICKUPS: [WeaponKind; 3] =
        [WeaponKind::Shotgun, WeaponKind::Rocket, WeaponKind::Minigun];

    pub const fn spec(self) -> &'static WeaponSpec {
        match self {
            WeaponKind::Rifle => &RIFLE,
            WeaponKind::Shotgun => &SHOTGUN,
            WeaponKind::Rocket => &ROCKET,
            WeaponKind::Minigun => &MINIGUN,
        }
    }

    pub const fn is_area_effect(self) -> bool {
        self.spec().area_radius.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    Barrel,
    Spike,
}

impl ObstacleKind {
    /// Depth band in which the obstacle can catch the squad
    pub const fn trigger_band(self) -> (f32, f32) {
        match self {
            ObstacleKind::Barrel => (-1.0, 1.5),
            ObstacleKind::Spike => (-0.5, 1.0),
        }
    }

    /// Lane tolerance added on top of the squad's own width
    pub const fn tolerance(self) -> f32 {
        match self {
            ObstacleKind::Barrel => 0.4,
            ObstacleKind::Spike => 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rocket_is_area_effect() {
        assert!(WeaponKind::Rocket.is_area_effect());
        assert!(!WeaponKind::Rifle.is_area_effect());
        assert!(!WeaponKind::Shotgun.is_area_effect());
        assert!(!WeaponKind::Minigun.is_area_effect());
    }

    #[test]
    fn test_pellet_weapons_have_spread() {
        for kind in WeaponKind::PICKUPS {
            let spec = kind.spec();
            if spec.bullets_per_shot > 1 {
                assert!(spec.spread > 0.0);
            }
        }
    }

    #[test]
    fn test_spike_band_is_inside_barrel_band() {
        let (b_min, b_max) = ObstacleKind::Barrel.trigger_band();
        let (s_min, s_max) = ObstacleKind::Spike.trigger_band();
        assert!(s_min > b_min && s_max < b_max);
    }
}
