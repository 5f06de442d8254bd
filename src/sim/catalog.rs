//! Immutable gameplay catalogs
//!
//! Weapon, hostile, and pickup stats live in enum-keyed tables fixed at
//! compile time. Runtime scaling (wave-based hostile stats, level-based
//! damage) is applied where entities are created, never here.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGB color passed through to the rendering collaborator
pub type Color = [u8; 3];

/// Weapons the player can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Pistol,
    Shotgun,
    Rifle,
    Sniper,
}

/// Immutable stats for one weapon
#[derive(Debug, Clone)]
pub struct WeaponSpec {
    /// Base damage per projectile, before the player's damage multiplier
    pub damage: f32,
    /// Minimum time between shots
    pub cooldown_ms: f32,
    /// Projectile speed in pixels per tick
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub color: Color,
    /// Half-angle of random spread in radians (0 = perfectly straight)
    pub spread: f32,
    /// Projectiles emitted per shot
    pub pellet_count: u32,
    /// Rounds in a fresh pouch
    pub starting_ammo: u32,
    /// Rounds granted per ammo pickup
    pub ammo_refill: u32,
}

static WEAPONS: [WeaponSpec; 4] = [
    WeaponSpec {
        damage: 25.0,
        cooldown_ms: 400.0,
        projectile_speed: 8.0,
        projectile_radius: 5.0,
        color: [255, 255, 0],
        spread: 0.0,
        pellet_count: 1,
        starting_ammo: 100,
        ammo_refill: 50,
    },
    WeaponSpec {
        damage: 15.0,
        cooldown_ms: 800.0,
        projectile_speed: 7.0,
        projectile_radius: 4.0,
        color: [255, 200, 0],
        spread: 0.15,
        pellet_count: 5,
        starting_ammo: 20,
        ammo_refill: 10,
    },
    WeaponSpec {
        damage: 40.0,
        cooldown_ms: 200.0,
        projectile_speed: 12.0,
        projectile_radius: 3.0,
        color: [255, 100, 0],
        spread: 0.0,
        pellet_count: 1,
        starting_ammo: 60,
        ammo_refill: 30,
    },
    WeaponSpec {
        damage: 100.0,
        cooldown_ms: 1200.0,
        projectile_speed: 20.0,
        projectile_radius: 7.0,
        color: [200, 0, 200],
        spread: 0.0,
        pellet_count: 1,
        starting_ammo: 10,
        ammo_refill: 5,
    },
];

impl WeaponKind {
    pub const ALL: [WeaponKind; 4] = [
        WeaponKind::Pistol,
        WeaponKind::Shotgun,
        WeaponKind::Rifle,
        WeaponKind::Sniper,
    ];
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn spec(self) -> &'static WeaponSpec {
        &WEAPONS[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponKind::Pistol => "pistol",
            WeaponKind::Shotgun => "shotgun",
            WeaponKind::Rifle => "rifle",
            WeaponKind::Sniper => "sniper",
        }
    }
}

/// Hostile archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    Normal,
    Fast,
    Tank,
}

/// Immutable base stats for one hostile archetype
///
/// Health and contact damage are scaled by the wave index when a hostile
/// spawns; everything else is used as-is.
#[derive(Debug, Clone)]
pub struct HostileSpec {
    /// Sprite extent (square side); collision radius is half of this
    pub size: f32,
    /// Movement speed in pixels per tick
    pub speed: f32,
    pub health: f32,
    pub contact_damage: f32,
    pub color: Color,
    /// Experience awarded on death (score award is this times the wave)
    pub xp_value: u32,
}

static HOSTILES: [HostileSpec; 3] = [
    HostileSpec {
        size: 30.0,
        speed: 2.0,
        health: 50.0,
        contact_damage: 10.0,
        color: [200, 0, 0],
        xp_value: 10,
    },
    HostileSpec {
        size: 25.0,
        speed: 3.5,
        health: 30.0,
        contact_damage: 5.0,
        color: [150, 0, 0],
        xp_value: 15,
    },
    HostileSpec {
        size: 40.0,
        speed: 1.0,
        health: 150.0,
        contact_damage: 20.0,
        color: [100, 0, 0],
        xp_value: 25,
    },
];

impl HostileKind {
    pub const ALL: [HostileKind; 3] = [HostileKind::Normal, HostileKind::Fast, HostileKind::Tank];

    #[inline]
    pub fn spec(self) -> &'static HostileSpec {
        &HOSTILES[self as usize]
    }

    /// Collision radius (half the sprite extent)
    #[inline]
    pub fn radius(self) -> f32 {
        self.spec().size / 2.0
    }
}

/// Spawn weight tiers for (normal, fast, tank), keyed by wave threshold.
/// Weights shift toward the harder archetypes as waves progress.
const WEIGHT_TIERS: [(u32, [u32; 3]); 4] = [
    (5, [80, 15, 5]),
    (10, [60, 30, 10]),
    (15, [40, 40, 20]),
    (u32::MAX, [20, 50, 30]),
];

/// Spawn weights for the given wave
pub fn hostile_weights(wave: u32) -> [u32; 3] {
    for &(threshold, weights) in &WEIGHT_TIERS {
        if wave <= threshold {
            return weights;
        }
    }
    WEIGHT_TIERS[WEIGHT_TIERS.len() - 1].1
}

/// Weighted random draw of a hostile archetype for the given wave
pub fn roll_hostile_kind<R: Rng>(rng: &mut R, wave: u32) -> HostileKind {
    let weights = hostile_weights(wave);
    let total: u32 = weights.iter().sum();
    let mut roll = rng.random_range(0..total);
    for (kind, weight) in HostileKind::ALL.into_iter().zip(weights) {
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    HostileKind::Tank
}

/// Timed-buff modifier granted by a pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    Speed,
    Damage,
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    Speed,
    Damage,
    Ammo,
}

/// Timed-effect parameters for buff pickups
#[derive(Debug, Clone, Copy)]
pub struct BuffParams {
    /// Multiplier applied to the affected stat while active
    pub magnitude: f32,
    pub duration_ms: f32,
}

/// Immutable stats for one pickup type
#[derive(Debug, Clone)]
pub struct PickupSpec {
    /// Collection radius
    pub radius: f32,
    pub color: Color,
    /// Instant heal amount (health pickups only)
    pub heal: f32,
    /// Timed effect; `None` for instant pickups
    pub buff: Option<BuffParams>,
}

static PICKUPS: [PickupSpec; 4] = [
    PickupSpec {
        radius: 15.0,
        color: [0, 255, 0],
        heal: 50.0,
        buff: None,
    },
    PickupSpec {
        radius: 15.0,
        color: [0, 255, 255],
        heal: 0.0,
        buff: Some(BuffParams {
            magnitude: 2.0,
            duration_ms: 10_000.0,
        }),
    },
    PickupSpec {
        radius: 15.0,
        color: [255, 0, 255],
        heal: 0.0,
        buff: Some(BuffParams {
            magnitude: 1.5,
            duration_ms: 15_000.0,
        }),
    },
    PickupSpec {
        radius: 15.0,
        color: [255, 255, 255],
        heal: 0.0,
        buff: None,
    },
];

impl PickupKind {
    pub const ALL: [PickupKind; 4] = [
        PickupKind::Health,
        PickupKind::Speed,
        PickupKind::Damage,
        PickupKind::Ammo,
    ];

    #[inline]
    pub fn spec(self) -> &'static PickupSpec {
        &PICKUPS[self as usize]
    }

    /// The buff this pickup promotes into, if it is a timed effect
    pub fn buff_kind(self) -> Option<BuffKind> {
        match self {
            PickupKind::Speed => Some(BuffKind::Speed),
            PickupKind::Damage => Some(BuffKind::Damage),
            PickupKind::Health | PickupKind::Ammo => None,
        }
    }

    /// Uniform random pickup type
    pub fn roll<R: Rng>(rng: &mut R) -> PickupKind {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn weapon_catalog_values() {
        let pistol = WeaponKind::Pistol.spec();
        assert_eq!(pistol.damage, 25.0);
        assert_eq!(pistol.cooldown_ms, 400.0);
        assert_eq!(pistol.projectile_speed, 8.0);
        assert_eq!(pistol.pellet_count, 1);

        let shotgun = WeaponKind::Shotgun.spec();
        assert_eq!(shotgun.pellet_count, 5);
        assert!(shotgun.spread > 0.0);
    }

    #[test]
    fn hostile_radius_is_half_size() {
        assert_eq!(HostileKind::Normal.radius(), 15.0);
        assert_eq!(HostileKind::Tank.radius(), 20.0);
    }

    #[test]
    fn weight_tiers_by_wave() {
        assert_eq!(hostile_weights(1), [80, 15, 5]);
        assert_eq!(hostile_weights(5), [80, 15, 5]);
        assert_eq!(hostile_weights(6), [60, 30, 10]);
        assert_eq!(hostile_weights(11), [40, 40, 20]);
        assert_eq!(hostile_weights(16), [20, 50, 30]);
        assert_eq!(hostile_weights(100), [20, 50, 30]);
    }

    #[test]
    fn hostile_roll_respects_weights() {
        // With 80/15/5 weights, normals should dominate early waves.
        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts = [0u32; 3];
        for _ in 0..1000 {
            counts[roll_hostile_kind(&mut rng, 1) as usize] += 1;
        }
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[2]);
        assert!(counts[2] > 0);
    }

    #[test]
    fn pickup_buff_mapping() {
        assert_eq!(PickupKind::Speed.buff_kind(), Some(BuffKind::Speed));
        assert_eq!(PickupKind::Damage.buff_kind(), Some(BuffKind::Damage));
        assert_eq!(PickupKind::Health.buff_kind(), None);
        assert_eq!(PickupKind::Ammo.buff_kind(), None);
    }
}
