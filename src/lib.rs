//! Horde Rush - a top-down zombie wave survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, waves, game state)
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound cue dispatch for the host

pub mod audio;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation rate
    pub const SIM_TICK_HZ: f32 = 60.0;
    /// Milliseconds advanced per tick at the fixed rate
    pub const TICK_DT_MS: f32 = 1000.0 / SIM_TICK_HZ;

    /// Player sprite extent (square side)
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = PLAYER_SIZE / 2.0;
    /// World position where a fresh run begins
    pub const PLAYER_START: Vec2 = Vec2::new(400.0, 300.0);
}

/// Angle (radians) from one point toward another
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector pointing along an angle
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Unit steering vector from one point toward another
///
/// Returns `Vec2::ZERO` when the points coincide, so a hostile standing
/// exactly on its target holds position for the tick instead of producing
/// NaNs.
#[inline]
pub fn steer_toward(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_to_cardinal_directions() {
        let origin = Vec2::ZERO;
        assert!((angle_to(origin, Vec2::new(10.0, 0.0))).abs() < 1e-6);
        let up = angle_to(origin, Vec2::new(0.0, 10.0));
        assert!((up - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn steer_toward_zero_length_guard() {
        let p = Vec2::new(42.0, -7.0);
        assert_eq!(steer_toward(p, p), Vec2::ZERO);
    }

    #[test]
    fn steer_toward_is_unit_length() {
        let dir = steer_toward(Vec2::new(1.0, 2.0), Vec2::new(-30.0, 44.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }
}
