//! Dice Dropper - polyhedral dice tumbling onto a flat table
//!
//! Core modules:
//! - `sim`: Seeded simulation (die bodies, factory, collisions, settle detection)
//! - `selection`: How many dice of each kind the next roll throws
//! - `table`: Caller-driven roll loop tying selection, RNG and simulation together
//! - `renderer`: Read-only snapshots and vertex tessellation for a host renderer
//! - `tuning`: Data-driven physics and launch constants

pub mod error;
pub mod renderer;
pub mod selection;
pub mod sim;
pub mod table;
pub mod tuning;

pub use error::{SelectionError, TuningError};
pub use selection::DiceSelection;
pub use table::{DiceTable, RollSummary};
pub use tuning::{LaunchTuning, PhysicsTuning, Tuning};

use glam::Vec2;

/// Table configuration constants
pub mod consts {
    /// Arena size used until the host reports its surface size
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

    /// Size of a die whose face count has no dedicated kind
    pub const FALLBACK_DIE_SIZE: f32 = 35.0;
    /// Fallback fill color (grey)
    pub const FALLBACK_DIE_COLOR: u32 = 0x95a5a6;

    /// Most dice a single roll may throw
    pub const MAX_DICE: u32 = 100;

    /// Upper bound on ticks the native binary simulates before giving up
    pub const DEFAULT_MAX_TICKS: u32 = 10_000;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid rounding can land exactly on PI
    if wrapped >= PI { -PI } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rotate a vector counter-clockwise by `theta` radians
#[inline]
pub fn rotate(v: Vec2, theta: f32) -> Vec2 {
    Vec2::from_angle(theta).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle_huge_inputs() {
        for angle in [1e9, -1e9, 3.0e38, -3.0e38, f32::MAX, -PI, PI] {
            let wrapped = normalize_angle(angle);
            assert!((-PI..PI).contains(&wrapped), "{} -> {}", angle, wrapped);
        }
    }

    #[test]
    fn test_polar_to_cartesian() {
        let v = polar_to_cartesian(10.0, PI / 2.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::new(1.0, 0.0), PI / 2.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 1.0).abs() < 1e-5);
    }
}
