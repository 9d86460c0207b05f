//! Body factory: randomized throws near the arena center

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Bounds, Die};
use crate::polar_to_cartesian;
use crate::tuning::LaunchTuning;

/// Create a die thrown from near the center of the arena.
///
/// The die gets a random outward velocity, heading and spin, and its face
/// value is rolled here once. Unsupported face counts still produce a die
/// with the fallback size and color.
pub fn spawn_die<R: Rng>(
    rng: &mut R,
    id: u32,
    faces: u32,
    bounds: Bounds,
    launch: &LaunchTuning,
) -> Die {
    let offset = if launch.scatter > 0.0 {
        Vec2::new(
            rng.random_range(-launch.scatter..launch.scatter),
            rng.random_range(-launch.scatter..launch.scatter),
        )
    } else {
        Vec2::ZERO
    };

    let result = rng.random_range(1..=faces.max(1));
    let mut die = Die::new(id, faces, result, bounds.center() + offset);

    let angle = rng.random_range(0.0..TAU);
    let speed = rng.random_range(launch.min_speed..launch.max_speed);
    die.vel = polar_to_cartesian(speed, angle);

    die.heading = rng.random_range(0.0..TAU);
    die.spin = if launch.max_spin > 0.0 {
        rng.random_range(-launch.max_spin..launch.max_spin)
    } else {
        0.0
    };

    die
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn throw(seed: u64, faces: u32) -> Die {
        let mut rng = Pcg32::seed_from_u64(seed);
        spawn_die(&mut rng, 1, faces, Bounds::new(800.0, 600.0), &LaunchTuning::default())
    }

    #[test]
    fn test_spawn_ranges() {
        for seed in 0..500 {
            let die = throw(seed, 20);
            assert!((1..=20).contains(&die.result()));

            let speed = die.vel.length();
            assert!(speed >= 8.0 - 1e-3 && speed <= 20.0 + 1e-3, "speed {}", speed);

            assert!(die.spin >= -0.3 && die.spin < 0.3);
            assert!(die.heading >= 0.0 && die.heading < TAU);

            let offset = die.pos - Vec2::new(400.0, 300.0);
            assert!(offset.x.abs() <= 100.0 && offset.y.abs() <= 100.0);
        }
    }

    #[test]
    fn test_spawn_covers_every_face() {
        let mut seen = [false; 6];
        for seed in 0..300 {
            seen[throw(seed, 6).result() as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_spawn_unknown_faces() {
        let die = throw(42, 7);
        assert!(die.kind().is_none());
        assert_eq!(die.size(), 35.0);
        assert!((1..=7).contains(&die.result()));
    }

    #[test]
    fn test_spawn_is_seed_reproducible() {
        let a = throw(1234, 12);
        let b = throw(1234, 12);
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
        assert_eq!(a.heading, b.heading);
        assert_eq!(a.spin, b.spin);
        assert_eq!(a.result(), b.result());
    }

    #[test]
    fn test_spawn_without_scatter_starts_centered() {
        let mut rng = Pcg32::seed_from_u64(7);
        let launch = LaunchTuning {
            scatter: 0.0,
            max_spin: 0.0,
            ..LaunchTuning::default()
        };
        let die = spawn_die(&mut rng, 1, 8, Bounds::new(200.0, 100.0), &launch);
        assert_eq!(die.pos, Vec2::new(100.0, 50.0));
        assert_eq!(die.spin, 0.0);
    }
}
