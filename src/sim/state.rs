//! Die bodies and arena bounds
//!
//! A die's face count and result are fixed when it is created. Everything
//! else is owned by the step engine once the die is loaded.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, FALLBACK_DIE_COLOR, FALLBACK_DIE_SIZE};

/// Supported polyhedral die kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieKind {
    /// All kinds, in the order a roll spawns them
    pub const ALL: [DieKind; 6] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
    ];

    pub fn from_faces(faces: u32) -> Option<Self> {
        match faces {
            4 => Some(DieKind::D4),
            6 => Some(DieKind::D6),
            8 => Some(DieKind::D8),
            10 => Some(DieKind::D10),
            12 => Some(DieKind::D12),
            20 => Some(DieKind::D20),
            _ => None,
        }
    }

    pub fn faces(&self) -> u32 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
        }
    }

    /// Extent on the table (diameter of the collision circle)
    pub fn size(&self) -> f32 {
        match self {
            DieKind::D4 => 30.0,
            DieKind::D6 => 35.0,
            DieKind::D8 => 32.0,
            DieKind::D10 => 32.0,
            DieKind::D12 => 33.0,
            DieKind::D20 => 38.0,
        }
    }

    /// Fill color as 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self {
            DieKind::D4 => 0xff6b6b,  // Red
            DieKind::D6 => 0x4ecdc4,  // Teal
            DieKind::D8 => 0x45b7d1,  // Blue
            DieKind::D10 => 0xf9ca24, // Yellow
            DieKind::D12 => 0xa29bfe, // Purple
            DieKind::D20 => 0xfd79a8, // Pink
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DieKind::D4 => "d4",
            DieKind::D6 => "d6",
            DieKind::D8 => "d8",
            DieKind::D10 => "d10",
            DieKind::D12 => "d12",
            DieKind::D20 => "d20",
        }
    }
}

/// A single simulated die
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Die {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation on the table (radians, unbounded)
    pub heading: f32,
    /// Angular velocity (radians/tick)
    pub spin: f32,
    /// Set by the last tick's rest classification
    pub resting: bool,
    faces: u32,
    kind: Option<DieKind>,
    size: f32,
    result: u32,
}

impl Die {
    /// Create a motionless die. `result` is clamped into [1, faces].
    pub fn new(id: u32, faces: u32, result: u32, pos: Vec2) -> Self {
        let kind = DieKind::from_faces(faces);
        let size = kind.map_or(FALLBACK_DIE_SIZE, |k| k.size());
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            heading: 0.0,
            spin: 0.0,
            resting: false,
            faces,
            kind,
            size,
            result: result.clamp(1, faces.max(1)),
        }
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// `None` for face counts without a dedicated kind
    pub fn kind(&self) -> Option<DieKind> {
        self.kind
    }

    /// Extent on the table
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Radius of the circular collision proxy
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Face value rolled at creation
    pub fn result(&self) -> u32 {
        self.result
    }

    pub fn color(&self) -> u32 {
        self.kind.map_or(FALLBACK_DIE_COLOR, |k| k.color())
    }

    /// Label such as "d6", or "d7" for face counts without a kind
    pub fn label(&self) -> String {
        match self.kind {
            Some(kind) => kind.label().to_string(),
            None => format!("d{}", self.faces),
        }
    }

    /// Instantaneous rest test against the given thresholds
    #[inline]
    pub fn is_below(&self, stable_speed: f32, stable_spin: f32) -> bool {
        self.vel.length() <= stable_speed && self.spin.abs() <= stable_spin
    }
}

/// Axis-aligned arena, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

impl Bounds {
    /// Negative sizes are clamped to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lookup_round_trips_faces() {
        for kind in DieKind::ALL {
            assert_eq!(DieKind::from_faces(kind.faces()), Some(kind));
        }
        assert_eq!(DieKind::from_faces(7), None);
    }

    #[test]
    fn test_unknown_faces_fall_back() {
        let die = Die::new(1, 7, 3, Vec2::ZERO);
        assert_eq!(die.kind(), None);
        assert_eq!(die.size(), FALLBACK_DIE_SIZE);
        assert_eq!(die.color(), FALLBACK_DIE_COLOR);
        assert_eq!(die.label(), "d7");
        assert_eq!(die.result(), 3);
    }

    #[test]
    fn test_result_clamped_into_face_range() {
        assert_eq!(Die::new(1, 6, 0, Vec2::ZERO).result(), 1);
        assert_eq!(Die::new(1, 6, 9, Vec2::ZERO).result(), 6);
        assert_eq!(Die::new(1, 0, 5, Vec2::ZERO).result(), 1);
    }

    #[test]
    fn test_d6_size_and_radius() {
        let die = Die::new(1, 6, 4, Vec2::ZERO);
        assert_eq!(die.size(), 35.0);
        assert_eq!(die.radius(), 17.5);
        assert_eq!(die.label(), "d6");
    }

    #[test]
    fn test_rest_thresholds_inclusive() {
        let mut die = Die::new(1, 6, 1, Vec2::ZERO);
        die.vel = Vec2::new(0.1, 0.0);
        die.spin = -0.01;
        assert!(die.is_below(0.1, 0.01));
        die.spin = 0.011;
        assert!(!die.is_below(0.1, 0.01));
    }

    #[test]
    fn test_bounds_clamp_negative() {
        let b = Bounds::new(-5.0, 20.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.center(), Vec2::new(0.0, 10.0));
    }
}
