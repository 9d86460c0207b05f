//! Data-driven physics and launch constants
//!
//! Defaults reproduce the classic table feel. A JSON file may override any
//! subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Constants used by the step engine every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Linear velocity retained per tick (sliding friction on the table)
    pub friction: f32,
    /// Fraction of perpendicular velocity kept when bouncing off an edge
    pub bounce_damping: f32,
    /// Angular velocity retained per tick
    pub rotation_damping: f32,
    /// Speed at or below which a die counts as resting
    pub stable_speed: f32,
    /// Spin at or below which a die counts as resting
    pub stable_spin: f32,
    /// Impulse scale for die-to-die collisions
    pub restitution: f32,
    /// Consecutive all-resting ticks before the table is settled
    pub required_stable_ticks: u32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            friction: 0.985,
            bounce_damping: 0.8,
            rotation_damping: 0.96,
            stable_speed: 0.1,
            stable_spin: 0.01,
            restitution: 0.8,
            required_stable_ticks: 60,
        }
    }
}

impl PhysicsTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        unit_range("physics.friction", self.friction)?;
        unit_range("physics.bounce_damping", self.bounce_damping)?;
        unit_range("physics.rotation_damping", self.rotation_damping)?;
        unit_range("physics.restitution", self.restitution)?;
        non_negative("physics.stable_speed", self.stable_speed)?;
        non_negative("physics.stable_spin", self.stable_spin)?;
        Ok(())
    }
}

/// Ranges for the randomized throw given to each new die
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTuning {
    /// Launch speed is drawn from [min_speed, max_speed)
    pub min_speed: f32,
    pub max_speed: f32,
    /// Spin is drawn from [-max_spin, max_spin)
    pub max_spin: f32,
    /// Start offset from arena center, per axis, in [-scatter, scatter)
    pub scatter: f32,
}

impl Default for LaunchTuning {
    fn default() -> Self {
        Self {
            min_speed: 8.0,
            max_speed: 20.0,
            max_spin: 0.3,
            scatter: 100.0,
        }
    }
}

impl LaunchTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        non_negative("launch.min_speed", self.min_speed)?;
        non_negative("launch.max_speed", self.max_speed)?;
        if self.max_speed <= self.min_speed || !(self.max_speed - self.min_speed).is_finite() {
            return Err(TuningError::OutOfRange {
                field: "launch.max_speed",
                value: self.max_speed,
            });
        }
        // Ranges are symmetric, so their full width must stay finite too
        non_negative("launch.max_spin", self.max_spin)?;
        finite_span("launch.max_spin", self.max_spin)?;
        non_negative("launch.scatter", self.scatter)?;
        finite_span("launch.scatter", self.scatter)?;
        Ok(())
    }
}

/// All tunable constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub launch: LaunchTuning,
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        self.physics.validate()?;
        self.launch.validate()
    }
}

fn finite_span(field: &'static str, half_width: f32) -> Result<(), TuningError> {
    if (half_width * 2.0).is_finite() {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            value: half_width,
        })
    }
}

fn unit_range(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::OutOfRange { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "physics": { "friction": 0.9 } }"#).unwrap();
        assert_eq!(tuning.physics.friction, 0.9);
        assert_eq!(tuning.physics.bounce_damping, 0.8);
        assert_eq!(tuning.physics.required_stable_ticks, 60);
        assert_eq!(tuning.launch, LaunchTuning::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        let tuning = Tuning::from_json_str("{}").unwrap();
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_rejects_energy_gaining_friction() {
        let err = Tuning::from_json_str(r#"{ "physics": { "friction": 1.2 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::OutOfRange {
                field: "physics.friction",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let err =
            Tuning::from_json_str(r#"{ "launch": { "min_speed": 10, "max_speed": 5 } }"#)
                .unwrap_err();
        assert!(matches!(
            err,
            TuningError::OutOfRange {
                field: "launch.max_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite_launch() {
        for json in [
            r#"{ "launch": { "scatter": 3e38 } }"#,
            r#"{ "launch": { "max_spin": 3e38 } }"#,
            r#"{ "launch": { "max_speed": 1e39 } }"#,
            r#"{ "launch": { "min_speed": 1e39, "max_speed": 2e39 } }"#,
            r#"{ "physics": { "stable_speed": 1e39 } }"#,
        ] {
            let err = Tuning::from_json_str(json).unwrap_err();
            assert!(matches!(err, TuningError::OutOfRange { .. }), "{}", json);
        }
    }

    #[test]
    fn test_large_finite_launch_spawns() {
        use crate::sim::{Bounds, spawn_die};
        use rand::SeedableRng;
        use rand_pcg::Pcg32;

        let tuning = Tuning::from_json_str(
            r#"{ "launch": { "scatter": 1e37, "max_spin": 1e37, "max_speed": 1e37 } }"#,
        )
        .unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let die = spawn_die(&mut rng, 1, 6, Bounds::default(), &tuning.launch);
        assert!(die.pos.is_finite());
        assert!(die.spin.is_finite());
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json_str("{ physics: }").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/dice-tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
