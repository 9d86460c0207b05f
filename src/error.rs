//! Error types for Dice Dropper.
//!
//! The simulation itself never fails. These cover the edges where outside
//! input arrives: tuning files and dice notation.

use std::fmt;

/// Errors that can occur while loading or validating tuning.
#[derive(Debug)]
pub enum TuningError {
    /// Failed to read the tuning file from disk.
    Io(std::io::Error),
    /// The tuning file is not valid JSON for [`crate::Tuning`].
    Parse(serde_json::Error),
    /// A value parsed fine but is outside its allowed range.
    OutOfRange { field: &'static str, value: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "Failed to read tuning file: {}", e),
            TuningError::Parse(e) => write!(f, "Failed to parse tuning: {}", e),
            TuningError::OutOfRange { field, value } => {
                write!(f, "Tuning value {} = {} is out of range", field, value)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::OutOfRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Errors that can occur while parsing dice notation such as `"2d6 d20"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A term did not look like `[count]d<faces>`.
    Malformed(String),
    /// The face count is not one of the supported die kinds.
    UnsupportedFaces(u32),
    /// More dice than a single roll may throw.
    TooMany(u64),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::Malformed(term) => {
                write!(f, "Invalid dice term '{}', expected e.g. 2d6", term)
            }
            SelectionError::UnsupportedFaces(faces) => write!(
                f,
                "Unsupported die d{}, choose one of d4, d6, d8, d10, d12, d20",
                faces
            ),
            SelectionError::TooMany(count) => write!(
                f,
                "Too many dice ({}), a roll throws at most {}",
                count,
                crate::consts::MAX_DICE
            ),
        }
    }
}

impl std::error::Error for SelectionError {}
