//! Read-only view of the table handed to an external renderer each frame

use serde::{Deserialize, Serialize};

use crate::normalize_angle;
use crate::sim::Die;

/// Everything a renderer needs to draw one die
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieSnapshot {
    pub id: u32,
    pub label: String,
    pub faces: u32,
    pub x: f32,
    pub y: f32,
    /// Heading normalized to [-π, π)
    pub heading: f32,
    pub result: u32,
    pub size: f32,
    /// CSS-style color, e.g. "#4ecdc4"
    pub color: String,
    pub resting: bool,
}

impl From<&Die> for DieSnapshot {
    fn from(die: &Die) -> Self {
        Self {
            id: die.id,
            label: die.label(),
            faces: die.faces(),
            x: die.pos.x,
            y: die.pos.y,
            heading: normalize_angle(die.heading),
            result: die.result(),
            size: die.size(),
            color: format!("#{:06x}", die.color()),
            resting: die.resting,
        }
    }
}

pub fn snapshot(dice: &[Die]) -> Vec<DieSnapshot> {
    dice.iter().map(DieSnapshot::from).collect()
}
