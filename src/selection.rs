//! Dice selection: how many of each kind the next roll throws

use std::collections::BTreeMap;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_DICE;
use crate::error::SelectionError;
use crate::sim::{Bounds, Die, DieKind, spawn_die};
use crate::tuning::LaunchTuning;

/// Count of dice per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSelection {
    counts: BTreeMap<DieKind, u32>,
}

impl DiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one die. Returns false for unsupported face counts.
    pub fn add(&mut self, faces: u32) -> bool {
        self.add_many(faces, 1)
    }

    /// Add `count` dice of one kind. Returns false for unsupported face counts.
    ///
    /// The selection never holds more than `MAX_DICE` dice in total; the
    /// excess is dropped.
    pub fn add_many(&mut self, faces: u32, count: u32) -> bool {
        match DieKind::from_faces(faces) {
            Some(kind) => {
                let room = MAX_DICE.saturating_sub(self.total());
                if count > room {
                    log::warn!("Selection is capped at {} dice, dropping {}", MAX_DICE, count - room);
                }
                *self.counts.entry(kind).or_insert(0) += count.min(room);
                true
            }
            None => {
                log::warn!("Ignoring unsupported die d{}", faces);
                false
            }
        }
    }

    /// Remove one die, never going below zero
    pub fn remove(&mut self, faces: u32) {
        if let Some(kind) = DieKind::from_faces(faces) {
            if let Some(count) = self.counts.get_mut(&kind) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    self.counts.remove(&kind);
                }
            }
        }
    }

    pub fn count(&self, kind: DieKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts
            .values()
            .fold(0u32, |acc, &count| acc.saturating_add(count))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Throw every selected die, d4s first and d20s last.
    ///
    /// Ids start at 1 and follow spawn order. At most `MAX_DICE` dice are thrown.
    pub fn spawn_all<R: Rng>(&self, rng: &mut R, bounds: Bounds, launch: &LaunchTuning) -> Vec<Die> {
        let total = self.total().min(MAX_DICE);
        let mut dice = Vec::with_capacity(total as usize);
        for kind in DieKind::ALL {
            let room = total - dice.len() as u32;
            for _ in 0..self.count(kind).min(room) {
                let id = dice.len() as u32 + 1;
                dice.push(spawn_die(rng, id, kind.faces(), bounds, launch));
            }
        }
        dice
    }
}

impl FromStr for DiceSelection {
    type Err = SelectionError;

    /// Parse whitespace- or comma-separated terms like `2d6`, `d20`, `3D4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut selection = DiceSelection::new();
        let mut requested: u64 = 0;
        for term in s.split(|c: char| c.is_whitespace() || c == ',' || c == '+') {
            if term.is_empty() {
                continue;
            }
            let malformed = || SelectionError::Malformed(term.to_string());

            let lower = term.to_ascii_lowercase();
            let (count, faces) = lower.split_once('d').ok_or_else(malformed)?;
            let count = if count.is_empty() {
                1
            } else {
                count.parse::<u32>().map_err(|_| malformed())?
            };
            let faces = faces.parse::<u32>().map_err(|_| malformed())?;

            if DieKind::from_faces(faces).is_none() {
                return Err(SelectionError::UnsupportedFaces(faces));
            }
            requested += u64::from(count);
            if requested > u64::from(MAX_DICE) {
                return Err(SelectionError::TooMany(requested));
            }
            selection.add_many(faces, count);
        }
        Ok(selection)
    }
}
