//! The dice table: one roll at a time, driven by the host's frame loop
//!
//! The host calls [`DiceTable::frame`] once per animation frame and keeps
//! scheduling frames while it returns true.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::selection::DiceSelection;
use crate::sim::{Die, Simulation};
use crate::tuning::{LaunchTuning, Tuning};

/// One die's outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEntry {
    pub id: u32,
    pub label: String,
    pub faces: u32,
    pub result: u32,
}

/// Outcome of the dice currently on the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSummary {
    pub entries: Vec<RollEntry>,
    pub total: u64,
}

impl RollSummary {
    pub fn from_dice(dice: &[Die]) -> Self {
        let entries: Vec<RollEntry> = dice
            .iter()
            .map(|d| RollEntry {
                id: d.id,
                label: d.label(),
                faces: d.faces(),
                result: d.result(),
            })
            .collect();
        let total = entries.iter().map(|e| e.result as u64).sum();
        Self { entries, total }
    }
}

/// Selection, RNG and simulation for a single play surface
#[derive(Debug, Clone)]
pub struct DiceTable {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    selection: DiceSelection,
    sim: Simulation,
    launch: LaunchTuning,
    rolling: bool,
}

impl DiceTable {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            selection: DiceSelection::new(),
            sim: Simulation::new(tuning.physics),
            launch: tuning.launch,
            rolling: false,
        }
    }

    /// Forward the host surface size to the simulation
    pub fn resize(&mut self, width: f32, height: f32) {
        self.sim.set_bounds(width, height);
    }

    pub fn selection(&self) -> &DiceSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut DiceSelection {
        &mut self.selection
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn dice(&self) -> &[Die] {
        self.sim.dice()
    }

    /// Whether there is anything on the table worth exporting
    pub fn has_dice(&self) -> bool {
        !self.sim.dice().is_empty()
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Throw the selected dice.
    ///
    /// Ignored (returns false) while a roll is in progress or when nothing is
    /// selected. The previous roll's dice are discarded.
    pub fn roll(&mut self) -> bool {
        if self.rolling {
            log::debug!("Roll ignored: dice still moving");
            return false;
        }
        if self.selection.is_empty() {
            log::debug!("Roll ignored: no dice selected");
            return false;
        }

        let dice = self
            .selection
            .spawn_all(&mut self.rng, self.sim.bounds(), &self.launch);
        log::debug!("Rolling {} dice", dice.len());
        self.sim.load(dice);
        self.rolling = true;
        true
    }

    /// Advance the current roll by one tick.
    ///
    /// Returns true while the host should schedule another frame.
    pub fn frame(&mut self) -> bool {
        if !self.rolling {
            return false;
        }
        if !self.sim.step() {
            self.rolling = false;
            log::info!("Roll finished: total {}", self.summary().total);
        }
        self.rolling
    }

    /// Drive the current roll to rest synchronously.
    ///
    /// Returns the number of ticks taken, or `None` if the roll was still
    /// moving after `max_ticks`.
    pub fn run_to_rest(&mut self, max_ticks: u32) -> Option<u32> {
        let mut ticks = 0;
        while self.rolling {
            if ticks >= max_ticks {
                log::warn!("Roll still moving after {} ticks", max_ticks);
                return None;
            }
            self.frame();
            ticks += 1;
        }
        Some(ticks)
    }

    /// Reset the selection, drop every die and stop any roll in progress
    pub fn clear_all(&mut self) {
        self.selection.clear();
        self.sim.clear();
        self.rolling = false;
    }

    pub fn summary(&self) -> RollSummary {
        RollSummary::from_dice(self.sim.dice())
    }
}
