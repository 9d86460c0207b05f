//! Fixed-step simulation engine
//!
//! One call to [`Simulation::step`] advances every die by one tick. The host
//! decides how often to call it and stops once the table has settled.

use super::collision::{contain_in_bounds, resolve_pair};
use super::state::{Bounds, Die};
use crate::tuning::PhysicsTuning;

/// Owns the dice of the current roll and decides when they have come to rest
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    bounds: Bounds,
    dice: Vec<Die>,
    tuning: PhysicsTuning,
    /// Consecutive ticks in which every die was resting
    stable_ticks: u32,
    /// Ticks since the last load/clear
    time_ticks: u64,
}

impl Simulation {
    pub fn new(tuning: PhysicsTuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Resize the arena. Dice outside the new bounds are pulled back in on
    /// the next tick.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }

    /// Replace the active dice and restart settle tracking
    pub fn load(&mut self, dice: Vec<Die>) {
        log::debug!("Loading {} dice", dice.len());
        self.dice = dice;
        self.stable_ticks = 0;
        self.time_ticks = 0;
    }

    /// Drop all dice and restart settle tracking
    pub fn clear(&mut self) {
        log::debug!("Clearing {} dice", self.dice.len());
        self.dice.clear();
        self.stable_ticks = 0;
        self.time_ticks = 0;
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn stable_ticks(&self) -> u32 {
        self.stable_ticks
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// True once every die has been resting for the required number of
    /// consecutive ticks. An empty table counts as resting every tick.
    pub fn is_settled(&self) -> bool {
        self.stable_ticks >= self.tuning.required_stable_ticks
    }

    /// Advance one tick. Returns true while the table is still active.
    pub fn step(&mut self) -> bool {
        let tuning = &self.tuning;
        let bounds = self.bounds;
        let mut all_resting = true;

        for die in &mut self.dice {
            // Sliding friction, then explicit Euler with a unit tick
            die.vel *= tuning.friction;
            die.pos += die.vel;

            die.heading += die.spin;
            die.spin *= tuning.rotation_damping;

            let hits = contain_in_bounds(die, bounds, tuning.bounce_damping);
            if hits.any() {
                log::trace!("Die {} hit edge {:?}", die.id, hits);
            }

            die.resting = die.is_below(tuning.stable_speed, tuning.stable_spin);
            all_resting &= die.resting;
        }

        // Single pass over every unordered pair, no iteration to convergence
        for i in 0..self.dice.len() {
            let (head, tail) = self.dice.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if let Some(contact) = resolve_pair(a, b, tuning.restitution) {
                    log::trace!(
                        "Dice {} and {} collided (depth {:.2})",
                        a.id,
                        b.id,
                        contact.penetration
                    );
                }
            }
        }

        self.time_ticks += 1;
        if all_resting {
            self.stable_ticks = self.stable_ticks.saturating_add(1);
            if self.stable_ticks == tuning.required_stable_ticks {
                log::info!(
                    "{} dice settled after {} ticks",
                    self.dice.len(),
                    self.time_ticks
                );
            }
        } else {
            self.stable_ticks = 0;
        }

        !self.is_settled()
    }
}
