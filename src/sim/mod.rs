//! Dice simulation module
//!
//! Everything that moves the dice lives here. This module must stay free of
//! rendering and platform concerns:
//! - Fixed unit tick only
//! - Seeded RNG only (passed in by the caller)
//! - Stable iteration order (load order)

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contact, EdgeHits, contain_in_bounds, die_die_contact, resolve_pair};
pub use spawn::spawn_die;
pub use state::{Bounds, Die, DieKind};
pub use tick::Simulation;
