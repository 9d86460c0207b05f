//! Collision detection and response
//!
//! Every die is treated as a circle of diameter `size`, whatever polygon the
//! renderer draws for it. Edges are axis-aligned and handled one at a time.

use glam::Vec2;

use super::state::{Bounds, Die};

/// Edges a die was pushed back from during containment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeHits {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeHits {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Keep a die inside the arena.
///
/// Edges are checked top, bottom, left, right. Each crossed edge clamps the
/// position back inside and reflects the perpendicular velocity scaled by
/// `bounce_damping`. A die past a corner gets both corrections.
pub fn contain_in_bounds(die: &mut Die, bounds: Bounds, bounce_damping: f32) -> EdgeHits {
    let half = die.radius();
    let mut hits = EdgeHits::default();

    if die.pos.y - half < 0.0 {
        die.pos.y = half;
        die.vel.y *= -bounce_damping;
        hits.top = true;
    }

    if die.pos.y + half > bounds.height {
        die.pos.y = bounds.height - half;
        die.vel.y *= -bounce_damping;
        hits.bottom = true;
    }

    if die.pos.x - half < 0.0 {
        die.pos.x = half;
        die.vel.x *= -bounce_damping;
        hits.left = true;
    }

    if die.pos.x + half > bounds.width {
        die.pos.x = bounds.width - half;
        die.vel.x *= -bounce_damping;
        hits.right = true;
    }

    hits
}

/// Overlap between two dice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first die's center toward the second's
    pub normal: Vec2,
    /// How far the circles overlap
    pub penetration: f32,
}

/// Check whether two dice overlap.
///
/// Coincident centers report no contact, since there is no normal to push along.
pub fn die_die_contact(a: &Die, b: &Die) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance < min_distance && distance > 0.0 {
        Some(Contact {
            normal: delta / distance,
            penetration: min_distance - distance,
        })
    } else {
        None
    }
}

/// Separate two overlapping dice and exchange an impulse if they approach.
///
/// Each die moves half the overlap along the contact normal (all dice weigh
/// the same). The impulse is only applied while the dice close on each other.
pub fn resolve_pair(a: &mut Die, b: &mut Die, restitution: f32) -> Option<Contact> {
    let contact = die_die_contact(a, b)?;
    let n = contact.normal;

    let correction = n * (contact.penetration / 2.0);
    a.pos -= correction;
    b.pos += correction;

    let closing = (b.vel - a.vel).dot(n);
    if closing < 0.0 {
        let impulse = n * (closing * restitution);
        a.vel += impulse;
        b.vel -= impulse;
    }

    Some(contact)
}
