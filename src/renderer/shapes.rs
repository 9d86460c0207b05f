//! Shape generation for dice
//!
//! Each kind has its own outline, drawn in die-local space with the die's
//! center at the origin, then rotated by heading and moved to its position.
//! The outline is cosmetic; physics always uses the circle.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors, rgba};
use crate::rotate;
use crate::sim::{Bounds, Die, DieKind};

/// Local offset of the drop shadow
const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);

/// Regular polygon with its first corner on the +x axis
pub fn regular_polygon(sides: u32, radius: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let theta = (i as f32 / sides as f32) * 2.0 * PI;
            Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Outline of a die in local space. Kinds without their own shape are drawn
/// as a d6 square.
pub fn local_outline(kind: Option<DieKind>, size: f32) -> Vec<Vec2> {
    let h = size / 2.0;
    match kind {
        Some(DieKind::D4) => vec![Vec2::new(0.0, -h), Vec2::new(-h, h), Vec2::new(h, h)],
        Some(DieKind::D8) => regular_polygon(8, h),
        Some(DieKind::D10) => vec![
            Vec2::new(0.0, -h),
            Vec2::new(size / 3.0, 0.0),
            Vec2::new(0.0, h),
            Vec2::new(-size / 3.0, 0.0),
        ],
        Some(DieKind::D12) => regular_polygon(12, h),
        Some(DieKind::D20) => regular_polygon(20, h),
        Some(DieKind::D6) | None => vec![
            Vec2::new(-h, -h),
            Vec2::new(h, -h),
            Vec2::new(h, h),
            Vec2::new(-h, h),
        ],
    }
}

/// Local outline moved into table space
pub fn world_outline(die: &Die) -> Vec<Vec2> {
    local_outline(die.kind(), die.size())
        .into_iter()
        .map(|p| die.pos + rotate(p, die.heading))
        .collect()
}

/// Triangle fan over a convex polygon
fn fan(points: &[Vec2], color: [f32; 4], vertices: &mut Vec<Vertex>) {
    if points.len() < 3 {
        return;
    }
    let p0 = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(p0.x, p0.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
}

/// Filled die with its drop shadow underneath (triangle list)
pub fn die_fill(die: &Die) -> Vec<Vertex> {
    let local = local_outline(die.kind(), die.size());
    let mut vertices = Vec::with_capacity(local.len().saturating_sub(2) * 6);

    // Shadow offset is in die space, so it turns with the die
    let shadow: Vec<Vec2> = local
        .iter()
        .map(|&p| die.pos + rotate(p + SHADOW_OFFSET, die.heading))
        .collect();
    fan(&shadow, colors::SHADOW, &mut vertices);

    let body: Vec<Vec2> = local
        .iter()
        .map(|&p| die.pos + rotate(p, die.heading))
        .collect();
    fan(&body, rgba(die.color(), 1.0), &mut vertices);

    vertices
}

/// Closed outline as a line list
pub fn die_outline(die: &Die) -> Vec<Vertex> {
    let points = world_outline(die);
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(a.x, a.y, colors::OUTLINE));
        vertices.push(Vertex::new(b.x, b.y, colors::OUTLINE));
    }
    vertices
}

/// Table background followed by every die, in draw order (triangle list)
pub fn table_fill(bounds: Bounds, dice: &[Die]) -> Vec<Vertex> {
    let (w, h) = (bounds.width, bounds.height);
    let color = colors::TABLE;
    let mut vertices = vec![
        Vertex::new(0.0, 0.0, color),
        Vertex::new(w, 0.0, color),
        Vertex::new(w, h, color),
        Vertex::new(0.0, 0.0, color),
        Vertex::new(w, h, color),
        Vertex::new(0.0, h, color),
    ];
    for die in dice {
        vertices.extend(die_fill(die));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_corner_counts() {
        let counts: Vec<usize> = DieKind::ALL
            .iter()
            .map(|k| local_outline(Some(*k), k.size()).len())
            .collect();
        assert_eq!(counts, vec![3, 4, 8, 4, 12, 20]);
        assert_eq!(local_outline(None, 35.0).len(), 4);
    }

    #[test]
    fn test_outline_fits_collision_circle() {
        // Polygons sit on the circle; the square and triangle corners reach past it
        for k in [DieKind::D8, DieKind::D12, DieKind::D20] {
            for p in local_outline(Some(k), k.size()) {
                assert!((p.length() - k.size() / 2.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_world_outline_rotates_and_translates() {
        let mut die = Die::new(1, 6, 1, Vec2::new(100.0, 50.0));
        die.heading = PI / 2.0;
        let points = world_outline(&die);
        // (-h, -h) rotated a quarter turn becomes (h, -h)
        assert!((points[0] - Vec2::new(117.5, 32.5)).length() < 1e-4);
    }

    #[test]
    fn test_die_fill_has_shadow_then_body() {
        let die = Die::new(1, 4, 2, Vec2::new(10.0, 10.0));
        let verts = die_fill(&die);
        // Triangle: one fan triangle for the shadow, one for the body
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].color, colors::SHADOW);
        assert_eq!(verts[3].color, rgba(0xff6b6b, 1.0));
        assert_eq!(verts[3].position, [10.0, -5.0]);
        assert_eq!(verts[0].position, [12.0, -3.0]);
    }

    #[test]
    fn test_die_outline_closes() {
        let die = Die::new(1, 10, 2, Vec2::ZERO);
        let verts = die_outline(&die);
        assert_eq!(verts.len(), 8);
        assert_eq!(verts.last().map(|v| v.position), Some(verts[0].position));
    }

    #[test]
    fn test_table_fill_background_first() {
        let dice = vec![Die::new(1, 20, 5, Vec2::new(50.0, 50.0))];
        let verts = table_fill(Bounds::new(200.0, 100.0), &dice);
        assert_eq!(verts[0].color, colors::TABLE);
        assert_eq!(verts[2].position, [200.0, 100.0]);
        // 6 background + 18 triangles * 3 for shadow and body
        assert_eq!(verts.len(), 6 + 2 * 18 * 3);
    }
}
