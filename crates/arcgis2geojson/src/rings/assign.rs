//! Hole assignment: containment, then intersection, then orphan promotion.
//!
//! Order policy
//! - Holes are popped LIFO (last classified hole first).
//! - Polygons are scanned from the last one to the first; the first match wins.
//! - Both rules decide ambiguous inputs; output depends on them exactly.
//!
//! Intersection pass: ArcGIS sometimes emits holes that poke through their
//! exterior by a rounding step (esri-leaflet issue #320).

use super::predicates::{contains_ring, rings_intersect};
use super::types::{Polygon, Ring};

/// How each hole was resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoleAssignment {
    /// Attached in the containment pass.
    pub contained: usize,
    /// Attached in the intersection pass.
    pub intersected: usize,
    /// Promoted to a standalone exterior.
    pub promoted: usize,
}

/// Attach every hole in `holes` (a stack) to one of `polygons`, or promote it.
///
/// Promoted holes are appended to `polygons` and take part in later
/// intersection matches.
pub fn assign_holes(polygons: &mut Vec<Polygon>, holes: Vec<Ring>) -> HoleAssignment {
    let mut stats = HoleAssignment::default();
    let uncontained = containment_pass(polygons, holes, &mut stats);
    intersection_pass(polygons, uncontained, &mut stats);
    stats
}

fn containment_pass(
    polygons: &mut [Polygon],
    mut holes: Vec<Ring>,
    stats: &mut HoleAssignment,
) -> Vec<Ring> {
    let mut uncontained = Vec::new();
    while let Some(hole) = holes.pop() {
        match polygons
            .iter()
            .rposition(|p| contains_ring(p.exterior(), &hole))
        {
            Some(idx) => {
                polygons[idx].push_hole(hole);
                stats.contained += 1;
            }
            None => uncontained.push(hole),
        }
    }
    uncontained
}

fn intersection_pass(
    polygons: &mut Vec<Polygon>,
    mut uncontained: Vec<Ring>,
    stats: &mut HoleAssignment,
) {
    while let Some(mut hole) = uncontained.pop() {
        match polygons
            .iter()
            .rposition(|p| rings_intersect(p.exterior(), &hole))
        {
            Some(idx) => {
                tracing::debug!(polygon = idx, "hole attached by intersection");
                polygons[idx].push_hole(hole);
                stats.intersected += 1;
            }
            None => {
                // serving as an exterior now: restore the input winding
                hole.reverse();
                tracing::debug!(polygon = polygons.len(), "promoting orphan hole");
                polygons.push(Polygon::new(hole));
                stats.promoted += 1;
            }
        }
    }
}
