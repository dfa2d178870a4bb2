//! Split an untagged ring set into exterior polygons and hole candidates.

use super::predicates::close_ring;
use super::types::{Point, Polygon, Ring, Winding};
use crate::cfg::MIN_RING_LEN;

/// Output of [`classify_rings`].
#[derive(Clone, Debug, Default)]
pub struct ClassifiedRings {
    /// One single-ring polygon per clockwise input ring, in input order.
    pub polygons: Vec<Polygon>,
    /// Counter-clockwise input rings, reversed; used as a LIFO stack.
    pub holes: Vec<Ring>,
    /// Rings shorter than a closed triangle after closing.
    pub dropped: usize,
}

/// Close each ring, drop degenerate ones, and bucket the rest by winding.
///
/// Both buckets store the reversed ring: clockwise ArcGIS exteriors become
/// counter-clockwise GeoJSON exteriors and vice versa for holes.
pub fn classify_rings<R: AsRef<[Point]>>(rings: &[R]) -> ClassifiedRings {
    let mut out = ClassifiedRings::default();
    for (idx, raw) in rings.iter().enumerate() {
        let mut ring = close_ring(raw.as_ref());
        if ring.len() < MIN_RING_LEN {
            tracing::debug!(ring = idx, len = ring.len(), "dropping degenerate ring");
            out.dropped += 1;
            continue;
        }
        let winding = Winding::of(&ring);
        ring.reverse();
        match winding {
            Winding::Clockwise => out.polygons.push(Polygon::new(ring)),
            Winding::CounterClockwise => out.holes.push(ring),
        }
    }
    out
}
