//! GeoJSON to ArcGIS direction: wind rings the way ArcGIS expects.
//!
//! ArcGIS wants exteriors clockwise and holes counter-clockwise, flattened into
//! a single ring list per feature.

use super::predicates::{close_ring, is_clockwise};
use super::types::Ring;
use crate::cfg::MIN_RING_LEN;

/// Orient one GeoJSON polygon (exterior first) for ArcGIS.
///
/// A degenerate exterior discards the whole polygon; degenerate holes are
/// dropped individually.
pub fn orient_rings(polygon: &[Ring]) -> Vec<Ring> {
    let Some((exterior, holes)) = polygon.split_first() else {
        return Vec::new();
    };
    let mut exterior = close_ring(exterior);
    if exterior.len() < MIN_RING_LEN {
        return Vec::new();
    }
    if !is_clockwise(&exterior) {
        exterior.reverse();
    }

    let mut out = Vec::with_capacity(polygon.len());
    out.push(exterior);
    for hole in holes {
        let mut hole = close_ring(hole);
        if hole.len() < MIN_RING_LEN {
            continue;
        }
        if is_clockwise(&hole) {
            hole.reverse();
        }
        out.push(hole);
    }
    out
}

/// Orient each polygon of a multipolygon and concatenate the rings.
pub fn flatten_multi_polygon_rings(polygons: &[Vec<Ring>]) -> Vec<Ring> {
    polygons.iter().flat_map(|p| orient_rings(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::Point;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn exterior_clockwise_holes_counter_clockwise() {
        // both given counter-clockwise and open
        let ext = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hole = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]);
        let out = orient_rings(&[ext, hole]);
        assert_eq!(out.len(), 2);
        assert!(is_clockwise(&out[0]));
        assert!(!is_clockwise(&out[1]));
        for r in &out {
            assert_eq!(r.first(), r.last());
        }
    }

    #[test]
    fn degenerate_exterior_discards_polygon() {
        let ext = ring(&[(0.0, 0.0), (1.0, 1.0)]);
        let hole = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0)]);
        assert!(orient_rings(&[ext, hole]).is_empty());
        assert!(orient_rings(&[]).is_empty());
    }

    #[test]
    fn degenerate_hole_is_dropped() {
        let ext = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let hole = ring(&[(2.0, 2.0), (4.0, 2.0)]);
        let out = orient_rings(&[ext.clone(), hole]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], close_ring(&ext));
    }

    #[test]
    fn flatten_concatenates_in_polygon_order() {
        let a = vec![ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])];
        let b = vec![ring(&[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0), (6.0, 5.0)])];
        let flat = flatten_multi_polygon_rings(&[a, b]);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0][0], Point::new(0.0, 0.0));
        assert_eq!(flat[1][0], Point::new(5.0, 5.0));
    }
}
