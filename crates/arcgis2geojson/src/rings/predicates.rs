//! Exact geometric predicates on rings.
//!
//! - `close_ring`, `is_clockwise`: normalization and winding.
//! - `segments_intersect`, `rings_intersect`: parametric crossing tests.
//! - `contains_point`, `contains_ring`: even-odd containment.
//!
//! No tolerances: equal means bit-equal, parallel means a zero denominator.

use super::types::{Point, Ring};

/// Exact per-coordinate equality.
#[inline]
pub fn points_equal(a: &Point, b: &Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Copy of `ring` with the first point appended when first != last.
pub fn close_ring(ring: &[Point]) -> Ring {
    let mut out = ring.to_vec();
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if !points_equal(first, last) {
            out.push(*first);
        }
    }
    out
}

/// Signed sum `Σ (x2-x1)(y2+y1)` over consecutive vertices.
#[inline]
pub(super) fn winding_sum(ring: &[Point]) -> f64 {
    ring.windows(2)
        .fold(0.0, |acc, w| acc + (w[1].x - w[0].x) * (w[1].y + w[0].y))
}

/// Clockwise when the signed sum is `>= 0`; collinear (zero-area) rings are clockwise.
#[inline]
pub fn is_clockwise(ring: &[Point]) -> bool {
    winding_sum(ring) >= 0.0
}

/// Proper parametric crossing of segments `a1a2` and `b1b2` (both parameters in `[0, 1]`).
///
/// Parallel segments (zero denominator) never intersect, collinear overlap included.
pub fn segments_intersect(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> bool {
    let ua_t = (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x);
    let ub_t = (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x);
    let u_b = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if u_b == 0.0 {
        return false;
    }
    let ua = ua_t / u_b;
    let ub = ub_t / u_b;
    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Any consecutive-vertex edge of `a` crosses any edge of `b`.
///
/// Only explicit edges are tested; closed rings carry their closing edge.
pub fn rings_intersect(a: &[Point], b: &[Point]) -> bool {
    a.windows(2).any(|ea| {
        b.windows(2)
            .any(|eb| segments_intersect(&ea[0], &ea[1], &eb[0], &eb[1]))
    })
}

/// Even-odd (crossing number) point-in-ring test.
///
/// Points exactly on an edge get whatever the ray walk yields.
pub fn contains_point(ring: &[Point], p: &Point) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }
    let mut contains = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&ring[i], &ring[j]);
        let straddles = (pi.y <= p.y && p.y < pj.y) || (pj.y <= p.y && p.y < pi.y);
        if straddles && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x {
            contains = !contains;
        }
        j = i;
    }
    contains
}

/// `outer` contains `inner`: no edge crossings and `inner`'s first point is inside.
pub fn contains_ring(outer: &[Point], inner: &[Point]) -> bool {
    let Some(first) = inner.first() else {
        return false;
    };
    !rings_intersect(outer, inner) && contains_point(outer, first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn close_ring_appends_first_point_once() {
        let open = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let closed = close_ring(&open);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[3], open[0]);
        assert_eq!(open.len(), 3, "input must not be mutated");
        assert_eq!(close_ring(&closed), closed);
        assert!(close_ring(&[]).is_empty());
    }

    #[test]
    fn winding_of_unit_squares() {
        // up, right, down: clockwise with y pointing up
        let cw = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let mut ccw = cw.clone();
        ccw.reverse();
        assert!(is_clockwise(&cw));
        assert!(!is_clockwise(&ccw));
    }

    #[test]
    fn collinear_ring_counts_as_clockwise() {
        let flat = ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
        assert!(is_clockwise(&flat));
        let mut rev = flat.clone();
        rev.reverse();
        assert!(is_clockwise(&rev));
    }

    #[test]
    fn segments_cross_and_touch() {
        let p = |x, y| Point::new(x, y);
        assert!(segments_intersect(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0)));
        // shared endpoint counts (parameters 0 and 1 are inclusive)
        assert!(segments_intersect(&p(0.0, 0.0), &p(1.0, 1.0), &p(1.0, 1.0), &p(2.0, 0.0)));
        // disjoint
        assert!(!segments_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 2.0)));
        // collinear overlap is parallel, hence no intersection
        assert!(!segments_intersect(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0), &p(3.0, 0.0)));
    }

    #[test]
    fn point_in_square() {
        let sq = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        assert!(contains_point(&sq, &Point::new(5.0, 5.0)));
        assert!(!contains_point(&sq, &Point::new(15.0, 5.0)));
        assert!(!contains_point(&sq, &Point::new(-1.0, -1.0)));
        assert!(!contains_point(&[], &Point::new(0.0, 0.0)));
    }

    #[test]
    fn ring_containment_requires_no_crossing() {
        let outer = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let inside = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)]);
        let straddling = ring(&[(8.0, 8.0), (12.0, 8.0), (12.0, 12.0), (8.0, 12.0), (8.0, 8.0)]);
        assert!(contains_ring(&outer, &inside));
        assert!(!rings_intersect(&outer, &inside));
        assert!(contains_point(&outer, &straddling[0]));
        assert!(rings_intersect(&outer, &straddling));
        assert!(!contains_ring(&outer, &straddling));
        assert!(!contains_ring(&outer, &[]));
    }
}
