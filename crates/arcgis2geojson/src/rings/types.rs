//! Basic ring types.
//!
//! - `Point`, `Ring`: plain coordinates, value equality only.
//! - `Winding`: derived on demand, never stored (rings get reversed in flight).
//! - `Polygon`: one exterior plus holes.

use nalgebra::Point2;

use super::predicates::is_clockwise;

/// A 2D position `(x, y)`.
pub type Point = Point2<f64>;

/// Ordered positions; closed (first == last) once normalized.
pub type Ring = Vec<Point>;

/// Rotational direction of a ring's vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Winding of `ring`; a zero signed sum counts as clockwise.
    #[inline]
    pub fn of(ring: &[Point]) -> Self {
        if is_clockwise(ring) {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

/// Exterior ring followed by zero or more holes.
///
/// Invariants:
/// - Exactly one exterior, always at index 0.
/// - Holes are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    #[inline]
    pub fn new(exterior: Ring) -> Self {
        Self {
            rings: vec![exterior],
        }
    }

    #[inline]
    pub fn exterior(&self) -> &Ring {
        &self.rings[0]
    }

    #[inline]
    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }

    #[inline]
    pub fn push_hole(&mut self, hole: Ring) {
        self.rings.push(hole);
    }

    /// All rings, exterior first.
    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    #[inline]
    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }
}
