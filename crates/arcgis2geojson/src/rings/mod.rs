//! Ring assembly: from an untagged ArcGIS ring set to nested, wound polygons.
//!
//! Purpose
//! - ArcGIS encodes polygons and multipolygons as one flat list of closed rings
//!   with no outer/hole tagging. This module decides which rings are
//!   exteriors, which are holes, and which hole belongs to which exterior.
//!
//! Pipeline (one way, no state across calls)
//! - `classify`: close, drop degenerate, split by winding (both kinds reversed).
//! - `assign`: containment pass, then intersection pass, then orphan promotion.
//! - `assemble`: `assemble_polygons`, the entry point.
//!
//! Conventions
//! - Winding uses the signed sum `Σ (x2-x1)(y2+y1)`; `>= 0` is clockwise.
//! - ArcGIS exteriors are clockwise. Output exteriors are the reversed input
//!   (counter-clockwise, RFC 7946), holes the reversed input likewise.
//! - All predicates are exact; there is no epsilon anywhere in this module.
//!
//! Code cross-refs: `Polygon`, `Winding`, `contains_ring`, `rings_intersect`

mod assemble;
mod assign;
mod classify;
pub mod orient;
mod predicates;
pub mod rand;
mod types;

pub use assemble::assemble_polygons;
pub use assign::{assign_holes, HoleAssignment};
pub use classify::{classify_rings, ClassifiedRings};
pub use orient::{flatten_multi_polygon_rings, orient_rings};
pub use predicates::{
    close_ring, contains_point, contains_ring, is_clockwise, points_equal, rings_intersect,
    segments_intersect,
};
pub use types::{Point, Polygon, Ring, Winding};
