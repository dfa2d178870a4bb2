use super::assign::assign_holes;
use super::classify::{classify_rings, ClassifiedRings};
use super::types::{Point, Polygon};

/// Assemble an untagged ArcGIS ring set into polygons.
///
/// Returns polygons in classification order, followed by promoted orphan
/// holes. Empty or fully degenerate input yields an empty list.
pub fn assemble_polygons<R: AsRef<[Point]>>(rings: &[R]) -> Vec<Polygon> {
    let ClassifiedRings {
        mut polygons,
        holes,
        dropped,
    } = classify_rings(rings);
    let stats = assign_holes(&mut polygons, holes);
    tracing::debug!(
        rings = rings.len(),
        dropped,
        polygons = polygons.len(),
        contained = stats.contained,
        intersected = stats.intersected,
        promoted = stats.promoted,
        "assembled polygons"
    );
    polygons
}
