//! ArcGIS feature set → GeoJSON `FeatureCollection`.
//!
//! - Spatial reference must be WKID 4326; anything else fails the whole call.
//! - Each feature converts independently (in parallel with the `rayon` feature);
//!   output order always equals input order.
//! - Rings go through `rings::assemble_polygons`; every other shape is a 1:1
//!   coordinate copy.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::arcgis::{self, FeatureSet, Position, Shape};
use crate::cfg::{ConvertCfg, REQUIRED_WKID};
use crate::error::{ConvertError, Result};
use crate::rings::{assemble_polygons, Point, Polygon, Ring};

/// Parse ArcGIS JSON and convert it.
pub fn convert(data: &[u8], cfg: &ConvertCfg) -> Result<FeatureCollection> {
    let set: FeatureSet = serde_json::from_slice(data)?;
    convert_feature_set(&set, cfg)
}

/// Parse, convert, and serialize back to a GeoJSON string.
pub fn convert_to_string(data: &[u8], cfg: &ConvertCfg, pretty: bool) -> Result<String> {
    let fc = convert(data, cfg)?;
    let out = if pretty {
        serde_json::to_string_pretty(&fc)
    } else {
        serde_json::to_string(&fc)
    };
    out.map_err(ConvertError::Output)
}

/// Convert an already parsed feature set.
pub fn convert_feature_set(set: &FeatureSet, cfg: &ConvertCfg) -> Result<FeatureCollection> {
    match set.wkid() {
        Some(REQUIRED_WKID) => {}
        found => return Err(ConvertError::UnsupportedSpatialReference { found }),
    }
    let features = map_features(&set.features, cfg)?;
    tracing::info!(
        features = features.len(),
        geometry_type = set.geometry_type.as_deref().unwrap_or("unknown"),
        "converted feature set"
    );
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn map_features(features: &[arcgis::Feature], cfg: &ConvertCfg) -> Result<Vec<Feature>> {
    let convert_one = |(idx, f): (usize, &arcgis::Feature)| {
        feature_to_feature(f, cfg).map_err(|e| {
            tracing::warn!(feature = idx, error = %e, "feature conversion failed");
            e
        })
    };

    #[cfg(feature = "rayon")]
    {
        features.par_iter().enumerate().map(convert_one).collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        features.iter().enumerate().map(convert_one).collect()
    }
}

/// Convert one feature: geometry, attributes as properties, and id.
pub fn feature_to_feature(f: &arcgis::Feature, cfg: &ConvertCfg) -> Result<Feature> {
    let geometry = match f.shape() {
        Some(shape) => shape_to_geometry(shape)?,
        None => None,
    };
    let properties = f.attributes.clone().unwrap_or_default();
    let id = resolve_id(&properties, cfg);
    Ok(Feature {
        bbox: None,
        geometry,
        id,
        properties: Some(properties),
        foreign_members: None,
    })
}

/// First of the configured id keys present in `attributes`.
///
/// A present key ends the search even if its value cannot be an id
/// (GeoJSON ids are strings or numbers only).
fn resolve_id(attributes: &JsonObject, cfg: &ConvertCfg) -> Option<Id> {
    let value = cfg.id_keys().find_map(|k| attributes.get(k))?;
    match value {
        serde_json::Value::String(s) => Some(Id::String(s.clone())),
        serde_json::Value::Number(n) => Some(Id::Number(n.clone())),
        _ => None,
    }
}

fn shape_to_geometry(shape: Shape<'_>) -> Result<Option<Geometry>> {
    match shape {
        Shape::Point { x, y } => Ok(Some(Geometry::new(Value::Point(vec![x, y])))),
        Shape::Points(points) => points_to_geometry(points),
        Shape::Paths(paths) => paths_to_geometry(paths),
        Shape::Rings(rings) => rings_to_geometry(rings),
        Shape::Envelope {
            xmin,
            ymin,
            xmax,
            ymax,
        } => Ok(Some(envelope_to_geometry(xmin, ymin, xmax, ymax))),
    }
}

fn position(p: &[f64]) -> Result<Vec<f64>> {
    match p {
        [x, y, ..] => Ok(vec![*x, *y]),
        _ => Err(ConvertError::InvalidPosition { len: p.len() }),
    }
}

fn positions(ps: &[Position]) -> Result<Vec<Vec<f64>>> {
    ps.iter().map(|p| position(p)).collect()
}

fn ring_points(ps: &[Position]) -> Result<Ring> {
    ps.iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok(Point::new(*x, *y)),
            _ => Err(ConvertError::InvalidPosition { len: p.len() }),
        })
        .collect()
}

/// 1 point → `Point`, more → `MultiPoint`.
pub fn points_to_geometry(points: &[Position]) -> Result<Option<Geometry>> {
    let value = match points {
        [] => return Ok(None),
        [p] => Value::Point(position(p)?),
        _ => Value::MultiPoint(positions(points)?),
    };
    Ok(Some(Geometry::new(value)))
}

/// 1 path → `LineString`, more → `MultiLineString`.
pub fn paths_to_geometry(paths: &[Vec<Position>]) -> Result<Option<Geometry>> {
    let value = match paths {
        [] => return Ok(None),
        [path] => Value::LineString(positions(path)?),
        _ => Value::MultiLineString(
            paths
                .iter()
                .map(|p| positions(p))
                .collect::<Result<Vec<_>>>()?,
        ),
    };
    Ok(Some(Geometry::new(value)))
}

/// Assemble untagged rings into `Polygon`/`MultiPolygon`; `None` when every
/// ring was degenerate.
pub fn rings_to_geometry(rings: &[Vec<Position>]) -> Result<Option<Geometry>> {
    let rings = rings
        .iter()
        .map(|r| ring_points(r))
        .collect::<Result<Vec<_>>>()?;
    Ok(polygons_to_geometry(assemble_polygons(&rings)))
}

/// 0 → `None`, 1 → `Polygon`, more → `MultiPolygon` in list order.
pub fn polygons_to_geometry(polygons: Vec<Polygon>) -> Option<Geometry> {
    let mut coords: Vec<Vec<Vec<Vec<f64>>>> =
        polygons.into_iter().map(polygon_coordinates).collect();
    let value = match coords.len() {
        0 => return None,
        1 => Value::Polygon(coords.remove(0)),
        _ => Value::MultiPolygon(coords),
    };
    Some(Geometry::new(value))
}

fn polygon_coordinates(polygon: Polygon) -> Vec<Vec<Vec<f64>>> {
    polygon
        .into_rings()
        .into_iter()
        .map(|ring| ring.iter().map(|p| vec![p.x, p.y]).collect())
        .collect()
}

/// Envelope as a closed counter-clockwise rectangle starting at `(xmax, ymax)`.
pub fn envelope_to_geometry(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Geometry {
    let ring = vec![
        vec![xmax, ymax],
        vec![xmin, ymax],
        vec![xmin, ymin],
        vec![xmax, ymin],
        vec![xmax, ymax],
    ];
    Geometry::new(Value::Polygon(vec![ring]))
}
