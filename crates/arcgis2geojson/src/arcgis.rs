//! Serde model of an ArcGIS REST feature set (`f=json` query output).
//!
//! Only what the conversion reads is typed; unknown members are ignored.
//! Geometry members may sit inside `geometry` or directly on the feature, so
//! [`Feature`] carries both.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `[x, y]` or `[x, y, z, m]`; only the first two ordinates are used.
pub type Position = Vec<f64>;

/// Top-level feature set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    #[serde(default)]
    pub display_field_name: Option<String>,
    #[serde(default)]
    pub field_aliases: Map<String, Value>,
    #[serde(default)]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub spatial_reference: Option<SpatialReference>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureSet {
    /// `wkid`, falling back to `latestWkid`.
    pub fn wkid(&self) -> Option<i64> {
        let sr = self.spatial_reference.as_ref()?;
        sr.wkid.or(sr.latest_wkid)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReference {
    #[serde(default)]
    pub wkid: Option<i64>,
    #[serde(default)]
    pub latest_wkid: Option<i64>,
}

/// Field schema entry.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub length: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(flatten)]
    pub inline: Geometry,
}

/// Every geometry shape ArcGIS emits, flattened into one bag of optionals.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Geometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Position>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Vec<Position>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rings: Option<Vec<Vec<Position>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ymin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ymax: Option<f64>,
}

/// The one shape a geometry bag resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'a> {
    Point { x: f64, y: f64 },
    Points(&'a [Position]),
    Paths(&'a [Vec<Position>]),
    Rings(&'a [Vec<Position>]),
    Envelope { xmin: f64, ymin: f64, xmax: f64, ymax: f64 },
}

impl Geometry {
    /// Highest-precedence shape present: envelope, rings, paths, points, x/y.
    ///
    /// Empty arrays count as absent.
    pub fn shape(&self) -> Option<Shape<'_>> {
        if let (Some(xmin), Some(ymin), Some(xmax), Some(ymax)) =
            (self.xmin, self.ymin, self.xmax, self.ymax)
        {
            return Some(Shape::Envelope {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        if let Some(rings) = self.rings.as_deref().filter(|r| !r.is_empty()) {
            return Some(Shape::Rings(rings));
        }
        if let Some(paths) = self.paths.as_deref().filter(|p| !p.is_empty()) {
            return Some(Shape::Paths(paths));
        }
        if let Some(points) = self.points.as_deref().filter(|p| !p.is_empty()) {
            return Some(Shape::Points(points));
        }
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Shape::Point { x, y }),
            _ => None,
        }
    }

    fn rank(shape: &Shape<'_>) -> u8 {
        match shape {
            Shape::Point { .. } => 0,
            Shape::Points(_) => 1,
            Shape::Paths(_) => 2,
            Shape::Rings(_) => 3,
            Shape::Envelope { .. } => 4,
        }
    }
}

impl Feature {
    /// Shape to convert: the higher-ranked of the `geometry` object and the
    /// inline members, the `geometry` object winning ties.
    pub fn shape(&self) -> Option<Shape<'_>> {
        let nested = self.geometry.as_ref().and_then(Geometry::shape);
        let inline = self.inline.shape();
        match (nested, inline) {
            (Some(n), Some(i)) if Geometry::rank(&i) > Geometry::rank(&n) => Some(i),
            (Some(n), _) => Some(n),
            (None, i) => i,
        }
    }
}
