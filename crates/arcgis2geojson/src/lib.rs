//! ArcGIS JSON to RFC 7946 GeoJSON conversion.
//!
//! Layout
//! - `rings`: ring assembly (winding, nesting, hole assignment). The only part
//!   with real geometric reasoning; everything else is mechanical mapping.
//! - `arcgis`: serde model of an ArcGIS REST feature set.
//! - `convert`: feature-by-feature mapping onto `geojson` types.
//! - `cfg`: conversion options and fixed constants.
//! - `error`: [`ConvertError`], the only error type surfaced by this crate.
//!
//! The ring core never fails: degenerate rings are dropped and holes without
//! an owner are promoted to exteriors. Failures are reserved for the JSON
//! boundary (malformed input, non-4326 spatial reference).

pub mod arcgis;
pub mod cfg;
pub mod convert;
pub mod error;
pub mod rings;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::ConvertCfg;
pub use convert::{convert, convert_to_string};
pub use error::{ConvertError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::ConvertCfg;
    pub use crate::convert::{convert, convert_to_string, feature_to_feature, rings_to_geometry};
    pub use crate::rings::{
        assemble_polygons, close_ring, contains_ring, flatten_multi_polygon_rings,
        is_clockwise, orient_rings, rings_intersect, Point, Polygon, Ring, Winding,
    };
    pub use nalgebra::Point2;
}
