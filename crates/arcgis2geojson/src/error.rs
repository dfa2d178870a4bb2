//! Defines [`ConvertError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// Input was not a parseable ArcGIS feature set.
    #[error("invalid ArcGIS JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Spatial reference other than WKID 4326, or none at all.
    #[error("ArcGIS features must be in wkid 4326 for valid conversion to GeoJSON (found {found:?})")]
    UnsupportedSpatialReference { found: Option<i64> },

    /// A coordinate array with fewer than two ordinates.
    #[error("position needs at least two ordinates, found {len}")]
    InvalidPosition { len: usize },

    /// Serializing the GeoJSON output failed.
    #[error("failed to write GeoJSON: {0}")]
    Output(#[source] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ConvertError>;
