//! Conversion options and fixed constants.
//!
//! Policy
//! - Geometric predicates are exact (no epsilon); the only tunables are about
//!   feature identity, so `ConvertCfg` stays small.

/// Spatial reference every input feature set must declare.
pub const REQUIRED_WKID: i64 = 4326;

/// Shortest closed ring that still bounds an area (closed triangle).
pub(crate) const MIN_RING_LEN: usize = 4;

/// Attribute keys tried, in order, when no explicit id attribute matches.
pub const FALLBACK_ID_KEYS: [&str; 2] = ["OBJECTID", "FID"];

/// Conversion configuration.
#[derive(Clone, Debug)]
pub struct ConvertCfg {
    /// Attribute whose value becomes the GeoJSON feature id.
    pub id_attribute: Option<String>,
    /// Keys tried after `id_attribute`.
    pub fallback_id_keys: Vec<String>,
}

impl Default for ConvertCfg {
    fn default() -> Self {
        Self {
            id_attribute: None,
            fallback_id_keys: FALLBACK_ID_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ConvertCfg {
    #[inline]
    pub fn with_id_attribute(mut self, key: impl Into<String>) -> Self {
        self.id_attribute = Some(key.into());
        self
    }

    /// Id lookup order: the explicit attribute first, then the fallbacks.
    pub(crate) fn id_keys(&self) -> impl Iterator<Item = &str> {
        self.id_attribute
            .as_deref()
            .into_iter()
            .chain(self.fallback_id_keys.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_keys_put_explicit_attribute_first() {
        let cfg = ConvertCfg::default().with_id_attribute("PIN");
        let keys: Vec<&str> = cfg.id_keys().collect();
        assert_eq!(keys, vec!["PIN", "OBJECTID", "FID"]);
        let cfg = ConvertCfg::default();
        let keys: Vec<&str> = cfg.id_keys().collect();
        assert_eq!(keys, vec!["OBJECTID", "FID"]);
    }
}
