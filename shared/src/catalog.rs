use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::coords::MapBounds;

/// Static configuration for one named map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    /// Human-readable map name shown in the list and the page title.
    pub locale: String,
    pub background_color: String,
    pub bounds: MapBounds,
}

/// All maps the viewer knows about, keyed by the name used in `/map/{name}`, in the
/// order the catalog document lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapCatalog {
    maps: IndexMap<String, MapInfo>,
}

impl MapCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let maps: IndexMap<String, MapInfo> = serde_json::from_str(json)?;
        Ok(Self { maps })
    }

    pub fn get(&self, name: &str) -> Option<&MapInfo> {
        self.maps.get(name)
    }

    /// Maps in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MapInfo)> {
        self.maps.iter().map(|(name, info)| (name.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::MapPoint;

    const SAMPLE: &str = r##"{
        "village": {
            "locale": "마을",
            "backgroundColor": "#1d2b1f",
            "bounds": [[1, 1], [1024, 1024]]
        },
        "capital": {
            "locale": "도성",
            "backgroundColor": "#000000",
            "bounds": [[0, 0], [2048, 1536]]
        }
    }"##;

    #[test]
    fn parses_maps_by_name() {
        let catalog = MapCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let village = catalog.get("village").unwrap();
        assert_eq!(village.locale, "마을");
        assert_eq!(village.background_color, "#1d2b1f");
        assert_eq!(village.bounds.max, MapPoint::new(1024.0, 1024.0));
        assert!(catalog.get("nowhere").is_none());
    }

    #[test]
    fn iterates_in_document_order() {
        let catalog = MapCatalog::from_json(SAMPLE).unwrap();
        let names: Vec<_> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["village", "capital"]);
    }

    #[test]
    fn rejects_missing_bounds() {
        let json = r##"{ "broken": { "locale": "x", "backgroundColor": "#fff" } }"##;
        assert!(MapCatalog::from_json(json).is_err());
    }
}
