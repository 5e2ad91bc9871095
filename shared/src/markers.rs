//! Point-of-interest data for one map, as served from `/marker/{name}.json`.
//!
//! ```json
//! { "group": { "<group>": [ { "name": "Scroll:Old Map", "layers": [ { "position": [x, y], "popup": "..." } ] } ] } }
//! ```
//!
//! Group and item order follow the document, since that is the order toggles
//! appear in the layer control.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::coords::MapPoint;
use crate::label::{IconKey, LayerLabel};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkerSpec {
    pub position: MapPoint,
    #[serde(default)]
    pub popup: Option<String>,
}

/// One toggleable set of markers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkerItem {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub layers: Vec<MarkerSpec>,
}

impl MarkerItem {
    /// An explicit `icon` wins; otherwise `name` may carry a legacy `icon:label` prefix.
    pub fn label(&self) -> LayerLabel {
        match self.icon.as_deref() {
            Some(icon) => LayerLabel {
                icon: IconKey::from_key(icon),
                text: self.name.clone(),
            },
            None => LayerLabel::from_legacy(&self.name),
        }
    }

    /// Glyph drawn for each marker of this item.
    pub fn marker_icon(&self) -> IconKey {
        self.label().icon.unwrap_or(IconKey::Scroll)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGroup {
    pub name: String,
    pub items: Vec<MarkerItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarkerData {
    #[serde(rename = "group", default, deserialize_with = "ordered_groups")]
    pub groups: Vec<MarkerGroup>,
}

impl MarkerData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

fn ordered_groups<'de, D>(deserializer: D) -> Result<Vec<MarkerGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupsVisitor;

    impl<'de> Visitor<'de> for GroupsVisitor {
        type Value = Vec<MarkerGroup>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from group name to marker items")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, items)) = map.next_entry::<String, Vec<MarkerItem>>()? {
                groups.push(MarkerGroup { name, items });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "group": {
            "풍경": [
                { "name": "ScenicSpot:Falls", "layers": [
                    { "layer": "marker", "position": [300, 410], "popup": "Falls" }
                ] }
            ],
            "POI": [
                { "name": "Scroll:Old Map", "layers": [
                    { "layer": "marker", "position": [12, 34] },
                    { "layer": "marker", "position": [56.5, 78] }
                ] },
                { "name": "Garden", "icon": "Butterfly", "layers": [] }
            ]
        }
    }"#;

    #[test]
    fn keeps_document_order_of_groups() {
        let data = MarkerData::from_json(SAMPLE).unwrap();
        let names: Vec<_> = data.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["풍경", "POI"]);
        assert_eq!(data.item_count(), 3);
    }

    #[test]
    fn parses_marker_positions_and_popups() {
        let data = MarkerData::from_json(SAMPLE).unwrap();
        let scroll = &data.groups[1].items[0];
        assert_eq!(scroll.layers.len(), 2);
        assert_eq!(scroll.layers[1].position, MapPoint::new(56.5, 78.0));
        assert_eq!(scroll.layers[0].popup, None);
        assert_eq!(
            data.groups[0].items[0].layers[0].popup.as_deref(),
            Some("Falls")
        );
    }

    #[test]
    fn labels_prefer_explicit_icon() {
        let data = MarkerData::from_json(SAMPLE).unwrap();
        let poi = &data.groups[1].items;
        assert_eq!(
            poi[0].label(),
            LayerLabel::with_icon(IconKey::Scroll, "Old Map")
        );
        assert_eq!(
            poi[1].label(),
            LayerLabel::with_icon(IconKey::Butterfly, "Garden")
        );
        assert_eq!(poi[1].marker_icon(), IconKey::Butterfly);
    }

    #[test]
    fn plain_names_fall_back_to_scroll_markers() {
        let item = MarkerItem {
            name: "Plain Label".into(),
            icon: None,
            layers: Vec::new(),
        };
        assert_eq!(item.label(), LayerLabel::plain("Plain Label"));
        assert_eq!(item.marker_icon(), IconKey::Scroll);
    }

    #[test]
    fn missing_group_key_is_empty() {
        let data = MarkerData::from_json("{}").unwrap();
        assert!(data.is_empty());
    }
}
