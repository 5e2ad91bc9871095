use std::collections::HashMap;

use moonmap_shared::{IconKey, LayerId, LayerLabel, LayerSurface, MarkerData, MarkerSpec};

/// Key of an overlay layer stored on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerKey(usize);

/// A group of markers drawn together and shown or hidden as one.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    pub icon: IconKey,
    pub markers: Vec<MarkerSpec>,
}

/// What the layer control needs to register one overlay layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRegistration {
    pub layer: LayerKey,
    pub label: LayerLabel,
    pub group: String,
}

/// The map's overlay store. Owns every overlay layer and tracks which ones are
/// attached (drawn), in attach order.
#[derive(Debug, Default)]
pub struct MapSurface {
    layers: Vec<OverlayLayer>,
    attached: Vec<LayerKey>,
    stamps: HashMap<LayerKey, LayerId>,
    next_stamp: u64,
}

impl MapSurface {
    /// Build one attached overlay per marker item and describe how to register each.
    pub fn from_markers(data: &MarkerData) -> (Self, Vec<LayerRegistration>) {
        let mut surface = Self::default();
        let mut registrations = Vec::with_capacity(data.item_count());
        for group in &data.groups {
            for item in &group.items {
                let key = surface.insert(OverlayLayer {
                    icon: item.marker_icon(),
                    markers: item.layers.clone(),
                });
                surface.add_layer(&key);
                registrations.push(LayerRegistration {
                    layer: key,
                    label: item.label(),
                    group: group.name.clone(),
                });
            }
        }
        (surface, registrations)
    }

    pub fn insert(&mut self, layer: OverlayLayer) -> LayerKey {
        self.layers.push(layer);
        LayerKey(self.layers.len() - 1)
    }

    pub fn layer(&self, key: LayerKey) -> Option<&OverlayLayer> {
        self.layers.get(key.0)
    }

    pub fn attached_layers(&self) -> impl Iterator<Item = (LayerKey, &OverlayLayer)> {
        self.attached
            .iter()
            .filter_map(|key| self.layer(*key).map(|layer| (*key, layer)))
    }
}

impl LayerSurface for MapSurface {
    type Layer = LayerKey;

    fn stamp(&mut self, layer: &LayerKey) -> LayerId {
        let next = &mut self.next_stamp;
        *self.stamps.entry(*layer).or_insert_with(|| {
            *next += 1;
            LayerId(*next)
        })
    }

    fn has_layer(&self, layer: &LayerKey) -> bool {
        self.attached.contains(layer)
    }

    fn add_layer(&mut self, layer: &LayerKey) {
        if self.layer(*layer).is_some() && !self.has_layer(layer) {
            self.attached.push(*layer);
        }
    }

    fn remove_layer(&mut self, layer: &LayerKey) {
        self.attached.retain(|key| key != layer);
    }
}

#[cfg(test)]
mod tests {
    use moonmap_shared::{LayerRegistry, MapPoint};

    use super::*;

    fn sample() -> MarkerData {
        MarkerData::from_json(
            r#"{ "group": {
                "POI": [
                    { "name": "Scroll:Old Map", "layers": [ { "position": [10, 20] } ] },
                    { "name": "Well", "layers": [ { "position": [30, 40], "popup": "Well" } ] }
                ],
                "풍경": [
                    { "name": "ScenicSpot:Falls", "layers": [ { "position": [50, 60] } ] }
                ]
            } }"#,
        )
        .unwrap()
    }

    #[test]
    fn every_marker_item_starts_attached() {
        let (surface, registrations) = MapSurface::from_markers(&sample());
        assert_eq!(registrations.len(), 3);
        assert!(registrations.iter().all(|r| surface.has_layer(&r.layer)));
        assert_eq!(registrations[2].group, "풍경");
        assert_eq!(
            registrations[0].label,
            LayerLabel::with_icon(IconKey::Scroll, "Old Map")
        );
    }

    #[test]
    fn overlay_layers_keep_marker_specs() {
        let (surface, registrations) = MapSurface::from_markers(&sample());
        let falls = surface.layer(registrations[2].layer).unwrap();
        assert_eq!(falls.icon, IconKey::ScenicSpot);
        assert_eq!(falls.markers[0].position, MapPoint::new(50.0, 60.0));
    }

    #[test]
    fn stamps_are_stable_and_distinct() {
        let (mut surface, registrations) = MapSurface::from_markers(&sample());
        let a = surface.stamp(&registrations[0].layer);
        let b = surface.stamp(&registrations[1].layer);
        assert_ne!(a, b);
        assert_eq!(surface.stamp(&registrations[0].layer), a);
    }

    #[test]
    fn detach_and_reattach() {
        let (mut surface, registrations) = MapSurface::from_markers(&sample());
        let key = registrations[0].layer;

        surface.remove_layer(&key);
        assert!(!surface.has_layer(&key));
        assert_eq!(surface.attached_layers().count(), 2);

        surface.add_layer(&key);
        surface.add_layer(&key);
        assert_eq!(surface.attached_layers().count(), 3);
    }

    #[test]
    fn bundled_village_markers_load() {
        let data = MarkerData::from_json(include_str!("../public/marker/village.json")).unwrap();
        let (surface, registrations) = MapSurface::from_markers(&data);
        assert_eq!(registrations.len(), 4);
        assert_eq!(surface.attached_layers().count(), 4);
        assert_eq!(
            registrations[3].label,
            LayerLabel::with_icon(IconKey::Butterfly, "나비 군락")
        );
    }

    #[test]
    fn registry_toggle_drives_attachment() {
        let (mut surface, registrations) = MapSurface::from_markers(&sample());
        let mut registry = LayerRegistry::new();
        let ids: Vec<_> = registrations
            .iter()
            .map(|r| registry.register(&mut surface, &r.layer, r.label.clone(), r.group.clone()))
            .collect();
        assert!(registry.entries().iter().all(|e| e.checked));

        assert_eq!(registry.toggle(&mut surface, ids[1]), Some(false));
        let drawn: Vec<_> = surface.attached_layers().map(|(key, _)| key).collect();
        assert_eq!(drawn, [registrations[0].layer, registrations[2].layer]);
    }
}
