//! Overlay layer bookkeeping behind the grouped layer control.
//!
//! The registry never owns layers. It keeps a handle per layer (a cheap key into
//! whatever the rendering surface uses to store them) and mirrors each layer's
//! attachment state in `checked`. The surface is passed into every mutating call,
//! so attach/detach and the flag flip happen in the same call.

use crate::label::LayerLabel;

/// Identity assigned to a layer by [`LayerSurface::stamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// The four operations the registry needs from the rendering surface.
pub trait LayerSurface {
    type Layer;

    /// Stable identity for `layer`. Stamping the same layer again returns the same id;
    /// distinct layers never share one.
    fn stamp(&mut self, layer: &Self::Layer) -> LayerId;
    fn has_layer(&self, layer: &Self::Layer) -> bool;
    fn add_layer(&mut self, layer: &Self::Layer);
    fn remove_layer(&mut self, layer: &Self::Layer);
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry<L> {
    pub id: LayerId,
    pub layer: L,
    pub group: String,
    pub label: LayerLabel,
    pub checked: bool,
}

/// Entries sharing a group name, in registration order.
#[derive(Debug)]
pub struct LayerGroup<'a, L> {
    pub name: &'a str,
    pub entries: Vec<&'a LayerEntry<L>>,
}

#[derive(Debug, Clone)]
pub struct LayerRegistry<L> {
    entries: Vec<LayerEntry<L>>,
}

impl<L> Default for LayerRegistry<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L: Clone> LayerRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LayerEntry<L>] {
        &self.entries
    }

    pub fn get(&self, id: LayerId) -> Option<&LayerEntry<L>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Add `layer` under `group`. Registering a layer that is already known is a
    /// no-op: name, group and the current `checked` state are left untouched.
    pub fn register<S>(
        &mut self,
        surface: &mut S,
        layer: &L,
        label: impl Into<LayerLabel>,
        group: impl Into<String>,
    ) -> LayerId
    where
        S: LayerSurface<Layer = L>,
    {
        let id = surface.stamp(layer);
        if self.get(id).is_some() {
            return id;
        }

        self.entries.push(LayerEntry {
            id,
            layer: layer.clone(),
            group: group.into(),
            label: label.into(),
            checked: surface.has_layer(layer),
        });
        id
    }

    /// Attach or detach the layer behind `id` and record the new state.
    ///
    /// Returns the new `checked` value, or `None` when `id` is unknown.
    pub fn toggle<S>(&mut self, surface: &mut S, id: LayerId) -> Option<bool>
    where
        S: LayerSurface<Layer = L>,
    {
        let entry = self.entries.iter_mut().find(|entry| entry.id == id)?;
        if surface.has_layer(&entry.layer) {
            surface.remove_layer(&entry.layer);
            entry.checked = false;
        } else {
            surface.add_layer(&entry.layer);
            entry.checked = true;
        }
        Some(entry.checked)
    }

    /// Groups in order of first registration.
    pub fn by_group(&self) -> Vec<LayerGroup<'_, L>> {
        let mut groups: Vec<LayerGroup<'_, L>> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|g| g.name == entry.group) {
                Some(group) => group.entries.push(entry),
                None => groups.push(LayerGroup {
                    name: &entry.group,
                    entries: vec![entry],
                }),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::label::IconKey;

    #[derive(Default)]
    struct FakeSurface {
        stamps: HashMap<u32, LayerId>,
        next_stamp: u64,
        attached: HashSet<u32>,
        stamp_calls: usize,
    }

    impl FakeSurface {
        fn with_attached(keys: &[u32]) -> Self {
            Self {
                attached: keys.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl LayerSurface for FakeSurface {
        type Layer = u32;

        fn stamp(&mut self, layer: &u32) -> LayerId {
            self.stamp_calls += 1;
            let next = &mut self.next_stamp;
            *self.stamps.entry(*layer).or_insert_with(|| {
                *next += 1;
                LayerId(*next)
            })
        }

        fn has_layer(&self, layer: &u32) -> bool {
            self.attached.contains(layer)
        }

        fn add_layer(&mut self, layer: &u32) {
            self.attached.insert(*layer);
        }

        fn remove_layer(&mut self, layer: &u32) {
            self.attached.remove(layer);
        }
    }

    #[test]
    fn register_twice_keeps_one_entry() {
        let mut surface = FakeSurface::with_attached(&[1]);
        let mut registry = LayerRegistry::new();

        let first = registry.register(&mut surface, &1, "Scroll:Old Map", "POI");
        let before = registry.entries().to_vec();
        let second = registry.register(&mut surface, &1, "Scroll:Old Map", "POI");

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entries(), before.as_slice());
        assert_eq!(
            registry.entries()[0].label,
            LayerLabel::with_icon(IconKey::Scroll, "Old Map")
        );
    }

    #[test]
    fn register_reads_checked_from_surface() {
        let mut surface = FakeSurface::with_attached(&[1]);
        let mut registry = LayerRegistry::new();

        let shown = registry.register(&mut surface, &1, "Shown", "POI");
        let hidden = registry.register(&mut surface, &2, "Hidden", "POI");

        assert_eq!(registry.get(shown).map(|e| e.checked), Some(true));
        assert_eq!(registry.get(hidden).map(|e| e.checked), Some(false));
    }

    #[test]
    fn reregistering_does_not_reset_toggled_state() {
        let mut surface = FakeSurface::with_attached(&[1]);
        let mut registry = LayerRegistry::new();

        let id = registry.register(&mut surface, &1, "Camp", "POI");
        assert_eq!(registry.toggle(&mut surface, id), Some(false));
        registry.register(&mut surface, &1, "Camp renamed", "Other");

        let entry = registry.get(id).unwrap();
        assert!(!entry.checked);
        assert_eq!(entry.label, LayerLabel::plain("Camp"));
        assert_eq!(entry.group, "POI");
    }

    #[test]
    fn toggle_keeps_flag_and_surface_in_step() {
        let mut surface = FakeSurface::with_attached(&[7]);
        let mut registry = LayerRegistry::new();
        let id = registry.register(&mut surface, &7, "Well", "POI");

        for expected in [false, true, false, true] {
            assert_eq!(registry.toggle(&mut surface, id), Some(expected));
            assert_eq!(registry.get(id).unwrap().checked, expected);
            assert_eq!(surface.has_layer(&7), expected);
        }
    }

    #[test]
    fn toggling_twice_restores_original_state() {
        let mut surface = FakeSurface::default();
        let mut registry = LayerRegistry::new();
        let id = registry.register(&mut surface, &3, "Cave", "POI");

        registry.toggle(&mut surface, id);
        registry.toggle(&mut surface, id);

        assert!(!registry.get(id).unwrap().checked);
        assert!(!surface.has_layer(&3));
    }

    #[test]
    fn toggle_touches_only_its_entry() {
        let mut surface = FakeSurface::with_attached(&[1, 2]);
        let mut registry = LayerRegistry::new();
        let a = registry.register(&mut surface, &1, "A", "POI");
        let b = registry.register(&mut surface, &2, "B", "POI");

        registry.toggle(&mut surface, a);

        assert!(!registry.get(a).unwrap().checked);
        assert!(registry.get(b).unwrap().checked);
        assert!(surface.has_layer(&2));
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut surface = FakeSurface::with_attached(&[1]);
        let mut registry = LayerRegistry::new();
        registry.register(&mut surface, &1, "A", "POI");

        assert_eq!(registry.toggle(&mut surface, LayerId(999)), None);
        assert!(registry.entries()[0].checked);
        assert!(surface.has_layer(&1));
    }

    #[test]
    fn by_group_keeps_registration_order() {
        let mut surface = FakeSurface::default();
        let mut registry = LayerRegistry::new();
        registry.register(&mut surface, &1, "a1", "A");
        registry.register(&mut surface, &2, "b1", "B");
        registry.register(&mut surface, &3, "a2", "A");
        registry.register(&mut surface, &4, "c1", "C");

        let groups = registry.by_group();
        let names: Vec<_> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, ["A", "B", "C"]);

        let a_labels: Vec<_> = groups[0]
            .entries
            .iter()
            .map(|e| e.label.text.as_str())
            .collect();
        assert_eq!(a_labels, ["a1", "a2"]);
    }

    #[test]
    fn by_group_does_not_touch_surface() {
        let mut surface = FakeSurface::default();
        let mut registry = LayerRegistry::new();
        registry.register(&mut surface, &1, "a1", "A");
        let calls = surface.stamp_calls;

        let _ = registry.by_group();
        let _ = registry.by_group();

        assert_eq!(surface.stamp_calls, calls);
        assert_eq!(registry.len(), 1);
    }
}
