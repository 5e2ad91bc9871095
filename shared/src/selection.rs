use crate::coords::{MapBounds, MapPoint};
use crate::url_state;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Selected(MapPoint),
    /// Map clicks are switched off while another control has the pointer.
    Suppressed,
    OutOfBounds,
}

/// Owns the single selected position of a map screen.
///
/// Built once per map with that map's bounds; every click goes through
/// [`SelectionController::click`], which is the only way the selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    bounds: MapBounds,
    selected: Option<MapPoint>,
}

impl SelectionController {
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            bounds,
            selected: None,
        }
    }

    /// Seed the selection from a `p` query value. Malformed or out-of-bounds values
    /// start without a selection.
    pub fn restore(bounds: MapBounds, param: Option<&str>) -> Self {
        let selected = param
            .and_then(url_state::decode_position)
            .filter(|p| bounds.contains(*p));
        Self { bounds, selected }
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    pub fn selected(&self) -> Option<MapPoint> {
        self.selected
    }

    pub fn click(&mut self, point: MapPoint, suppressed: bool) -> ClickOutcome {
        if suppressed {
            return ClickOutcome::Suppressed;
        }
        if !self.bounds.contains(point) {
            return ClickOutcome::OutOfBounds;
        }
        self.selected = Some(point);
        ClickOutcome::Selected(point)
    }

    pub fn display_string(&self) -> Option<String> {
        self.selected.and_then(|p| p.display_string())
    }

    /// Value for the `p` query parameter, if anything is selected.
    pub fn url_value(&self) -> Option<String> {
        self.selected.and_then(url_state::encode_position)
    }
}
