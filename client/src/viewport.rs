use moonmap_shared::MapPoint;

use crate::config::{INITIAL_ZOOM, MAX_ZOOM, MIN_ZOOM, zoom_scale};

/// Viewport manages the pan/zoom transformation from world coordinates to screen coordinates.
///
/// World space is the map plane with the vertical axis flipped, so screen `y` grows
/// downwards while map `y` grows upwards. Zoom is a discrete level in
/// `MIN_ZOOM..=MAX_ZOOM`; `scale` is always `2^zoom` CSS pixels per map unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: i32,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: INITIAL_ZOOM,
            scale: zoom_scale(INITIAL_ZOOM),
        }
    }
}

pub fn plane_to_world(p: MapPoint) -> (f64, f64) {
    (p.x, -p.y)
}

pub fn world_to_plane(wx: f64, wy: f64) -> MapPoint {
    MapPoint::new(wx, -wy)
}

/// Zoom levels for one wheel event: one level per notch, scrolling up zooms in.
pub fn wheel_zoom_steps(delta_y: f64) -> i32 {
    if delta_y < 0.0 {
        1
    } else if delta_y > 0.0 {
        -1
    } else {
        0
    }
}

impl Viewport {
    /// Viewport at level `zoom` with `center` in the middle of a `canvas_w` x `canvas_h` area.
    pub fn centered_on(center: MapPoint, zoom: i32, canvas_w: f64, canvas_h: f64) -> Self {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let scale = zoom_scale(zoom);
        let (wx, wy) = plane_to_world(center);
        Self {
            offset_x: canvas_w / 2.0 - wx * scale,
            offset_y: canvas_h / 2.0 - wy * scale,
            zoom,
            scale,
        }
    }

    /// Convert world coordinates to screen coordinates.
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        (
            wx * self.scale + self.offset_x,
            wy * self.scale + self.offset_y,
        )
    }

    /// Convert screen coordinates to world coordinates.
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        (
            (sx - self.offset_x) / self.scale,
            (sy - self.offset_y) / self.scale,
        )
    }

    pub fn map_to_screen(&self, p: MapPoint) -> (f64, f64) {
        let (wx, wy) = plane_to_world(p);
        self.world_to_screen(wx, wy)
    }

    pub fn screen_to_map(&self, sx: f64, sy: f64) -> MapPoint {
        let (wx, wy) = self.screen_to_world(sx, sy);
        world_to_plane(wx, wy)
    }

    /// Move `steps` zoom levels toward a focus point (screen coordinates).
    /// Positive steps zoom in. The level is clamped to the map's zoom range.
    pub fn zoom_at(&mut self, steps: i32, screen_x: f64, screen_y: f64) {
        let new_zoom = self.zoom.saturating_add(steps).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == self.zoom {
            return;
        }
        let new_scale = zoom_scale(new_zoom);
        let ratio = new_scale / self.scale;

        // Keep the point under the cursor fixed
        self.offset_x = screen_x - (screen_x - self.offset_x) * ratio;
        self.offset_y = screen_y - (screen_y - self.offset_y) * ratio;
        self.zoom = new_zoom;
        self.scale = new_scale;
    }

    /// Pan by screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }
}
