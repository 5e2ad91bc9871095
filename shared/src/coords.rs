use serde::{Deserialize, Serialize};

/// A point on a map plane. `x` is horizontal, `y` is vertical and grows upwards.
///
/// Data files and the URL both carry points as `[x, y]` / `"x y"`, horizontal first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rounded `"x,y"` label shown in tooltips, popups and the page title.
    ///
    /// Halves round up (`-2.5` becomes `-2`). Non-finite points have no label.
    pub fn display_string(&self) -> Option<String> {
        if !self.is_finite() {
            return None;
        }
        Some(format!("{},{}", round_half_up(self.x), round_half_up(self.y)))
    }
}

impl From<[f64; 2]> for MapPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<MapPoint> for [f64; 2] {
    fn from(p: MapPoint) -> Self {
        [p.x, p.y]
    }
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Axis-aligned rectangle in map plane coordinates.
///
/// Serialized as `[[minX, minY], [maxX, maxY]]`. Corners given in the wrong order
/// are normalized on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct MapBounds {
    pub min: MapPoint,
    pub max: MapPoint,
}

impl MapBounds {
    pub fn new(a: MapPoint, b: MapPoint) -> Self {
        Self {
            min: MapPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: MapPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Half-open range check on both axes: `min <= v < max`.
    ///
    /// The upper edge is excluded, so the last column and row of the image can
    /// never hold a selection.
    pub fn contains(&self, p: MapPoint) -> bool {
        in_range(p.x, self.min.x, self.max.x) && in_range(p.y, self.min.y, self.max.y)
    }
}

impl From<[[f64; 2]; 2]> for MapBounds {
    fn from([a, b]: [[f64; 2]; 2]) -> Self {
        Self::new(a.into(), b.into())
    }
}

impl From<MapBounds> for [[f64; 2]; 2] {
    fn from(b: MapBounds) -> Self {
        [b.min.into(), b.max.into()]
    }
}

fn in_range(v: f64, min: f64, max: f64) -> bool {
    min <= v && v < max
}
