/// Map catalog bundled into the binary.
pub const MAPS_JSON: &str = include_str!("../maps.json");

pub const MAP_LIST_TITLE: &str = "천애명월도m 지도 목록";

pub const MIN_ZOOM: i32 = -1;
pub const MAX_ZOOM: i32 = 4;
pub const INITIAL_ZOOM: i32 = 0;

/// Pointer travel (px) below which a press-release counts as a click, not a drag.
pub const CLICK_DRAG_TOLERANCE_PX: f64 = 5.0;

pub const NOT_FOUND_IMAGE: &str = "/404.svg";
pub const SELECTION_PIN_IMAGE: &str = "/marker/marker.svg";

pub fn zoom_scale(zoom: i32) -> f64 {
    2f64.powi(zoom)
}

pub fn map_image_url(name: &str, webp: bool) -> String {
    let ext = if webp { "webp" } else { "png" };
    format!("/maps/{name}.{ext}")
}

pub fn marker_data_url(name: &str) -> String {
    format!("/marker/{name}.json")
}

/// Path under `public/` that Trunk serves at `url`.
#[cfg(test)]
pub(crate) fn public_asset(url: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("public")
        .join(url.trim_start_matches('/'))
}
