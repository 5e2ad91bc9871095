use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use moonmap_shared::route::NOT_FOUND_PATH;
use moonmap_shared::{ClickOutcome, MapBounds, MapPoint, MarkerData, SelectionController};
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, PointerEvent, WheelEvent};

use crate::app::{CatalogStore, canvas_dimensions, set_document_title};
use crate::config::{CLICK_DRAG_TOLERANCE_PX, INITIAL_ZOOM, map_image_url, marker_data_url};
use crate::layer_control::LayerControl;
use crate::markers::{OverlayMarkers, SelectedMarker};
use crate::router::{self, CurrentRoute};
use crate::surface::{LayerRegistration, MapSurface};
use crate::url_sync;
use crate::viewport::{Viewport, wheel_zoom_steps};
use crate::webp;

/// Document title for a map screen: the map's name, plus the selected position.
pub(crate) fn page_title(locale: &str, position: Option<&str>) -> String {
    match position {
        Some(position) => format!("{locale} ({position})"),
        None => locale.to_string(),
    }
}

/// Screen rect `(left, top, width, height)` of the map image.
fn image_rect(vp: &Viewport, bounds: MapBounds) -> (f64, f64, f64, f64) {
    let (left, top) = vp.map_to_screen(MapPoint::new(bounds.min.x, bounds.max.y));
    (
        left,
        top,
        bounds.width() * vp.scale,
        bounds.height() * vp.scale,
    )
}

/// Marker overlay for `name`. A missing file means the map has no markers.
async fn fetch_marker_data(name: &str) -> Result<Option<MarkerData>, String> {
    let resp = gloo_net::http::Request::get(&marker_data_url(name))
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;
    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| format!("read error: {e}"))?;
    MarkerData::from_json(&body)
        .map(|data| (!data.is_empty()).then_some(data))
        .map_err(|e| format!("parse error: {e}"))
}

/// Layers for the layer panel, held back until the map image has been chosen.
fn panel_layers(
    image_src: &Option<String>,
    layers: &Option<Vec<LayerRegistration>>,
) -> Option<Vec<LayerRegistration>> {
    image_src.as_ref().and(layers.clone())
}

fn local_point(container: Option<web_sys::HtmlDivElement>, e: &MouseEvent) -> (f64, f64) {
    container
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            (
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
            )
        })
        .unwrap_or((e.offset_x() as f64, e.offset_y() as f64))
}

/// Interactive map for the catalog entry `name`. Unknown names redirect to the
/// not-found page.
#[component]
pub fn MapScreen(name: String) -> impl IntoView {
    let CatalogStore(catalog) = expect_context();
    let CurrentRoute(route) = expect_context();

    let Some(info) = catalog.with_value(|c| c.get(&name).cloned()) else {
        Effect::new(move || {
            router::navigate(route, NOT_FOUND_PATH, true);
        });
        return ().into_any();
    };
    let bounds = info.bounds;

    let selection: RwSignal<SelectionController> = RwSignal::new(SelectionController::restore(
        bounds,
        url_sync::read_position_param().as_deref(),
    ));
    let (canvas_w, canvas_h) = canvas_dimensions();
    let center = selection
        .with_untracked(|s| s.selected())
        .unwrap_or_else(|| bounds.center());
    let viewport: RwSignal<Viewport> = RwSignal::new(Viewport::centered_on(
        center,
        INITIAL_ZOOM,
        canvas_w,
        canvas_h,
    ));
    let image_src: RwSignal<Option<String>> = RwSignal::new(None);
    let surface: RwSignal<MapSurface> = RwSignal::new(MapSurface::default());
    let marker_layers: RwSignal<Option<Vec<LayerRegistration>>> = RwSignal::new(None);
    let map_clicks_suppressed: RwSignal<bool> = RwSignal::new(false);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    {
        let name = name.clone();
        webp::detect_support(move |supported| {
            let _ = image_src.try_set(Some(map_image_url(&name, supported)));
        });
    }

    {
        let name = name.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_marker_data(&name).await {
                Ok(Some(data)) => {
                    let (built, layers) = MapSurface::from_markers(&data);
                    let _ = surface.try_set(built);
                    let _ = marker_layers.try_set(Some(layers));
                }
                Ok(None) => {}
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("Markers for {name} unavailable: {err}").into(),
                    );
                }
            }
        });
    }

    let locale = info.locale.clone();
    Effect::new(move || {
        let position = selection.with(|s| s.display_string());
        set_document_title(&page_title(&locale, position.as_deref()));
    });

    // --- Input handlers ---

    let is_dragging = Rc::new(Cell::new(false));
    let drag_start = Rc::new(Cell::new((0.0f64, 0.0f64)));
    let last = Rc::new(Cell::new((0.0f64, 0.0f64)));

    let on_wheel = move |e: WheelEvent| {
        e.prevent_default();
        let (x, y) = local_point(container_ref.get_untracked(), &e);
        let steps = wheel_zoom_steps(e.delta_y());
        if steps != 0 {
            viewport.update(|vp| vp.zoom_at(steps, x, y));
        }
    };

    let on_pointer_down = {
        let is_dragging = is_dragging.clone();
        let drag_start = drag_start.clone();
        let last = last.clone();
        move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            let at = (e.client_x() as f64, e.client_y() as f64);
            is_dragging.set(true);
            drag_start.set(at);
            last.set(at);
        }
    };

    let on_pointer_move = {
        let is_dragging = is_dragging.clone();
        let drag_start = drag_start.clone();
        let last = last.clone();
        move |e: PointerEvent| {
            if !is_dragging.get() {
                return;
            }
            let (x, y) = (e.client_x() as f64, e.client_y() as f64);
            let (lx, ly) = last.get();
            last.set((x, y));
            viewport.update(|vp| vp.pan(x - lx, y - ly));

            // Capture only once this is clearly a drag, so plain clicks keep their target.
            let (sx, sy) = drag_start.get();
            let travelled = (x - sx).abs() >= CLICK_DRAG_TOLERANCE_PX
                || (y - sy).abs() >= CLICK_DRAG_TOLERANCE_PX;
            if travelled
                && let Some(el) = e
                    .current_target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
                && !el.has_pointer_capture(e.pointer_id())
            {
                el.set_pointer_capture(e.pointer_id()).ok();
                el.style().set_property("cursor", "grabbing").ok();
            }
        }
    };

    let on_pointer_up = {
        let is_dragging = is_dragging.clone();
        move |e: PointerEvent| {
            is_dragging.set(false);
            if let Some(el) = e
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
            {
                el.style().set_property("cursor", "grab").ok();
            }
        }
    };

    let on_click = {
        let drag_start = drag_start.clone();
        move |e: MouseEvent| {
            let (sx, sy) = drag_start.get();
            let dx = (e.client_x() as f64 - sx).abs();
            let dy = (e.client_y() as f64 - sy).abs();
            if dx >= CLICK_DRAG_TOLERANCE_PX || dy >= CLICK_DRAG_TOLERANCE_PX {
                return;
            }

            let (x, y) = local_point(container_ref.get_untracked(), &e);
            let point = viewport.with_untracked(|vp| vp.screen_to_map(x, y));
            let suppressed = map_clicks_suppressed.get_untracked();

            let mut next = selection.get_untracked();
            if let ClickOutcome::Selected(_) = next.click(point, suppressed) {
                if let Some(value) = next.url_value() {
                    url_sync::replace_position_param(&value);
                }
                selection.set(next);
            }
        }
    };

    let container_style = format!(
        "position: absolute; inset: 0; overflow: hidden; cursor: grab; touch-action: none; background: {};",
        info.background_color
    );

    view! {
        <div
            node_ref=container_ref
            style=container_style
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
            on:click=on_click
        >
            {move || {
                image_src
                    .get()
                    .map(|src| {
                        let image_style = move || {
                            viewport.with(|vp| {
                                let (left, top, width, height) = image_rect(vp, bounds);
                                format!(
                                    "position: absolute; left: {left:.1}px; top: {top:.1}px; width: {width:.1}px; height: {height:.1}px; max-width: none; user-select: none; pointer-events: none;"
                                )
                            })
                        };
                        view! {
                            <img src=src alt="" draggable="false" style=image_style />
                            <OverlayMarkers surface=surface viewport=viewport />
                            {move || {
                                selection
                                    .with(|s| s.selected())
                                    .map(|point| view! { <SelectedMarker point=point viewport=viewport /> })
                            }}
                        }
                    })
            }}
            {move || {
                image_src
                    .with(|src| marker_layers.with(|layers| panel_layers(src, layers)))
                    .map(|layers| {
                        view! {
                            <LayerControl
                                surface=surface
                                layers=layers
                                map_clicks_suppressed=map_clicks_suppressed
                            />
                        }
                    })
            }}
        </div>
    }
    .into_any()
}
