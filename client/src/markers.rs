use leptos::prelude::*;
use moonmap_shared::{IconKey, MapPoint, MarkerSpec};

use crate::config::SELECTION_PIN_IMAGE;
use crate::icons::{GLYPH_SIZE_PX, IconGlyph};
use crate::surface::MapSurface;
use crate::viewport::Viewport;

const PIN_SIZE_PX: f64 = 20.0;

/// Absolute CSS position that puts the centre of a `size` px box on `p`.
fn anchored_style(vp: &Viewport, p: MapPoint, size: f64, z_index: u32) -> String {
    let (sx, sy) = vp.map_to_screen(p);
    format!(
        "position: absolute; left: {:.1}px; top: {:.1}px; width: {size}px; height: {size}px; z-index: {z_index};",
        sx - size / 2.0,
        sy - size / 2.0,
    )
}

/// Pin, pulse ring and permanent coordinate tooltip for the selected position.
#[component]
pub fn SelectedMarker(point: MapPoint, viewport: RwSignal<Viewport>) -> impl IntoView {
    let label = point.display_string().unwrap_or_default();
    let effect_style = move || viewport.with(|vp| anchored_style(vp, point, 0.0, 600));
    let pin_style = move || viewport.with(|vp| anchored_style(vp, point, PIN_SIZE_PX, 610));

    view! {
        <div style=effect_style>
            <div class="map-marker-effect" />
        </div>
        <div style=pin_style>
            <img
                src=SELECTION_PIN_IMAGE
                width="20"
                height="20"
                draggable="false"
                style="display: block; pointer-events: none;"
            />
            <div class="pos-tooltip">{label}</div>
        </div>
    }
}

/// Every marker of every attached overlay layer.
#[component]
pub fn OverlayMarkers(surface: RwSignal<MapSurface>, viewport: RwSignal<Viewport>) -> impl IntoView {
    move || {
        surface.with(|s| {
            s.attached_layers()
                .flat_map(|(_, layer)| {
                    let icon = layer.icon;
                    layer
                        .markers
                        .iter()
                        .cloned()
                        .map(move |spec| view! { <PoiMarker spec=spec icon=icon viewport=viewport /> })
                })
                .collect_view()
        })
    }
}

/// A point of interest. Hovering opens a popup with its text and coordinates.
#[component]
fn PoiMarker(spec: MarkerSpec, icon: IconKey, viewport: RwSignal<Viewport>) -> impl IntoView {
    let open: RwSignal<bool> = RwSignal::new(false);
    let position = spec.position;
    let coords = position.display_string().unwrap_or_default();
    let style = move || viewport.with(|vp| anchored_style(vp, position, GLYPH_SIZE_PX as f64, 500));

    view! {
        <div
            style=style
            on:mouseenter=move |_| open.set(true)
            on:mouseleave=move |_| open.set(false)
            on:click=|e| e.stop_propagation()
        >
            <IconGlyph icon=icon />
            <Show when=move || open.get()>
                <div class="poi-popup">
                    {spec.popup.clone().map(|text| view! { <div style="font-weight: 700;">{text}</div> })}
                    <div>{coords.clone()}</div>
                </div>
            </Show>
        </div>
    }
}
