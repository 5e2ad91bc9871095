use leptos::prelude::*;
use moonmap_shared::{LayerId, LayerLabel, LayerRegistry};

use crate::icons::IconGlyph;
use crate::surface::{LayerKey, LayerRegistration, MapSurface};

/// Hover state of the layer panel. Pointer-enter expands, pointer-leave collapses;
/// there is no way to pin it open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn pointer_enter(self) -> Self {
        Self::Expanded
    }

    pub fn pointer_leave(self) -> Self {
        Self::Collapsed
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Group names with their layer ids, in display order. Unchanged by toggles, so
/// sections (and their open/closed state) survive a checkbox click.
fn section_outline(registry: &LayerRegistry<LayerKey>) -> Vec<(String, Vec<LayerId>)> {
    registry
        .by_group()
        .into_iter()
        .map(|group| {
            (
                group.name.to_string(),
                group.entries.iter().map(|entry| entry.id).collect(),
            )
        })
        .collect()
}

const PANEL_STYLE: &str = "position: absolute; top: 10px; right: 10px; z-index: 1000; background: #fff; color: #1f2937; border-radius: 6px; border: 2px solid rgba(0,0,0,0.2); box-shadow: 0 1px 5px rgba(0,0,0,0.4); font-family: 'Inter', system-ui, sans-serif; cursor: default; max-height: calc(100vh - 40px); overflow-y: auto; min-width: 44px;";

/// Grouped layer toggles drawn over the top-right corner of the map.
///
/// The panel owns its registry. `map_clicks_suppressed` belongs to the map screen;
/// the panel raises it while the pointer is over the panel.
#[component]
pub fn LayerControl(
    surface: RwSignal<MapSurface>,
    layers: Vec<LayerRegistration>,
    map_clicks_suppressed: RwSignal<bool>,
) -> impl IntoView {
    let registry: RwSignal<LayerRegistry<LayerKey>> = RwSignal::new(LayerRegistry::new());
    let panel: RwSignal<PanelState> = RwSignal::new(PanelState::default());

    // Stamping is invisible to the map, so the surface isn't notified.
    surface.update_untracked(|s| {
        registry.update(|r| {
            for reg in &layers {
                r.register(s, &reg.layer, reg.label.clone(), reg.group.clone());
            }
        });
    });

    let outline = Memo::new(move |_| registry.with(section_outline));

    let on_enter = move |_| {
        panel.update(|p| *p = p.pointer_enter());
        map_clicks_suppressed.set(true);
    };
    let on_leave = move |_| {
        panel.update(|p| *p = p.pointer_leave());
        map_clicks_suppressed.set(false);
    };

    on_cleanup(move || {
        let _ = map_clicks_suppressed.try_set(false);
    });

    view! {
        <div
            style=PANEL_STYLE
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:pointerdown=|e| e.stop_propagation()
            on:wheel=|e| e.stop_propagation()
        >
            {move || {
                if panel.get().is_expanded() {
                    view! {
                        <div style="padding: 4px 0; min-width: 220px;">
                            <For
                                each=move || outline.get()
                                key=|(name, _)| name.clone()
                                children=move |(name, ids)| {
                                    view! { <LayerSection name=name ids=ids registry=registry surface=surface /> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div
                            title="Layers"
                            style="width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; font-size: 1.3rem; color: #4b5563;"
                        >
                            "☰"
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// One collapsible group: a header and, when open, a toggle row per layer.
#[component]
fn LayerSection(
    name: String,
    ids: Vec<LayerId>,
    registry: RwSignal<LayerRegistry<LayerKey>>,
    surface: RwSignal<MapSurface>,
) -> impl IntoView {
    let open: RwSignal<bool> = RwSignal::new(false);

    view! {
        <div style="border-top: 1px solid #e5e7eb;">
            <div
                style="display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 10px 14px; cursor: pointer; user-select: none; font-size: 0.95rem;"
                on:click=move |_| open.update(|v| *v = !*v)
            >
                <span>{name}</span>
                <span style="color: #6b7280; font-size: 0.8rem;">
                    {move || if open.get() { "▲" } else { "▼" }}
                </span>
            </div>
            {move || {
                open.get()
                    .then(|| {
                        ids.iter()
                            .map(|&id| view! { <LayerToggleRow id=id registry=registry surface=surface /> })
                            .collect_view()
                    })
            }}
        </div>
    }
}

#[component]
fn LayerToggleRow(
    id: LayerId,
    registry: RwSignal<LayerRegistry<LayerKey>>,
    surface: RwSignal<MapSurface>,
) -> impl IntoView {
    let label = registry
        .with_untracked(|r| r.get(id).map(|entry| entry.label.clone()))
        .unwrap_or_else(|| LayerLabel::plain(""));
    let checked = move || registry.with(|r| r.get(id).is_some_and(|entry| entry.checked));

    let on_change = move |e: leptos::ev::Event| {
        e.stop_propagation();
        registry.update(|r| {
            surface.update(|s| {
                r.toggle(s, id);
            });
        });
    };

    view! {
        <label
            style="display: flex; align-items: center; gap: 8px; padding: 6px 14px 6px 18px; cursor: pointer; font-size: 0.9rem;"
            on:click=|e| e.stop_propagation()
        >
            <input type="checkbox" prop:checked=checked on:change=on_change />
            {label.icon.map(|icon| view! {
                <span style="margin-right: 2px; display: inline-flex;">
                    <IconGlyph icon=icon />
                </span>
            })}
            <span>{label.text}</span>
        </label>
    }
}
