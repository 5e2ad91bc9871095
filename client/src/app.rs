use leptos::prelude::*;
use moonmap_shared::{MapCatalog, Route};

use crate::config::MAPS_JSON;
use crate::map_list::MapList;
use crate::map_view::MapScreen;
use crate::not_found::NotFound;
use crate::router::{self, CurrentRoute};

/// Map catalog, parsed once at startup.
#[derive(Clone, Copy)]
pub(crate) struct CatalogStore(pub StoredValue<MapCatalog>);

pub(crate) fn canvas_dimensions() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (1200.0, 800.0);
    };
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1200.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    (w, h)
}

pub(crate) fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}

fn load_catalog() -> MapCatalog {
    match MapCatalog::from_json(MAPS_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            web_sys::console::warn_1(&format!("Map catalog is invalid: {err}").into());
            MapCatalog::default()
        }
    }
}

/// Root application component. Resolves the current path and renders its page.
#[component]
pub fn App() -> impl IntoView {
    let route: RwSignal<Route> = RwSignal::new(Route::parse(&router::current_path()));
    let catalog: StoredValue<MapCatalog> = StoredValue::new(load_catalog());

    provide_context(CurrentRoute(route));
    provide_context(CatalogStore(catalog));

    Effect::new(move || {
        router::bind_popstate(route);
    });

    move || match route.get() {
        Route::MapList => view! { <MapList /> }.into_any(),
        Route::Map(name) => view! { <MapScreen name=name /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    }
}
