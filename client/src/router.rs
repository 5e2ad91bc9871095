use std::cell::RefCell;

use leptos::prelude::*;
use moonmap_shared::Route;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// Active page. Provided at the app root.
#[derive(Clone, Copy)]
pub(crate) struct CurrentRoute(pub RwSignal<Route>);

struct PopStateBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::PopStateEvent)>,
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopStateBinding>> = const { RefCell::new(None) };
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Change the address bar to `path` and switch pages. `replace` rewrites the current
/// history entry instead of adding one.
pub fn navigate(route: RwSignal<Route>, path: &str, replace: bool) {
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(path))
        };
        if let Err(err) = result {
            web_sys::console::warn_1(&format!("Navigation to {path} failed: {err:?}").into());
        }
    }
    route.set(Route::parse(path));
}

/// Re-resolve the page on back/forward navigation.
pub fn bind_popstate(route: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    POPSTATE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "popstate",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });

    let handler = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_| {
        route.set(Route::parse(&current_path()));
    });

    if window
        .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        POPSTATE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(PopStateBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}

/// In-app link. Plain clicks navigate without a page load; modified clicks
/// (new tab, new window) fall through to the browser.
#[component]
pub fn Link(to: String, children: Children) -> impl IntoView {
    let CurrentRoute(route) = expect_context();
    let href = to.clone();

    let on_click = move |e: web_sys::MouseEvent| {
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        e.prevent_default();
        navigate(route, &to, false);
    };

    view! {
        <a href=href on:click=on_click style="text-decoration: none;">
            {children()}
        </a>
    }
}
