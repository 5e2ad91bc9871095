//! Browser side of the `p` permalink parameter.

use moonmap_shared::url_state::POSITION_PARAM;
use wasm_bindgen::JsValue;

/// Raw `p` value from the current location, already URL-decoded once by
/// `URLSearchParams`. The value itself is still percent-encoded.
pub fn read_position_param() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(POSITION_PARAM)
}

/// Rewrite the current history entry's query to `?p=<value>`.
pub fn replace_position_param(value: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(params) = web_sys::UrlSearchParams::new() else {
        return;
    };
    params.set(POSITION_PARAM, value);

    let path = window.location().pathname().unwrap_or_default();
    let url = format!("{path}?{}", String::from(params.to_string()));
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
        web_sys::console::warn_1(&format!("Failed to update position in URL: {err:?}").into());
    }
}
