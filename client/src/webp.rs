use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// 2x2 lossy WebP. Browsers that can decode it report a height of 2.
const PROBE_SRC: &str = "data:image/webp;base64,UklGRjoAAABXRUJQVlA4IC4AAACyAgCdASoCAAIALmk0mk0iIiIiIgBoSygABc6WWgAA/veff/0PP8bA//LwYAAA";
const ONLOAD_HANDLE_KEY: &str = "__moonmapWebpOnload";
const ONERROR_HANDLE_KEY: &str = "__moonmapWebpOnerror";

type ResultCallback = Rc<RefCell<Option<Box<dyn FnOnce(bool)>>>>;

thread_local! {
    static WEBP_SUPPORTED: Cell<Option<bool>> = const { Cell::new(None) };
}

/// Report whether the browser decodes WebP. The probe runs once per page load;
/// later calls answer from the cached result.
pub fn detect_support(on_result: impl FnOnce(bool) + 'static) {
    if let Some(supported) = WEBP_SUPPORTED.with(Cell::get) {
        on_result(supported);
        return;
    }

    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(_) => {
            on_result(false);
            return;
        }
    };

    let callback: ResultCallback = Rc::new(RefCell::new(Some(Box::new(on_result))));

    let img_for_load = img.clone();
    let callback_load = callback.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        clear_image_handlers(&img_for_load);
        finish(&callback_load, img_for_load.height() == 2);
    });

    let img_for_error = img.clone();
    let callback_error = callback.clone();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        clear_image_handlers(&img_for_error);
        finish(&callback_error, false);
    });

    let onload_js = onload.into_js_value();
    let onerror_js = onerror.into_js_value();
    img.set_onload(Some(onload_js.unchecked_ref()));
    img.set_onerror(Some(onerror_js.unchecked_ref()));
    let _ = Reflect::set(
        img.as_ref(),
        &JsValue::from_str(ONLOAD_HANDLE_KEY),
        &onload_js,
    );
    let _ = Reflect::set(
        img.as_ref(),
        &JsValue::from_str(ONERROR_HANDLE_KEY),
        &onerror_js,
    );
    img.set_src(PROBE_SRC);
}

fn finish(callback: &ResultCallback, supported: bool) {
    WEBP_SUPPORTED.with(|cell| cell.set(Some(supported)));
    if let Some(cb) = callback.borrow_mut().take() {
        cb(supported);
    }
}

fn clear_image_handlers(img: &HtmlImageElement) {
    img.set_onload(None);
    img.set_onerror(None);
    let _ = Reflect::delete_property(img.as_ref(), &JsValue::from_str(ONLOAD_HANDLE_KEY));
    let _ = Reflect::delete_property(img.as_ref(), &JsValue::from_str(ONERROR_HANDLE_KEY));
}
