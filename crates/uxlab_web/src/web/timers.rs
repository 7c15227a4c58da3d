//! Window timer helpers shared by the demo widgets.
//!
//! Every widget that starts a timer owns its handle and clears it in
//! `on_cleanup`, so an unmount mid-animation never leaves a callback firing
//! into a disposed component.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(super) fn set_interval(ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .ok();
    // The handle is the only way to stop it.
    cb.forget();
    id
}

pub(super) fn clear_interval(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_interval_with_handle(id);
    }
}

pub(super) fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

pub(super) fn clear_timeout(id: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(id);
    }
}
