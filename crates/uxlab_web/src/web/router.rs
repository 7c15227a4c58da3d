//! History-API glue: the current pathname as a signal.
//!
//! The routing surface is three path shapes, so this stays a thin wrapper
//! over `pushState`/`replaceState` plus one `popstate` listener. Everything
//! interesting about a path happens in `uxlab::route`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Clone, Copy)]
pub(super) struct RouteSignal {
    path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl RouteSignal {
    pub(super) fn path(&self) -> ReadSignal<String> {
        self.path
    }
}

/// Creates the path signal and wires back/forward navigation into it.
pub(super) fn install() -> RouteSignal {
    let (path, set_path) = signal(current_path());

    if let Some(window) = web_sys::window() {
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            set_path.set(current_path());
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref());
        // App-lifetime listener.
        cb.forget();
    }

    RouteSignal { path, set_path }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// User-initiated navigation: pushes a history entry.
pub(super) fn navigate(routes: RouteSignal, href: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
        }
    }
    routes.set_path.set(href.to_string());
}

/// Redirect: replaces the current entry so the unresolved URL does not stay
/// in history.
pub(super) fn replace(routes: RouteSignal, href: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(href));
        }
    }
    routes.set_path.set(href.to_string());
}
