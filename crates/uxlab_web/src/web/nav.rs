//! App chrome: top bar and the master list sidebar.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use uxlab::route::{self, Collection};

use crate::ui_model::Theme;

use super::router::{self, RouteSignal};
use super::{Resolved, SiteContent};

#[component]
pub(super) fn Topbar(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <h1 class="brand">"UXLab"</h1>
                <span class="subtle">"usability heuristics & UX laws, interactive"</span>
            </div>
            <div class="app-header-right">
                <button
                    class="btn sm ghost"
                    title=move || format!("Theme: {}", theme.get().label())
                    on:click=move |_| set_theme.set(theme.get().toggle())
                >
                    {move || theme.get().icon()}" "{move || theme.get().label()}
                </button>
            </div>
        </header>
    }
}

#[component]
pub(super) fn Sidebar(
    content: StoredValue<SiteContent>,
    routes: RouteSignal,
    resolved: Memo<Resolved>,
    show_about: ReadSignal<bool>,
    set_show_about: WriteSignal<bool>,
) -> impl IntoView {
    let active_collection = Memo::new(move |_| match resolved.get() {
        Resolved::Detail { collection, .. } => Some(collection),
        Resolved::Redirect(_) => None,
    });
    let active_id = Memo::new(move |_| match resolved.get() {
        Resolved::Detail { entry, .. } => Some(entry.id),
        Resolved::Redirect(_) => None,
    });

    // (slug, display title) of the listed collection, in dataset order.
    let listed = Memo::new(move |_| {
        let collection = active_collection.get().unwrap_or(Collection::Heuristics);
        content.with_value(|c| {
            c.registry(collection)
                .entries()
                .iter()
                .map(|e| (e.id.clone(), route::display_title(&e.title).to_string()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <aside class="sidebar">
            <div class="collection-tabs">
                {Collection::all()
                    .iter()
                    .map(|&collection| {
                        view! {
                            <button
                                class=move || {
                                    if !show_about.get()
                                        && active_collection.get() == Some(collection)
                                    {
                                        "collection-tab active"
                                    } else {
                                        "collection-tab"
                                    }
                                }
                                on:click=move |_| {
                                    set_show_about.set(false);
                                    // The collection root redirects to its
                                    // configured default entry.
                                    router::navigate(
                                        routes,
                                        &format!("/{}", collection.path_segment()),
                                    );
                                }
                            >
                                <span class="collection-tab-icon">{collection.icon()}</span>
                                <span class="collection-tab-label">{collection.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="sidebar-section">
                {move || {
                    listed
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (id, title))| {
                            let id_class = id.clone();
                            let id_click = id.clone();
                            let id_key = id;
                            let go = move |id: &str| {
                                set_show_about.set(false);
                                let collection = active_collection
                                    .get_untracked()
                                    .unwrap_or(Collection::Heuristics);
                                router::navigate(routes, &route::href(collection, id));
                            };
                            view! {
                                <div
                                    class=move || {
                                        if !show_about.get()
                                            && active_id.get().as_deref() == Some(id_class.as_str())
                                        {
                                            "sidebar-item active"
                                        } else {
                                            "sidebar-item"
                                        }
                                    }
                                    role="button"
                                    tabindex="0"
                                    on:click=move |_| go(&id_click)
                                    on:keydown=move |ev: KeyboardEvent| {
                                        let key = ev.key();
                                        if key == "Enter" || key == " " {
                                            ev.prevent_default();
                                            go(&id_key);
                                        }
                                    }
                                >
                                    <span class="sidebar-num">{format!("{:02}", i + 1)}</span>
                                    <span class="sidebar-label">{title}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="sidebar-footer">
                <button
                    class=move || if show_about.get() { "sidebar-item active" } else { "sidebar-item" }
                    on:click=move |_| set_show_about.set(true)
                >
                    <span class="sidebar-label">"About this site"</span>
                    <span class="sidebar-ico">"ℹ️"</span>
                </button>
            </div>
        </aside>
    }
}
