//! The UXLab browser app.
//!
//! Wiring only: registries are loaded once at startup, the current URL is a
//! signal, and everything below is a function of those two. Resolution logic
//! lives in `uxlab` core so it stays host-testable.

use leptos::prelude::*;

use uxlab::content::ContentEntry;
use uxlab::registry::{Registry, Resolution};
use uxlab::route::{self, Collection, ParsedRoute};

use crate::ui_model::Theme;

mod about;
mod carousel;
mod detail;
mod markdown;
mod nav;
mod router;
mod shell;
mod timers;
mod widgets;

use about::AboutPanel;
use detail::DetailView;
use nav::{Sidebar, Topbar};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

/// Read-only content registries, built once at startup.
pub(crate) struct SiteContent {
    heuristics: Registry,
    laws: Registry,
}

impl SiteContent {
    fn load() -> Self {
        Self {
            heuristics: uxlab_content::heuristics(),
            laws: uxlab_content::laws(),
        }
    }

    pub(crate) fn registry(&self, collection: Collection) -> &Registry {
        match collection {
            Collection::Heuristics => &self.heuristics,
            Collection::Laws => &self.laws,
        }
    }
}

/// What the current URL resolves to.
#[derive(Clone, PartialEq)]
enum Resolved {
    Detail {
        collection: Collection,
        entry: ContentEntry,
    },
    Redirect(String),
}

fn resolve(content: StoredValue<SiteContent>, path: &str) -> Resolved {
    match route::parse_path(path) {
        Some(ParsedRoute {
            collection,
            entry_id,
        }) => content.with_value(|c| {
            match c.registry(collection).resolve(entry_id.as_deref()) {
                Resolution::Entry(entry) => Resolved::Detail {
                    collection,
                    entry: entry.clone(),
                },
                Resolution::Redirect(slug) => Resolved::Redirect(route::href(collection, slug)),
            }
        }),
        // Paths outside the two collections land on the default heuristic.
        None => content.with_value(|c| {
            Resolved::Redirect(route::href(
                Collection::Heuristics,
                &c.heuristics.default_entry().id,
            ))
        }),
    }
}

#[component]
fn App() -> impl IntoView {
    let content = StoredValue::new(SiteContent::load());
    let routes = router::install();
    let (theme, set_theme) = signal(Theme::default());
    let (show_about, set_show_about) = signal(false);

    let resolved = Memo::new(move |_| resolve(content, &routes.path().get()));

    // Missing or unknown ids never error: replace-redirect to the default so
    // the dead URL does not stay in history.
    Effect::new(move |_| {
        if let Resolved::Redirect(href) = resolved.get() {
            router::replace(routes, &href);
        }
    });

    view! {
        <div class=move || format!("app {}", theme.get().css_class())>
            <Topbar theme=theme set_theme=set_theme />
            <div class="app-layout">
                <Sidebar
                    content=content
                    routes=routes
                    resolved=resolved
                    show_about=show_about
                    set_show_about=set_show_about
                />
                <main class="main-pane">
                    {move || {
                        if show_about.get() {
                            return view! { <AboutPanel /> }.into_any();
                        }
                        match resolved.get() {
                            // Rebuilt per navigation: every piece of detail
                            // state (toggle, scenario index, scroll) starts
                            // fresh on arrival at a new entry.
                            Resolved::Detail { collection, entry } => view! {
                                <DetailView collection=collection entry=entry />
                            }
                            .into_any(),
                            Resolved::Redirect(_) => {
                                view! { <div class="redirecting"></div> }.into_any()
                            }
                        }
                    }}
                </main>
            </div>
        </div>
    }
}
