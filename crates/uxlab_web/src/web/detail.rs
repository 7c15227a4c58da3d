//! Detail pane for one content entry.
//!
//! All state here is ephemeral: the digital/real-world toggle and the active
//! scenario die with the pane, and the pane is remounted per entry, so
//! arriving at a new entry always shows digital mode with the first scenario.

use leptos::prelude::*;

use uxlab::content::ContentEntry;
use uxlab::route::{self, Collection};

use crate::ui_model::{module_for, ScenarioDescriptor, ViewMode};

use super::carousel::RealWorldCarousel;
use super::markdown;
use super::shell::ScenarioShell;

#[component]
pub(super) fn DetailView(collection: Collection, entry: ContentEntry) -> impl IntoView {
    let (mode, set_mode) = signal(ViewMode::default());
    // Shell → side panel: one-directional, last value wins. Before the shell
    // reports anything the panel falls back to the entry's own text.
    let (active_scenario, set_active_scenario) =
        signal::<Option<&'static ScenarioDescriptor>>(None);

    let module = module_for(&entry.id);

    let title = route::display_title(&entry.title).to_string();
    let description_html = markdown::render_markdown(&entry.description);
    let entry_why = entry.why_it_matters.clone();
    let digital = entry.digital_example.clone();
    let digital_why = digital.why_it_matters.clone();
    let best_practices = entry.best_practices.clone();
    let designer_notes = entry.designer_notes.clone();
    let cards = entry.real_world_examples.clone();

    let panel_why = Memo::new(move |_| {
        active_scenario
            .get()
            .map(|d| d.why_it_matters.to_string())
            .unwrap_or_else(|| digital_why.clone())
    });

    let digital_section = move || match module {
        Some(scenarios) => view! {
            <div class="digital-split">
                <div class="digital-stage">
                    <ScenarioShell
                        scenarios=scenarios
                        on_scenario_change=Callback::new(move |d| {
                            set_active_scenario.set(Some(d));
                        })
                    />
                </div>
                <SidePanel
                    panel_why=panel_why
                    best_practices=best_practices.clone()
                    designer_notes=designer_notes.clone()
                />
            </div>
        }
        .into_any(),
        None => view! {
            <div class="digital-split">
                <div class="digital-stage">
                    <div class="digital-static">
                        <h3 class="digital-static-title">{digital.title.clone()}</h3>
                        <p>{digital.description.clone()}</p>
                    </div>
                </div>
                <SidePanel
                    panel_why=panel_why
                    best_practices=best_practices.clone()
                    designer_notes=designer_notes.clone()
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="detail">
            <header class="detail-header">
                <div class="detail-kicker">{collection.label()}</div>
                <h2 class="detail-title">{title}</h2>
                <div class="detail-intro" inner_html=description_html></div>
                <p class="detail-why">{entry_why}</p>
                <div class="mode-toggle" role="tablist">
                    {ViewMode::all()
                        .iter()
                        .map(|&m| {
                            view! {
                                <button
                                    class=move || {
                                        if mode.get() == m { "mode-btn active" } else { "mode-btn" }
                                    }
                                    role="tab"
                                    on:click=move |_| set_mode.set(m)
                                >
                                    {m.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>

            <section class="detail-body">
                {move || match mode.get() {
                    ViewMode::Digital => digital_section(),
                    ViewMode::RealWorld => {
                        view! { <RealWorldCarousel cards=cards.clone() /> }.into_any()
                    }
                }}
            </section>
        </article>
    }
}

#[component]
fn SidePanel(
    panel_why: Memo<String>,
    best_practices: Vec<String>,
    designer_notes: Vec<String>,
) -> impl IntoView {
    view! {
        <aside class="side-panel">
            <section class="panel-block">
                <h3 class="panel-heading">"Why it matters"</h3>
                <p class="panel-why">{move || panel_why.get()}</p>
            </section>
            {(!best_practices.is_empty())
                .then(|| {
                    view! {
                        <section class="panel-block">
                            <h3 class="panel-heading">"Best practices"</h3>
                            <ul class="panel-list">
                                {best_practices
                                    .iter()
                                    .map(|p| view! { <li>{p.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}
            {(!designer_notes.is_empty())
                .then(|| {
                    view! {
                        <section class="panel-block">
                            <h3 class="panel-heading">"Designer notes"</h3>
                            <ul class="panel-list">
                                {designer_notes
                                    .iter()
                                    .map(|n| view! { <li>{n.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}
        </aside>
    }
}
