//! Scenario Presentation Shell.
//!
//! One tab strip, one mounted scenario. Selecting a tab is the only way to
//! change the active scenario; every accepted change swaps the mounted demo
//! for a freshly built one, so demo state never survives a round trip.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use uxlab::scenario::ShellState;

use crate::ui_model::ScenarioDescriptor;

use super::widgets::DemoHost;

#[component]
pub(super) fn ScenarioShell(
    scenarios: &'static [ScenarioDescriptor],
    #[prop(optional, into)] on_scenario_change: Option<Callback<&'static ScenarioDescriptor>>,
) -> impl IntoView {
    if scenarios.is_empty() {
        return view! {
            <div class="scenario-empty">
                <span class="scenario-empty-icon">"🧪"</span>
                <p>"No scenarios published for this entry yet."</p>
            </div>
        }
        .into_any();
    }

    let shell = RwSignal::new(ShellState::new(scenarios.len()));

    let notify = move |index: usize| {
        if let Some(cb) = on_scenario_change {
            cb.run(&scenarios[index]);
        }
    };

    // Report the initial scenario before the sibling panel's first render.
    notify(0);

    let select = move |index: usize| {
        // Same-tab reselect stays a no-op so the demo is not remounted.
        if shell.get_untracked().active() == index {
            return;
        }
        let changed = shell.try_update(|s| s.select(index)).unwrap_or(false);
        if changed {
            notify(index);
        }
    };

    let on_tabs_keydown = move |ev: KeyboardEvent| {
        let active = shell.get_untracked().active();
        match ev.key().as_str() {
            "ArrowRight" => {
                ev.prevent_default();
                select((active + 1).min(scenarios.len() - 1));
            }
            "ArrowLeft" => {
                ev.prevent_default();
                select(active.saturating_sub(1));
            }
            _ => {}
        }
    };

    view! {
        <div class="scenario-shell">
            <div class="scenario-tabs" role="tablist" on:keydown=on_tabs_keydown>
                {scenarios
                    .iter()
                    .enumerate()
                    .map(|(i, d)| {
                        view! {
                            <button
                                class=move || {
                                    if shell.get().active() == i {
                                        "scenario-tab active"
                                    } else {
                                        "scenario-tab"
                                    }
                                }
                                role="tab"
                                on:click=move |_| select(i)
                            >
                                <span class="scenario-tab-icon">{d.icon}</span>
                                <span class="scenario-tab-label">{d.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="scenario-stage">
                {move || {
                    let state = shell.get();
                    let d = &scenarios[state.active()];
                    // Rebuilt per selection: the previous demo unmounts as this
                    // one mounts, and a revisited tab starts from scratch.
                    view! {
                        <div class="scenario-swap">
                            <p class="scenario-desc">{d.description}</p>
                            <DemoHost widget=d.widget />
                        </div>
                    }
                }}
            </div>
        </div>
    }
    .into_any()
}
