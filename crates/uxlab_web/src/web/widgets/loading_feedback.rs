use leptos::prelude::*;

use super::super::timers::{clear_timeout, set_timeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indicator {
    Blank,
    Spinner,
    Skeleton,
}

impl Indicator {
    fn label(self) -> &'static str {
        match self {
            Indicator::Blank => "Nothing",
            Indicator::Spinner => "Spinner",
            Indicator::Skeleton => "Skeleton",
        }
    }

    fn all() -> &'static [Indicator] {
        &[Indicator::Blank, Indicator::Spinner, Indicator::Skeleton]
    }
}

#[component]
pub(super) fn LoadingFeedbackDemo() -> impl IntoView {
    let (indicator, set_indicator) = signal(Indicator::Skeleton);
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let (timeout_id, set_timeout_id) = signal::<Option<i32>>(None);

    let reload = move |_| {
        if let Some(id) = timeout_id.get_untracked() {
            clear_timeout(id);
        }
        set_loaded.set(false);
        set_loading.set(true);
        let id = set_timeout(1500, move || {
            set_loading.set(false);
            set_loaded.set(true);
            set_timeout_id.set(None);
        });
        set_timeout_id.set(id);
    };

    on_cleanup(move || {
        if let Some(id) = timeout_id.get_untracked() {
            clear_timeout(id);
        }
    });

    view! {
        <div class="demo demo-loading">
            <div class="demo-row">
                {Indicator::all()
                    .iter()
                    .map(|&kind| {
                        view! {
                            <button
                                class=move || {
                                    if indicator.get() == kind { "btn sm active" } else { "btn sm ghost" }
                                }
                                on:click=move |_| set_indicator.set(kind)
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button class="btn" on:click=reload>
                    "Load inbox"
                </button>
            </div>
            <div class="loading-stage">
                {move || {
                    if loading.get() {
                        match indicator.get() {
                            Indicator::Blank => view! { <div class="loading-blank"></div> }.into_any(),
                            Indicator::Spinner => {
                                view! {
                                    <div class="loading-center">
                                        <div class="spinner"></div>
                                    </div>
                                }
                                .into_any()
                            }
                            Indicator::Skeleton => {
                                view! {
                                    <ul class="inbox">
                                        {(0..3)
                                            .map(|_| view! { <li class="inbox-row skeleton"></li> })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_any()
                            }
                        }
                    } else if loaded.get() {
                        view! {
                            <ul class="inbox">
                                <li class="inbox-row">"Weekly report is ready"</li>
                                <li class="inbox-row">"Invoice #2041 paid"</li>
                                <li class="inbox-row">"3 new comments on your draft"</li>
                            </ul>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="loading-center subtle">"Pick an indicator, then load."</div>
                        }
                        .into_any()
                    }
                }}
            </div>
            <p class="demo-hint">
                "The same wait feels different depending on what fills it — and a blank screen is the one users abandon."
            </p>
        </div>
    }
}
