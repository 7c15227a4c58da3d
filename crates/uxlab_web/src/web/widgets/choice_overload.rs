use leptos::prelude::*;
use web_time::Instant;

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 24;

#[component]
pub(super) fn ChoiceOverloadDemo() -> impl IntoView {
    let (option_count, set_option_count) = signal(4usize);
    let (target, set_target) = signal(0usize);
    let (last_ms, set_last_ms) = signal::<Option<u32>>(None);
    let round_started = StoredValue::new(Option::<Instant>::None);

    let new_round = move || {
        let n = option_count.get_untracked().max(MIN_OPTIONS);
        let pick = (js_sys::Math::random() * n as f64) as usize;
        set_target.set(pick.min(n - 1));
        round_started.set_value(Some(Instant::now()));
    };

    // A fresh round whenever the option count changes (and on mount).
    Effect::new(move |_| {
        let _ = option_count.get();
        new_round();
    });

    let on_slider = move |ev| {
        if let Ok(n) = event_target_value(&ev).parse::<usize>() {
            set_option_count.set(n.clamp(MIN_OPTIONS, MAX_OPTIONS));
            set_last_ms.set(None);
        }
    };

    let on_pick = move |index: usize| {
        if index != target.get_untracked() {
            return;
        }
        let elapsed = round_started
            .with_value(|s| s.map(|t| t.elapsed().as_millis() as u32));
        if let Some(ms) = elapsed {
            set_last_ms.set(Some(ms));
        }
        new_round();
    };

    view! {
        <div class="demo demo-choices">
            <label class="demo-row">
                <span class="subtle">{move || format!("{} options", option_count.get())}</span>
                <input
                    type="range"
                    min=MIN_OPTIONS.to_string()
                    max=MAX_OPTIONS.to_string()
                    prop:value=move || option_count.get().to_string()
                    on:input=on_slider
                />
            </label>
            <div class="choice-grid">
                {move || {
                    let n = option_count.get();
                    let starred = target.get();
                    (0..n)
                        .map(|i| {
                            view! {
                                <button class="btn sm choice" on:click=move |_| on_pick(i)>
                                    {if i == starred {
                                        format!("★ Option {}", i + 1)
                                    } else {
                                        format!("Option {}", i + 1)
                                    }}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="demo-status">
                {move || match last_ms.get() {
                    Some(ms) => format!("Found ★ in {ms} ms — now try with more options."),
                    None => "Find and press the ★ option.".to_string(),
                }}
            </div>
        </div>
    }
}
