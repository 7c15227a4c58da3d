use leptos::prelude::*;

const MIN_SIZE: u32 = 16;
const MAX_SIZE: u32 = 96;

#[component]
pub(super) fn TargetSizingDemo() -> impl IntoView {
    let (size, set_size) = signal(64u32);
    let (hits, set_hits) = signal(0u32);
    let (misses, set_misses) = signal(0u32);

    let on_slider = move |ev| {
        if let Ok(px) = event_target_value(&ev).parse::<u32>() {
            set_size.set(px.clamp(MIN_SIZE, MAX_SIZE));
        }
    };

    view! {
        <div class="demo demo-targets">
            <label class="demo-row">
                <span class="subtle">{move || format!("Target size: {} px", size.get())}</span>
                <input
                    type="range"
                    min=MIN_SIZE.to_string()
                    max=MAX_SIZE.to_string()
                    prop:value=move || size.get().to_string()
                    on:input=on_slider
                />
            </label>
            <div class="target-field" on:click=move |_| set_misses.update(|m| *m += 1)>
                <button
                    class="target-btn"
                    style=move || {
                        let px = size.get();
                        format!("width: {px}px; height: {px}px; font-size: {}px;", (px / 3).max(10))
                    }
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_hits.update(|h| *h += 1);
                    }
                >
                    "Tap"
                </button>
            </div>
            <div class="demo-status">
                {move || format!("Hits: {} · Misses: {}", hits.get(), misses.get())}
            </div>
            <p class="demo-hint">
                "Shrink the target and watch the miss count climb — distance and size set the speed limit for every pointer."
            </p>
        </div>
    }
}
