use leptos::prelude::*;

const MIN_QTY: i32 = 0;
const MAX_QTY: i32 = 9;

#[component]
pub(super) fn StepperDemo() -> impl IntoView {
    let (count, set_count) = signal(1i32);

    view! {
        <div class="demo demo-stepper">
            <div class="stepper">
                <button
                    class="btn round"
                    on:click=move |_| set_count.update(|c| *c = (*c - 1).max(MIN_QTY))
                    disabled=move || count.get() <= MIN_QTY
                >
                    "−"
                </button>
                <span class="stepper-value">{move || count.get()}</span>
                <button
                    class="btn round"
                    on:click=move |_| set_count.update(|c| *c = (*c + 1).min(MAX_QTY))
                    disabled=move || count.get() >= MAX_QTY
                >
                    "+"
                </button>
            </div>
            <div class="demo-status">
                {move || {
                    let c = count.get();
                    if c == MAX_QTY {
                        format!("{c} — maximum per order")
                    } else if c == MIN_QTY {
                        "0 — item removed".to_string()
                    } else {
                        format!("{c} in cart")
                    }
                }}
            </div>
            <p class="demo-hint">
                "Every press changes the number on screen immediately, and the buttons disable at the limits instead of failing silently."
            </p>
        </div>
    }
}
