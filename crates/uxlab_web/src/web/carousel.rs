//! Drag-to-scroll gallery of real-world analogy cards.
//!
//! The drag math (amplification, clamping, fixed-step paging) lives in
//! `uxlab::scroller`; this component wires it to pointer events and the
//! element's scroll offset. Pointer-leave ends a drag exactly like
//! pointer-up — the viewport must never stay in a dragging state after the
//! pointer is gone.

use leptos::prelude::*;

use uxlab::content::RealWorldCard;
use uxlab::scroller::{step_target, DragScroll, ScrollDirection};

#[component]
pub(super) fn RealWorldCarousel(cards: Vec<RealWorldCard>) -> impl IntoView {
    if cards.is_empty() {
        return ().into_any();
    }
    // A lone legacy card is shown plain, without paging controls.
    let single = cards.len() == 1;

    let viewport = NodeRef::<leptos::html::Div>::new();
    let drag = StoredValue::new(DragScroll::new());
    let (dragging, set_dragging) = signal(false);

    let max_scroll = move || {
        viewport
            .get_untracked()
            .map(|el| (el.scroll_width() - el.client_width()).max(0) as f64)
            .unwrap_or(0.0)
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if let Some(el) = viewport.get_untracked() {
            ev.prevent_default();
            drag.update_value(|d| d.begin(ev.client_x() as f64, el.scroll_left() as f64));
            set_dragging.set(true);
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !drag.with_value(|d| d.is_dragging()) {
            return;
        }
        ev.prevent_default();
        if let Some(el) = viewport.get_untracked() {
            let offset = drag.with_value(|d| d.offset_for(ev.client_x() as f64, max_scroll()));
            if let Some(offset) = offset {
                el.set_scroll_left(offset as i32);
            }
        }
    };

    let end_drag = move |_: leptos::ev::PointerEvent| {
        drag.update_value(|d| d.end());
        set_dragging.set(false);
    };

    let scroll_step = move |direction: ScrollDirection| {
        if let Some(el) = viewport.get_untracked() {
            let target = step_target(el.scroll_left() as f64, direction, max_scroll());
            let opts = web_sys::ScrollToOptions::new();
            opts.set_left(target);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&opts);
        }
    };

    view! {
        <div class="carousel">
            <div
                class=move || {
                    format!(
                        "carousel-viewport{}{}",
                        if single { " single" } else { "" },
                        if dragging.get() { " dragging" } else { "" },
                    )
                }
                node_ref=viewport
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=end_drag
                on:pointerleave=end_drag
            >
                {cards
                    .iter()
                    .map(|card| {
                        view! {
                            <figure class="carousel-card">
                                <img
                                    class="carousel-card-img"
                                    src=card.image.clone()
                                    alt=card.title.clone()
                                    draggable="false"
                                />
                                <figcaption class="carousel-card-overlay">
                                    <div class="carousel-card-title">{card.title.clone()}</div>
                                    <div class="carousel-card-desc">{card.description.clone()}</div>
                                    {card
                                        .why_it_matters
                                        .clone()
                                        .map(|why| {
                                            view! { <div class="carousel-card-why">{why}</div> }
                                        })}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>

            {(!single)
                .then(|| {
                    view! {
                        <button
                            class="carousel-btn prev"
                            title="Previous"
                            on:click=move |_| scroll_step(ScrollDirection::Prev)
                        >
                            "‹"
                        </button>
                        <button
                            class="carousel-btn next"
                            title="Next"
                            on:click=move |_| scroll_step(ScrollDirection::Next)
                        >
                            "›"
                        </button>
                    }
                })}
        </div>
    }
    .into_any()
}
