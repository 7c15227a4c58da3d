use leptos::prelude::*;

use super::super::timers::{clear_timeout, set_timeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
}

#[component]
pub(super) fn AutoSaveDemo() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (state, set_state) = signal(SaveState::Idle);
    let (timeout_id, set_timeout_id) = signal::<Option<i32>>(None);

    let on_input = move |ev| {
        set_text.set(event_target_value(&ev));
        set_state.set(SaveState::Saving);
        // Debounce: only the last keystroke's timer survives.
        if let Some(id) = timeout_id.get_untracked() {
            clear_timeout(id);
        }
        let id = set_timeout(900, move || {
            set_state.set(SaveState::Saved);
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
        <div class="demo demo-autosave">
            <textarea
                class="autosave-editor"
                placeholder="Start typing your note…"
                prop:value=move || text.get()
                on:input=on_input
            ></textarea>
            <div class=move || {
                match state.get() {
                    SaveState::Saving => "save-indicator busy",
                    _ => "save-indicator",
                }
            }>
                {move || match state.get() {
                    SaveState::Idle => "",
                    SaveState::Saving => "Saving…",
                    SaveState::Saved => "All changes saved ✓",
                }}
            </div>
            <p class="demo-hint">
                "The editor announces the moment it is saving and the fact that it has saved — the draft's safety is never a guess."
            </p>
        </div>
    }
}
