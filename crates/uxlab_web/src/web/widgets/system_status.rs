use leptos::prelude::*;

use super::super::timers::{clear_timeout, set_timeout};

#[component]
pub(super) fn SystemStatusDemo() -> impl IntoView {
    let (online, set_online) = signal(true);
    let (syncing, set_syncing) = signal(false);
    let (timeout_id, set_timeout_id) = signal::<Option<i32>>(None);

    let sync_now = move |_| {
        if syncing.get_untracked() || !online.get_untracked() {
            return;
        }
        set_syncing.set(true);
        let id = set_timeout(1200, move || {
            set_syncing.set(false);
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
        <div class="demo demo-status-board">
            <div class="status-chips">
                <span class=move || {
                    if online.get() { "chip ok" } else { "chip warn" }
                }>{move || if online.get() { "● Online" } else { "○ Offline" }}</span>
                <span class=move || if syncing.get() { "chip busy" } else { "chip" }>
                    {move || {
                        if syncing.get() {
                            "Syncing…"
                        } else if online.get() {
                            "All changes synced"
                        } else {
                            "Changes pending"
                        }
                    }}
                </span>
            </div>
            <div class="demo-row">
                <button class="btn ghost" on:click=move |_| set_online.update(|o| *o = !*o)>
                    {move || if online.get() { "Go offline" } else { "Go online" }}
                </button>
                <button class="btn" on:click=sync_now disabled=move || !online.get()>
                    "Sync now"
                </button>
            </div>
            <p class="demo-hint">
                "The state is always on screen — nobody has to open a settings page to learn whether their work is safe."
            </p>
        </div>
    }
}
