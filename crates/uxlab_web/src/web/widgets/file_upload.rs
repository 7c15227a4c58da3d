use leptos::prelude::*;

use super::super::timers::{clear_interval, set_interval};

#[component]
pub(super) fn FileUploadDemo() -> impl IntoView {
    let (progress, set_progress) = signal(0u32);
    let (uploading, set_uploading) = signal(false);
    let (interval_id, set_interval_id) = signal::<Option<i32>>(None);

    let stop = move || {
        if let Some(id) = interval_id.get_untracked() {
            clear_interval(id);
            set_interval_id.set(None);
        }
    };

    let start = move |_| {
        if interval_id.get_untracked().is_some() {
            return;
        }
        set_progress.set(0);
        set_uploading.set(true);
        let id = set_interval(80, move || {
            set_progress.update(|p| *p = (*p + 3).min(100));
        });
        set_interval_id.set(id);
    };

    Effect::new(move |_| {
        if progress.get() >= 100 {
            stop();
            set_uploading.set(false);
        }
    });

    let reset = move |_| {
        stop();
        set_uploading.set(false);
        set_progress.set(0);
    };

    on_cleanup(move || stop());

    view! {
        <div class="demo demo-upload">
            <div class="demo-row">
                <button class="btn" on:click=start disabled=move || uploading.get()>
                    "Upload file"
                </button>
                <button class="btn ghost" on:click=reset>
                    "Reset"
                </button>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress.get())
                ></div>
            </div>
            <div class="demo-status">
                {move || {
                    let p = progress.get();
                    if p >= 100 {
                        "Upload complete ✓".to_string()
                    } else if uploading.get() {
                        format!("Uploading… {p}%")
                    } else {
                        "report.pdf · 2.4 MB — ready to upload.".to_string()
                    }
                }}
            </div>
        </div>
    }
}
