use leptos::prelude::*;

#[component]
pub(super) fn AboutPanel() -> impl IntoView {
    view! {
        <article class="about">
            <h2>"About UXLab"</h2>
            <p>
                "UXLab presents the classic usability heuristics and the most-cited UX laws "
                "as things you can feel, not just read. Each entry pairs a short explanation "
                "with interactive before/after scenarios and a gallery of real-world analogies."
            </p>
            <p>
                "The digital view hosts small, self-contained demos — break them, reset them, "
                "switch between them. The real-world view collects the same principle as it "
                "appears in elevators, kitchens and traffic."
            </p>
            <p class="subtle">
                "Content is static and loaded at startup; nothing you do here is recorded."
            </p>
        </article>
    }
}
