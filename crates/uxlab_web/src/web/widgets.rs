//! Demo widget host.
//!
//! Each demo is a self-contained leaf component: it owns its signals and
//! timers and is mounted fresh every time its scenario becomes active. The
//! host is the single place that maps the `DemoWidget` sum type to a
//! component, so an unmapped widget cannot exist.

use leptos::prelude::*;

use crate::ui_model::DemoWidget;

mod auto_save;
mod choice_overload;
mod file_upload;
mod loading_feedback;
mod stepper;
mod system_status;
mod target_sizing;

/// Mounts the demo for a scenario, or a placeholder when none is published.
#[component]
pub(super) fn DemoHost(widget: Option<DemoWidget>) -> impl IntoView {
    match widget {
        None => view! {
            <div class="coming-soon">
                <span class="coming-soon-icon">"🚧"</span>
                <p>"This demo is coming soon."</p>
            </div>
        }
        .into_any(),
        Some(DemoWidget::FileUpload) => {
            view! { <file_upload::FileUploadDemo /> }.into_any()
        }
        Some(DemoWidget::SystemStatus) => {
            view! { <system_status::SystemStatusDemo /> }.into_any()
        }
        Some(DemoWidget::Stepper) => view! { <stepper::StepperDemo /> }.into_any(),
        Some(DemoWidget::LoadingFeedback) => {
            view! { <loading_feedback::LoadingFeedbackDemo /> }.into_any()
        }
        Some(DemoWidget::AutoSave) => view! { <auto_save::AutoSaveDemo /> }.into_any(),
        Some(DemoWidget::ChoiceOverload) => {
            view! { <choice_overload::ChoiceOverloadDemo /> }.into_any()
        }
        Some(DemoWidget::TargetSizing) => {
            view! { <target_sizing::TargetSizingDemo /> }.into_any()
        }
    }
}
