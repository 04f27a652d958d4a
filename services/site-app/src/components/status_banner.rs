//! Submission outcome banner component

use leptos::prelude::*;

use crate::form::FormStatus;

/// A colored banner: green after a success, red after a failure
#[component]
pub fn StatusBanner(status: FormStatus, message: &'static str) -> impl IntoView {
    let (color, bg, border) = match status {
        FormStatus::Succeeded => ("#155724", "#d4edda", "#c3e6cb"),
        FormStatus::Failed => ("#721c24", "#f8d7da", "#f5c6cb"),
        FormStatus::Idle | FormStatus::Submitting => ("#383d41", "#e2e3e5", "#d6d8db"),
    };

    let style = format!(
        "padding: 0.75rem 1rem; border-radius: 0.5rem; font-weight: 600; \
         color: {}; background-color: {}; border: 1px solid {};",
        color, bg, border
    );

    view! {
        <div role="status" aria-live="polite" style=style>{message}</div>
    }
}
