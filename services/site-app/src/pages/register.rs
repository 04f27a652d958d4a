//! Registration and final project submission pages

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::submission_form::SubmissionFormView;
use crate::submission::FormVariant;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Register" />
        <section class="px-4 pt-28 pb-16">
            <p class="max-w-2xl mx-auto mb-8 text-slate-400">
                "One registration per team. The video link must be a Google Drive or YouTube URL."
            </p>
            <SubmissionFormView variant=FormVariant::Registration heading="Team Registration" />
        </section>
    }
}

#[component]
pub fn ProjectSubmitPage() -> impl IntoView {
    view! {
        <Title text="Submit Project" />
        <section class="px-4 pt-28 pb-16">
            <p class="max-w-2xl mx-auto mb-8 text-slate-400">
                "Shortlisted teams submit their final build here: description, slides and any extra assets."
            </p>
            <SubmissionFormView variant=FormVariant::ProjectSubmission heading="Project Submission" />
        </section>
    }
}
