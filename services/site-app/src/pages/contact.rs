//! Contact page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;
use crate::components::submission_form::SubmissionFormView;
use crate::content::CONTACT_EMAIL;
use crate::motion::Variant;
use crate::submission::FormVariant;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <section class="max-w-5xl mx-auto px-4 pt-28 pb-16 grid gap-12 md:grid-cols-2">
            <Reveal variant=Variant::slide_in_left()>
                <h1 class="text-4xl font-extrabold text-slate-100">"Get in touch"</h1>
                <p class="mt-4 text-slate-400">
                    "Questions about the club or the hackathon? Write to us, or register your team right here."
                </p>
                <a href=format!("mailto:{}", CONTACT_EMAIL) class="mt-6 inline-block text-cyan-400 hover:underline">
                    {CONTACT_EMAIL}
                </a>
            </Reveal>
            <Reveal variant=Variant::slide_in_right()>
                <SubmissionFormView variant=FormVariant::Registration heading="Register your team" />
            </Reveal>
        </section>
    }
}
