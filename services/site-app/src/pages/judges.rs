//! Hackathon judges

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::Reveal;
use crate::content::JUDGES;
use crate::motion::{stagger, Variant};

/// Two-letter monogram used in place of a portrait
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn JudgesPage() -> impl IntoView {
    view! {
        <Title text="Judges" />
        <section class="max-w-6xl mx-auto px-4 pt-28 pb-16">
            <h1 class="text-4xl font-extrabold text-slate-100">"Meet the Judges"</h1>
            <p class="mt-3 text-slate-400">"Researchers, engineers and founders who will evaluate your builds."</p>
            <div class="mt-10 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {JUDGES
                    .iter()
                    .enumerate()
                    .map(|(i, judge)| {
                        view! {
                            <Reveal
                                variant=stagger(Variant::fade_in_up(), i, 100)
                                class="rounded-xl border border-slate-800 bg-slate-900/60 p-6 text-center"
                            >
                                <div class="mx-auto flex h-20 w-20 items-center justify-center rounded-full bg-cyan-500/20 text-2xl font-bold text-cyan-300">
                                    {initials(judge.name)}
                                </div>
                                <h2 class="mt-4 text-lg font-semibold text-slate-100">{judge.name}</h2>
                                <p class="text-sm text-slate-400">{judge.role}", "{judge.organization}</p>
                                <p class="mt-2 text-sm text-cyan-400">{judge.expertise}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
